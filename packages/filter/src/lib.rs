#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! The status and filtering core of the sewer-map dashboard.
//!
//! Everything here is a pure function of its inputs: classification takes
//! an explicit `today`, option indexing and filtering take the full record
//! set plus the current selection, and the selection tracker is a two-state
//! machine whose transitions are returned to the caller instead of applied
//! as side effects. State transitions in the owning session invoke these
//! explicitly after each change; there is no implicit recomputation.

pub mod classify;
pub mod engine;
pub mod index;
pub mod selection;

pub use classify::{classify, classify_today, DANGER_AFTER_DAYS, WARNING_AFTER_DAYS};
pub use engine::{apply, ClassifiedManhole};
pub use index::{index_options, FilterOptions};
pub use selection::{SelectionChange, SelectionTracker};
