#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! The map rendering boundary.
//!
//! The core never talks to a concrete map library. It drives a
//! [`MapSurface`], an explicit context object carrying the commands the
//! dashboard needs, so the filtering logic stays decoupled from any
//! specific renderer and testable against a recording double.

pub mod expression;
pub mod features;
pub mod sync;

pub use expression::StatusTab;
pub use sync::MapSync;

use sewer_map_geography_models::{BoundingBox, LngLat};

/// Source id for the manhole feature collection.
pub const MANHOLES_SOURCE: &str = "manholes";

/// Layer id for the manhole dot layer, targeted by status filters.
pub const MANHOLE_LAYER: &str = "manhole-dots";

/// Source id for the highlighted ward polygon.
pub const WARD_SOURCE: &str = "ward-polygon";

/// Commands the rendering collaborator must support.
///
/// Implementations are thin adapters over a concrete map library; the
/// dashboard session issues every command through this trait.
pub trait MapSurface {
    /// Replaces (or creates) a `GeoJSON` source's data wholesale.
    fn add_or_update_source(&mut self, source_id: &str, data: serde_json::Value);

    /// Removes a source and any layers drawn from it.
    fn remove_source(&mut self, source_id: &str);

    /// Sets (or clears, with `None`) a layer's filter expression.
    fn set_filter(&mut self, layer_id: &str, filter: Option<serde_json::Value>);

    /// Sets the per-feature boolean `selected` state for one feature.
    fn set_feature_state(&mut self, source_id: &str, feature_id: &str, selected: bool);

    /// Moves the viewport to a center and zoom.
    fn fly_to(&mut self, center: LngLat, zoom: f64);

    /// Fits the viewport to a bounding region with pixel padding.
    fn fit_bounds(&mut self, bounds: BoundingBox, padding_px: f64);
}
