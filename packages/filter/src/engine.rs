//! The hierarchical filter engine.
//!
//! Division and area are mandatory levels: until both are chosen the
//! visible set is empty, so the map never renders the overwhelming full
//! dataset by default. The zone narrows further only when selected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sewer_map_manhole_models::{FilterSelection, ManholeRecord, Status};

use crate::classify;

/// A record that survived filtering, annotated with its risk tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedManhole {
    /// The underlying record.
    pub record: ManholeRecord,
    /// Risk tier derived from the last operation date as of `today`.
    pub status: Status,
}

/// Filters the record set by the current selection and annotates survivors
/// with their status.
///
/// Pure: callers are responsible for clearing a single-feature selection
/// whose id is no longer present in the result (see
/// [`SelectionTracker::retain_present`](crate::selection::SelectionTracker::retain_present)).
#[must_use]
pub fn apply(
    records: &[ManholeRecord],
    selection: &FilterSelection,
    today: NaiveDate,
) -> Vec<ClassifiedManhole> {
    let (Some(division), Some(area_name)) = (selection.division(), selection.area_name()) else {
        return Vec::new();
    };

    records
        .iter()
        .filter(|record| {
            record.division.as_deref() == Some(division)
                && record.area_name.as_deref() == Some(area_name)
                && selection
                    .zone()
                    .is_none_or(|zone| record.zone.as_deref() == Some(zone))
        })
        .map(|record| ClassifiedManhole {
            record: record.clone(),
            status: classify::classify(record.last_operation_date, today),
        })
        .collect()
}
