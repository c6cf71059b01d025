//! Cascading filter option derivation.
//!
//! Produces the distinct value sets that populate the division → area →
//! zone selects, respecting the dependency order: areas are scoped to the
//! selected division, zones to the selected division + area. The "All"
//! sentinel is the consumer's concern; only real values are returned.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sewer_map_manhole_models::{FilterSelection, ManholeRecord};

/// Available options for the three cascading filter controls.
///
/// Each list is distinct, non-empty, and sorted ascending (case-sensitive
/// lexical); equal inputs always produce byte-identical outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub divisions: Vec<String>,
    pub areas: Vec<String>,
    pub zones: Vec<String>,
}

/// Derives the option lists for the current selection.
#[must_use]
pub fn index_options(records: &[ManholeRecord], selection: &FilterSelection) -> FilterOptions {
    let divisions = distinct(records, |record| record.division.as_deref());

    let areas = selection.division().map_or_else(Vec::new, |division| {
        distinct(records, |record| {
            (record.division.as_deref() == Some(division))
                .then_some(record.area_name.as_deref())
                .flatten()
        })
    });

    let zones = match (selection.division(), selection.area_name()) {
        (Some(division), Some(area_name)) => distinct(records, |record| {
            (record.division.as_deref() == Some(division)
                && record.area_name.as_deref() == Some(area_name))
            .then_some(record.zone.as_deref())
            .flatten()
        }),
        _ => Vec::new(),
    };

    FilterOptions {
        divisions,
        areas,
        zones,
    }
}

fn distinct<'a>(
    records: &'a [ManholeRecord],
    field: impl Fn(&'a ManholeRecord) -> Option<&'a str>,
) -> Vec<String> {
    records
        .iter()
        .filter_map(field)
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
