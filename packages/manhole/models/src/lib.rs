#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Core manhole monitoring types shared across the whole sewer-map system.
//!
//! Ingestion normalizes heterogeneous spreadsheet rows into [`ManholeRecord`]
//! values; everything downstream (classification, filtering, map sync) works
//! exclusively with the types defined here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Risk tier for a manhole based on days elapsed since its last cleaning.
///
/// Serialized lowercase so the value can be used directly as the `status`
/// property in map feature bags and renderer filter expressions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    /// Cleaned recently; regular maintenance only.
    Safe,
    /// Cleaning overdue; requires attention.
    Warning,
    /// Severely overdue; immediate action needed.
    Danger,
}

/// One monitored sewer access point, normalized from a spreadsheet row.
///
/// Hierarchy attributes are optional because the source sheets are not fully
/// normalized; missing values are never surfaced as selectable blanks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManholeRecord {
    /// Stable unique identifier, used as the map feature-state key.
    pub id: String,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Broadest administrative level.
    pub division: Option<String>,
    /// Ward / area name, nested under the division.
    pub area_name: Option<String>,
    /// Narrowest administrative level.
    pub zone: Option<String>,
    /// Date of the most recent cleaning operation. `None` when the source
    /// cell was absent or unparseable; classification fails open to safe.
    pub last_operation_date: Option<NaiveDate>,
}

/// Current hierarchical filter state: division → area → zone.
///
/// `None` at any level means "All" (unselected). Fields are private so the
/// cascade invariant cannot be bypassed: a level may only hold a value while
/// every ancestor level holds one, and selecting a level resets everything
/// below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    division: Option<String>,
    area_name: Option<String>,
    zone: Option<String>,
}

impl FilterSelection {
    /// Selects a division (or clears it with `None`), resetting the
    /// dependent area and zone levels to "All".
    pub fn select_division(&mut self, division: Option<String>) {
        self.division = division.filter(|value| !value.is_empty());
        self.area_name = None;
        self.zone = None;
    }

    /// Selects an area within the current division, resetting the zone.
    ///
    /// Ignored (beyond the zone reset) while no division is selected.
    pub fn select_area(&mut self, area_name: Option<String>) {
        self.area_name = if self.division.is_some() {
            area_name.filter(|value| !value.is_empty())
        } else {
            None
        };
        self.zone = None;
    }

    /// Selects a zone within the current division + area.
    ///
    /// Ignored while either ancestor level is unselected; the zone may stay
    /// "All" with fixed ancestors.
    pub fn select_zone(&mut self, zone: Option<String>) {
        self.zone = if self.division.is_some() && self.area_name.is_some() {
            zone.filter(|value| !value.is_empty())
        } else {
            None
        };
    }

    /// Clears all three levels back to "All".
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn division(&self) -> Option<&str> {
        self.division.as_deref()
    }

    #[must_use]
    pub fn area_name(&self) -> Option<&str> {
        self.area_name.as_deref()
    }

    #[must_use]
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }
}

/// Descriptive metadata for one ward, from the ward data sheet.
///
/// Every field except the name is optional; the report sheets are sparse and
/// a missing figure only blanks out the corresponding card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardInfo {
    /// Ward name, matched case-insensitively against `ManholeRecord::area_name`.
    pub name: String,
    /// Resident population.
    pub population: Option<u64>,
    /// Total sewer length in kilometres.
    pub sewer_length_km: Option<f64>,
    /// Ward boundary perimeter in metres.
    pub perimeter_m: Option<f64>,
    /// Sewer length through residential land use, in kilometres.
    pub residential_km: Option<f64>,
    /// Sewer length through slum land use, in kilometres.
    pub slum_km: Option<f64>,
    /// Sewer length adjacent to waterbodies, in kilometres.
    pub waterbody_km: Option<f64>,
    /// Number of cleaning robots deployed in the ward.
    pub robot_count: Option<u32>,
    /// Total waste collected in the ward, in kilograms.
    pub waste_collected_kg: Option<f64>,
}
