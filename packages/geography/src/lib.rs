#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Ward boundary ingestion and lookup.
//!
//! The boundary sheet lists one vertex per row (ward name, x/y coordinate,
//! optional explicit order index). Rows are grouped per ward into closed
//! rings; lookups are case-insensitive and whitespace-trimmed because the
//! sheet authors capitalize ward names inconsistently.

use std::collections::BTreeMap;

use sewer_map_geography_models::{BoundingBox, WardBoundary};
use sewer_map_ingest::fields::{self, RawRow};
use sewer_map_ingest::IngestError;

/// All ward boundaries from one boundary sheet load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WardBoundaries {
    boundaries: Vec<WardBoundary>,
}

impl WardBoundaries {
    /// Groups vertex rows into per-ward closed rings.
    ///
    /// Vertices keep sheet order unless a row carries an explicit order
    /// index, which then takes precedence. Wards whose closed ring is
    /// degenerate (fewer than 4 coordinates) are dropped with a warning and
    /// treated as absent.
    #[must_use]
    pub fn from_rows(rows: &[RawRow]) -> Self {
        let mut grouped: BTreeMap<String, Vec<(i64, [f64; 2])>> = BTreeMap::new();

        for (row_index, row) in rows.iter().enumerate() {
            let Some(name) = row.text(fields::AREA_NAME) else {
                if !row.is_empty() {
                    log::warn!("Skipping boundary vertex row without a ward name");
                }
                continue;
            };
            let (Some(lng), Some(lat)) = (
                row.number(fields::LONGITUDE),
                row.number(fields::LATITUDE),
            ) else {
                log::warn!("Skipping boundary vertex for {name}: missing coordinates");
                continue;
            };

            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let order = row
                .number(fields::VERTEX_ORDER)
                .map_or(row_index as i64, |n| n.trunc() as i64);
            grouped.entry(name).or_default().push((order, [lng, lat]));
        }

        let mut boundaries = Vec::with_capacity(grouped.len());
        for (name, mut vertices) in grouped {
            vertices.sort_by_key(|(order, _)| *order);
            let ring: Vec<[f64; 2]> = vertices.into_iter().map(|(_, coord)| coord).collect();
            match WardBoundary::from_vertices(&name, ring) {
                Some(boundary) => boundaries.push(boundary),
                None => log::warn!("Dropping degenerate boundary for ward {name}"),
            }
        }

        log::info!("Loaded {} ward boundaries", boundaries.len());
        Self { boundaries }
    }

    /// Parses a boundary sheet's tab-separated export.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Csv`] when the text is structurally malformed.
    pub fn from_tsv(text: &str) -> Result<Self, IngestError> {
        Ok(Self::from_rows(&sewer_map_ingest::delimited::read_tsv(
            text,
        )?))
    }

    /// Resolves a ward boundary by area name.
    ///
    /// Matching is case-insensitive and whitespace-trimmed on both sides;
    /// an exact-case lookup is never the only path. A miss is non-fatal:
    /// the caller skips polygon rendering and carries on.
    #[must_use]
    pub fn resolve(&self, area_name: &str) -> Option<&WardBoundary> {
        let query = area_name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.boundaries
            .iter()
            .find(|boundary| boundary.name.trim().to_lowercase() == query)
    }

    /// Viewport bounds for a ward, when its boundary is known.
    #[must_use]
    pub fn viewport_bounds(&self, area_name: &str) -> Option<BoundingBox> {
        self.resolve(area_name).and_then(WardBoundary::bounds)
    }

    /// Number of loaded boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Whether no boundaries are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }
}
