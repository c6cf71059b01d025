#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Ward boundary geometry primitives.
//!
//! A ward boundary is a single closed ring of (longitude, latitude)
//! vertices. Coordinates are always stored longitude-first, matching the
//! `GeoJSON` convention, regardless of how the source sheet ordered them.

use serde::{Deserialize, Serialize};

/// A single (longitude, latitude) vertex.
pub type LngLat = [f64; 2];

/// Minimum coordinate count for a renderable closed ring: three distinct
/// vertices plus the closing point.
pub const MIN_RING_COORDS: usize = 4;

/// A named ward boundary with a closed exterior ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardBoundary {
    /// Ward name as it appeared in the source sheet.
    pub name: String,
    /// Closed ring: the first vertex is repeated as the last.
    pub ring: Vec<LngLat>,
}

impl WardBoundary {
    /// Builds a boundary from an ordered vertex sequence, closing the ring
    /// if the source left it open.
    ///
    /// Returns `None` when the closed ring has fewer than
    /// [`MIN_RING_COORDS`] coordinates; such a boundary is treated as
    /// absent rather than rendered degenerate.
    #[must_use]
    pub fn from_vertices(name: impl Into<String>, mut vertices: Vec<LngLat>) -> Option<Self> {
        if let (Some(first), Some(last)) = (vertices.first().copied(), vertices.last())
            && first != *last
        {
            vertices.push(first);
        }
        if vertices.len() < MIN_RING_COORDS {
            return None;
        }
        Some(Self {
            name: name.into(),
            ring: vertices,
        })
    }

    /// Axis-aligned bounds of the ring, for viewport fitting.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_coords(&self.ring)
    }
}

/// Axis-aligned geographic bounding region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Builds the bounds of a coordinate sequence. `None` when empty.
    #[must_use]
    pub fn from_coords(coords: &[LngLat]) -> Option<Self> {
        let mut iter = coords.iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min_lng: first[0],
            min_lat: first[1],
            max_lng: first[0],
            max_lat: first[1],
        };
        for coord in iter {
            bounds.extend(*coord);
        }
        Some(bounds)
    }

    /// Grows the bounds to include a coordinate.
    pub fn extend(&mut self, coord: LngLat) {
        self.min_lng = self.min_lng.min(coord[0]);
        self.min_lat = self.min_lat.min(coord[1]);
        self.max_lng = self.max_lng.max(coord[0]);
        self.max_lat = self.max_lat.max(coord[1]);
    }

    /// Center of the bounds.
    #[must_use]
    pub fn center(&self) -> LngLat {
        [
            f64::midpoint(self.min_lng, self.max_lng),
            f64::midpoint(self.min_lat, self.max_lat),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_open_ring() {
        let boundary = WardBoundary::from_vertices(
            "Hasmathpet",
            vec![[78.0, 17.0], [78.1, 17.0], [78.1, 17.1]],
        )
        .unwrap();
        assert_eq!(boundary.ring.len(), 4);
        assert_eq!(boundary.ring.first(), boundary.ring.last());
    }

    #[test]
    fn keeps_already_closed_ring() {
        let boundary = WardBoundary::from_vertices(
            "Moosapet",
            vec![[78.0, 17.0], [78.1, 17.0], [78.1, 17.1], [78.0, 17.0]],
        )
        .unwrap();
        assert_eq!(boundary.ring.len(), 4);
    }

    #[test]
    fn rejects_degenerate_ring() {
        assert!(WardBoundary::from_vertices("Tiny", vec![[78.0, 17.0], [78.1, 17.0]]).is_none());
        assert!(WardBoundary::from_vertices("Empty", vec![]).is_none());
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let boundary =
            WardBoundary::from_vertices("KPHB", vec![[78.0, 17.2], [78.4, 17.0], [78.2, 17.5]])
                .unwrap();
        let bounds = boundary.bounds().unwrap();
        assert!((bounds.min_lng - 78.0).abs() < f64::EPSILON);
        assert!((bounds.max_lng - 78.4).abs() < f64::EPSILON);
        assert!((bounds.min_lat - 17.0).abs() < f64::EPSILON);
        assert!((bounds.max_lat - 17.5).abs() < f64::EPSILON);
    }

    #[test]
    fn bounding_box_center() {
        let bounds = BoundingBox::from_coords(&[[78.0, 17.0], [78.2, 17.4]]).unwrap();
        let center = bounds.center();
        assert!((center[0] - 78.1).abs() < 1e-9);
        assert!((center[1] - 17.2).abs() < 1e-9);
    }
}
