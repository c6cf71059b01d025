//! `GeoJSON` feature building for the manhole source.

use sewer_map_filter::ClassifiedManhole;
use serde_json::json;

/// Builds the manhole feature collection handed to the renderer.
///
/// Each feature carries the stable record id (promoted as the feature id
/// so per-feature `selected` state can be keyed by it), a point geometry,
/// and a properties bag including the derived lowercase `status` and the
/// `DD/MM/YYYY` display form of the last cleaning date.
#[must_use]
pub fn feature_collection(visible: &[ClassifiedManhole]) -> serde_json::Value {
    let features: Vec<serde_json::Value> = visible
        .iter()
        .map(|classified| {
            let record = &classified.record;
            json!({
                "type": "Feature",
                "id": record.id,
                "geometry": {
                    "type": "Point",
                    "coordinates": [record.longitude, record.latitude],
                },
                "properties": {
                    "id": record.id,
                    "division": record.division,
                    "areaName": record.area_name,
                    "zone": record.zone,
                    "lastCleaned": record
                        .last_operation_date
                        .map(|date| date.format("%d/%m/%Y").to_string()),
                    "status": classified.status,
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Builds the single-polygon feature for a highlighted ward boundary.
#[must_use]
pub fn ward_polygon(ring: &[[f64; 2]]) -> serde_json::Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring],
        },
    })
}
