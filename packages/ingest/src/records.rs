//! Conversion of raw spreadsheet rows into normalized record types.
//!
//! Per-record failures are isolated: a row with an unparseable date keeps
//! its record (the date is simply absent, and classification fails open),
//! while a row without identity or geometry is skipped with a warning.

use std::collections::BTreeSet;

use sewer_map_manhole_models::{ManholeRecord, WardInfo};

use crate::dates;
use crate::fields::{self, RawRow};

/// Normalizes the manhole registry rows.
///
/// Rows missing an id or coordinates cannot be plotted and are skipped.
/// Duplicate ids keep the first occurrence; the working set must key
/// feature state by id, so a second occurrence is dropped with a warning.
#[must_use]
pub fn manhole_records(rows: &[RawRow]) -> Vec<ManholeRecord> {
    let mut seen_ids = BTreeSet::new();
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        if row.is_empty() {
            continue;
        }
        let Some(id) = row.text(fields::MANHOLE_ID) else {
            log::warn!("Skipping manhole row without an id");
            continue;
        };
        let (Some(longitude), Some(latitude)) = (
            row.number(fields::LONGITUDE),
            row.number(fields::LATITUDE),
        ) else {
            log::warn!("Skipping manhole {id}: missing coordinates");
            continue;
        };
        if !seen_ids.insert(id.clone()) {
            log::warn!("Skipping duplicate manhole id {id}");
            continue;
        }

        let date_cell = row.get(fields::LAST_OPERATION_DATE);
        let last_operation_date = date_cell.and_then(dates::normalize);
        if let Some(cell) = date_cell
            && last_operation_date.is_none()
        {
            log::warn!("Manhole {id}: unparseable last operation date {cell:?}");
        }

        records.push(ManholeRecord {
            id,
            longitude,
            latitude,
            division: row.text(fields::DIVISION),
            area_name: row.text(fields::AREA_NAME),
            zone: row.text(fields::ZONE),
            last_operation_date,
        });
    }

    log::info!(
        "Normalized {} of {} manhole rows",
        records.len(),
        rows.len()
    );
    records
}

/// Normalizes the ward metadata rows. Rows without a ward name are skipped.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn ward_info_records(rows: &[RawRow]) -> Vec<WardInfo> {
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(name) = row.text(fields::AREA_NAME) else {
            if !row.is_empty() {
                log::warn!("Skipping ward metadata row without a name");
            }
            continue;
        };

        records.push(WardInfo {
            name,
            population: row
                .number(fields::WARD_POPULATION)
                .and_then(|n| u64::try_from(n.trunc() as i64).ok()),
            sewer_length_km: row.number(fields::WARD_SEWER_LENGTH_KM),
            perimeter_m: row.number(fields::WARD_PERIMETER_M),
            residential_km: row.number(fields::WARD_RESIDENTIAL_KM),
            slum_km: row.number(fields::WARD_SLUM_KM),
            waterbody_km: row.number(fields::WARD_WATERBODY_KM),
            robot_count: row
                .number(fields::WARD_ROBOT_COUNT)
                .and_then(|n| u32::try_from(n.trunc() as i64).ok()),
            waste_collected_kg: row.number(fields::WARD_WASTE_COLLECTED_KG),
        });
    }

    records
}

/// Unions a remote record set with a local fallback file.
///
/// Remote records take precedence: a local record whose id already appeared
/// remotely is dropped, keeping ids unique within the merged working set.
#[must_use]
pub fn merge_sources(
    remote: Vec<ManholeRecord>,
    local: Vec<ManholeRecord>,
) -> Vec<ManholeRecord> {
    let mut seen: BTreeSet<String> = remote.iter().map(|record| record.id.clone()).collect();
    let mut merged = remote;

    for record in local {
        if seen.insert(record.id.clone()) {
            merged.push(record);
        }
    }

    merged
}
