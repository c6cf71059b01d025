//! Field-alias resolution for loosely named spreadsheet columns.
//!
//! Each logical field carries an ordered alias list; headers are
//! canonicalized before matching so `s.no`, `S.no`, and `s_no` all resolve
//! to the same column. Resolution happens once at ingestion; ambiguity
//! never leaks past this module.

use std::collections::BTreeMap;

use crate::CellValue;

/// Aliases for the manhole registry's identity column.
pub const MANHOLE_ID: &[&str] = &["id", "manhole_id", "s_no", "sno"];
/// Aliases for longitude. `x` is the ward-vertex sheet convention.
pub const LONGITUDE: &[&str] = &["longitude", "lng", "lon", "x"];
/// Aliases for latitude. `y` is the ward-vertex sheet convention.
pub const LATITUDE: &[&str] = &["latitude", "lat", "y"];
/// Aliases for the division column.
pub const DIVISION: &[&str] = &["division"];
/// Aliases for the area / ward name column.
pub const AREA_NAME: &[&str] = &["area_name", "area", "ward", "ward_name"];
/// Aliases for the zone column.
pub const ZONE: &[&str] = &["zone"];
/// Aliases for the last cleaning operation date column.
pub const LAST_OPERATION_DATE: &[&str] = &["last_operation_date", "last_operation", "last_cleaned"];
/// Aliases for the explicit vertex order index in the boundary sheet.
pub const VERTEX_ORDER: &[&str] = &["order", "point_order", "vertex_order", "seq"];

/// Aliases for the ward metadata sheet.
pub const WARD_POPULATION: &[&str] = &["population"];
pub const WARD_SEWER_LENGTH_KM: &[&str] = &["sewer_length_km", "sewer_length"];
pub const WARD_PERIMETER_M: &[&str] = &["perimeter_m", "perimeter"];
pub const WARD_RESIDENTIAL_KM: &[&str] = &["residential_km", "residential"];
pub const WARD_SLUM_KM: &[&str] = &["slum_km", "slum"];
pub const WARD_WATERBODY_KM: &[&str] = &["waterbody_km", "waterbody"];
pub const WARD_ROBOT_COUNT: &[&str] = &["robots", "robot_count"];
pub const WARD_WASTE_COLLECTED_KG: &[&str] = &["waste_collected_kg", "waste_collected"];

/// Canonical form of a column header: trimmed, lowercased, with `.`, `-`,
/// and spaces collapsed to `_`.
#[must_use]
pub fn canonical_key(header: &str) -> String {
    header
        .trim()
        .chars()
        .map(|c| match c {
            '.' | '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// One spreadsheet row with canonicalized column keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: BTreeMap<String, CellValue>,
}

impl RawRow {
    /// Stores a cell under the canonical form of `header`.
    pub fn insert(&mut self, header: &str, value: CellValue) {
        self.cells.insert(canonical_key(header), value);
    }

    /// Resolves the first alias present in this row.
    #[must_use]
    pub fn get(&self, aliases: &[&str]) -> Option<&CellValue> {
        aliases
            .iter()
            .find_map(|alias| self.cells.get(*alias))
            .filter(|value| !value.is_empty())
    }

    /// Resolves a field as non-empty text. Numeric cells are rendered with
    /// their shortest representation so numeric ids remain stable keys.
    #[must_use]
    pub fn text(&self, aliases: &[&str]) -> Option<String> {
        match self.get(aliases)? {
            CellValue::Number(number) => {
                if number.fract() == 0.0 {
                    #[allow(clippy::cast_possible_truncation)]
                    Some(format!("{}", *number as i64))
                } else {
                    Some(format!("{number}"))
                }
            }
            CellValue::Text(text) => Some(text.clone()),
            CellValue::Empty => None,
        }
    }

    /// Resolves a field as a number.
    #[must_use]
    pub fn number(&self, aliases: &[&str]) -> Option<f64> {
        self.get(aliases)?.as_number()
    }

    /// Whether the row has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        let mut row = Self::default();
        for (header, value) in iter {
            row.insert(&header, value);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_header_variants() {
        assert_eq!(canonical_key("s.no"), "s_no");
        assert_eq!(canonical_key("S.no"), "s_no");
        assert_eq!(canonical_key(" Area Name "), "area_name");
        assert_eq!(canonical_key("last-operation-date"), "last_operation_date");
    }

    #[test]
    fn resolves_first_matching_alias() {
        let mut row = RawRow::default();
        row.insert("Ward", CellValue::Text("Hasmathpet".into()));
        assert_eq!(row.text(AREA_NAME), Some("Hasmathpet".to_string()));
    }

    #[test]
    fn alias_order_decides_ties() {
        let mut row = RawRow::default();
        row.insert("area", CellValue::Text("FromArea".into()));
        row.insert("ward", CellValue::Text("FromWard".into()));
        // `area_name` is absent; `area` precedes `ward` in the alias list.
        assert_eq!(row.text(AREA_NAME), Some("FromArea".to_string()));
    }

    #[test]
    fn numeric_id_renders_without_fraction() {
        let mut row = RawRow::default();
        row.insert("id", CellValue::Number(42.0));
        assert_eq!(row.text(MANHOLE_ID), Some("42".to_string()));
    }

    #[test]
    fn empty_cells_do_not_resolve() {
        let mut row = RawRow::default();
        row.insert("Zone", CellValue::Empty);
        assert_eq!(row.get(ZONE), None);
        assert_eq!(row.text(ZONE), None);
    }

    #[test]
    fn builds_from_header_value_pairs() {
        let row: RawRow = vec![
            ("S.no".to_string(), CellValue::Number(7.0)),
            ("Longitude".to_string(), CellValue::Number(78.4)),
        ]
        .into_iter()
        .collect();
        assert_eq!(row.text(MANHOLE_ID), Some("7".to_string()));
        assert_eq!(row.number(LONGITUDE), Some(78.4));
    }
}
