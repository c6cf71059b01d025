//! Normalization of heterogeneous spreadsheet date cells.
//!
//! Source sheets mix two date representations: numeric day serials (when the
//! sheet formats the cell as a date) and `DD/MM/YYYY` or `DD-MM-YYYY` text
//! (when the author typed it). Both normalize to a plain calendar date;
//! time-of-day is always discarded.

use chrono::{Duration, NaiveDate};

use crate::CellValue;

/// Spreadsheet day serial of the Unix epoch: serial 25569 = 1970-01-01.
pub const UNIX_EPOCH_SERIAL: i64 = 25_569;

/// Converts a date cell to a calendar date.
///
/// Returns `None` for empty cells, string cells that do not split into
/// exactly three day/month/year tokens, and tokens that do not form a valid
/// calendar date. Fractional serials are truncated to whole days.
#[must_use]
pub fn normalize(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::Number(serial) => from_serial(*serial),
        CellValue::Text(text) => from_text(text),
        CellValue::Empty => None,
    }
}

/// Converts a spreadsheet day serial to a calendar date.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.floor() as i64 - UNIX_EPOCH_SERIAL;
    NaiveDate::from_ymd_opt(1970, 1, 1)?.checked_add_signed(Duration::days(days))
}

/// Parses `DD/MM/YYYY` or `DD-MM-YYYY` text. Day-month-year order is fixed;
/// any other token count fails.
#[must_use]
pub fn from_text(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.split(['/', '-']).collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };
    let day: u32 = day.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a normalized date back to the `DD/MM/YYYY` display convention
/// used by the source sheets and the map popups.
#[must_use]
pub fn format_display(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_anchor_is_unix_epoch() {
        assert_eq!(
            from_serial(25_569.0),
            Some(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
        );
    }

    #[test]
    fn serial_truncates_time_of_day() {
        // 45790 = 2025-05-13; the .73 fraction is an intra-day time.
        assert_eq!(
            from_serial(45_790.73),
            Some(NaiveDate::from_ymd_opt(2025, 5, 13).unwrap())
        );
    }

    #[test]
    fn serial_is_monotonic() {
        let serials = [100.0, 25_569.0, 30_000.5, 45_000.0, 45_790.0];
        let dates: Vec<_> = serials.iter().map(|s| from_serial(*s).unwrap()).collect();
        assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn parses_day_month_year_with_both_separators() {
        let expected = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();
        assert_eq!(from_text("12/05/2025"), Some(expected));
        assert_eq!(from_text("12-05-2025"), Some(expected));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(from_text("12/05"), None);
        assert_eq!(from_text("2025/05/12/00"), None);
        assert_eq!(from_text("May 12 2025"), None);
    }

    #[test]
    fn rejects_invalid_calendar_date() {
        assert_eq!(from_text("32/01/2025"), None);
        assert_eq!(from_text("01/13/2025"), None);
    }

    #[test]
    fn normalizes_cell_union() {
        assert_eq!(
            normalize(&CellValue::Number(25_569.0)),
            Some(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
        );
        assert_eq!(
            normalize(&CellValue::Text("01-02-2024".to_string())),
            Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        );
        assert_eq!(normalize(&CellValue::Empty), None);
    }

    #[test]
    fn formats_display_date() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
        assert_eq!(format_display(date), "03/05/2025");
    }
}
