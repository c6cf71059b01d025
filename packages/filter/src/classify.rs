//! Risk-tier classification from days elapsed since the last cleaning.

use chrono::{Local, NaiveDate};
use sewer_map_manhole_models::Status;

/// Elapsed days at which a manhole becomes [`Status::Danger`] (inclusive).
pub const DANGER_AFTER_DAYS: i64 = 20;

/// Elapsed days at which a manhole becomes [`Status::Warning`] (inclusive).
pub const WARNING_AFTER_DAYS: i64 = 10;

/// Classifies a manhole by its last cleaning date.
///
/// A missing date (absent or unparseable in the source) classifies as
/// [`Status::Safe`]: unknown is never treated as higher risk. The source
/// system consistently chose this fail-open default; it is preserved here
/// even though a missing date plausibly means "never cleaned".
///
/// Elapsed time is the calendar-day difference, truncated, not rounded.
/// Tiers are checked in descending severity so a date satisfying both
/// thresholds yields the more severe one. Classification must be repeated
/// daily against the same stored date, since elapsed time advances without
/// new data, which is why `today` is an explicit argument.
#[must_use]
pub fn classify(last_cleaned: Option<NaiveDate>, today: NaiveDate) -> Status {
    let Some(last_cleaned) = last_cleaned else {
        return Status::Safe;
    };
    let elapsed_days = (today - last_cleaned).num_days();
    if elapsed_days >= DANGER_AFTER_DAYS {
        Status::Danger
    } else if elapsed_days >= WARNING_AFTER_DAYS {
        Status::Warning
    } else {
        Status::Safe
    }
}

/// [`classify`] against the local calendar date.
#[must_use]
pub fn classify_today(last_cleaned: Option<NaiveDate>) -> Status {
    classify(last_cleaned, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn days_ago(days: i64) -> Option<NaiveDate> {
        Some(today() - Duration::days(days))
    }

    #[test]
    fn missing_date_is_always_safe() {
        assert_eq!(classify(None, today()), Status::Safe);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(classify(days_ago(20), today()), Status::Danger);
        assert_eq!(classify(days_ago(19), today()), Status::Warning);
        assert_eq!(classify(days_ago(10), today()), Status::Warning);
        assert_eq!(classify(days_ago(9), today()), Status::Safe);
    }

    #[test]
    fn old_dates_stay_danger() {
        assert_eq!(classify(days_ago(400), today()), Status::Danger);
    }

    #[test]
    fn future_date_is_safe() {
        assert_eq!(classify(days_ago(-3), today()), Status::Safe);
    }

    #[test]
    fn same_day_is_safe() {
        assert_eq!(classify(days_ago(0), today()), Status::Safe);
    }
}
