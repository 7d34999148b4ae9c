//! Timestamp and archive-date formatting.
//!
//! Descriptor timestamps are always UTC in the compact ISO 8601 form
//! `YYYY-MM-DDTHH:MM:SSZ`. Archive headlines use English long-form dates
//! (`March 5th, 2024`).

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Format used for `dateCreated`, `datePublished` and `dateModified`.
pub const ISO_8601_UTC: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format a UTC timestamp as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn iso8601(time: DateTime<Utc>) -> String {
    time.format(ISO_8601_UTC).to_string()
}

/// Pick the modification timestamp for a descriptor.
///
/// A modification time earlier than the creation time (clock skew, imported
/// content) is clamped to the creation time.
pub fn effective_modified(created: DateTime<Utc>, modified: DateTime<Utc>) -> DateTime<Utc> {
    if modified >= created { modified } else { created }
}

/// English ordinal suffix for a day of month: `st`, `nd`, `rd` or `th`.
pub const fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `March, 2024`
pub fn month_year(date: NaiveDate) -> String {
    format!("{}, {}", date.format("%B"), date.year())
}

/// `March 5th, 2024`
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// `March 5th 3:04:05 PM`
pub fn long_time(time: NaiveDateTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!(
        "{} {}{} {}:{:02}:{:02} {}",
        time.format("%B"),
        time.day(),
        ordinal_suffix(time.day()),
        hour,
        time.minute(),
        time.second(),
        if is_pm { "PM" } else { "AM" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_iso8601_format() {
        let time = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap();
        assert_eq!(iso8601(time), "2024-01-15T10:30:45Z");
    }

    #[test]
    fn test_iso8601_epoch() {
        assert_eq!(iso8601(utc(0)), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_effective_modified_forward() {
        assert_eq!(effective_modified(utc(100), utc(200)), utc(200));
        assert_eq!(effective_modified(utc(100), utc(100)), utc(100));
    }

    #[test]
    fn test_effective_modified_clock_skew() {
        assert_eq!(effective_modified(utc(200), utc(100)), utc(200));
    }

    #[test]
    fn test_ordinal_suffix() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn test_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(month_year(date), "March, 2024");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(long_date(date), "March 5th, 2024");
    }

    #[test]
    fn test_long_time_afternoon() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap();
        assert_eq!(long_time(time), "March 5th 3:04:05 PM");
    }

    #[test]
    fn test_long_time_midnight() {
        let time = NaiveDate::from_ymd_opt(2024, 12, 22)
            .unwrap()
            .and_hms_opt(0, 0, 9)
            .unwrap();
        assert_eq!(long_time(time), "December 22nd 12:00:09 AM");
    }
}
