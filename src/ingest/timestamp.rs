//! Best-effort `Start`/`End` parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 14] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
    "%b %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parses a timestamp in any of the supported layouts.
///
/// RFC 3339 values keep their wall-clock time and drop the offset.
/// Date-only values map to midnight. Anything else is `None`.
pub fn parse_timestamp(raw: Option<&str>) -> Option<NaiveDateTime> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt);
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn ymd_hm(dt: NaiveDateTime) -> (i32, u32, u32, u32, u32) {
        (dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute())
    }

    #[test]
    fn iso_layouts() {
        let dt = parse_timestamp(Some("2024-01-01 03:15:00")).unwrap();
        assert_eq!(ymd_hm(dt), (2024, 1, 1, 3, 15));

        let dt = parse_timestamp(Some("2024-01-01T14:05")).unwrap();
        assert_eq!(ymd_hm(dt), (2024, 1, 1, 14, 5));

        let dt = parse_timestamp(Some("2024-01-01 14:05:09.250")).unwrap();
        assert_eq!(dt.second(), 9);
    }

    #[test]
    fn rfc3339_keeps_wall_clock() {
        let dt = parse_timestamp(Some("2024-03-10T23:30:00+02:00")).unwrap();
        assert_eq!(ymd_hm(dt), (2024, 3, 10, 23, 30));
    }

    #[test]
    fn us_layouts_with_meridiem() {
        let dt = parse_timestamp(Some("01/02/2024 1:07 PM")).unwrap();
        assert_eq!(ymd_hm(dt), (2024, 1, 2, 13, 7));

        let dt = parse_timestamp(Some("12/31/2023 23:59")).unwrap();
        assert_eq!(ymd_hm(dt), (2023, 12, 31, 23, 59));
    }

    #[test]
    fn named_month_layouts() {
        let dt = parse_timestamp(Some("5 Feb 2024 06:40")).unwrap();
        assert_eq!(ymd_hm(dt), (2024, 2, 5, 6, 40));

        let dt = parse_timestamp(Some("Feb 5, 2024 06:40")).unwrap();
        assert_eq!(ymd_hm(dt), (2024, 2, 5, 6, 40));
    }

    #[test]
    fn date_only_is_midnight() {
        let dt = parse_timestamp(Some("2024-01-05")).unwrap();
        assert_eq!(ymd_hm(dt), (2024, 1, 5, 0, 0));
    }

    #[test]
    fn unparsable_values_are_absent() {
        assert_eq!(parse_timestamp(None), None);
        assert_eq!(parse_timestamp(Some("")), None);
        assert_eq!(parse_timestamp(Some("   ")), None);
        assert_eq!(parse_timestamp(Some("yesterday")), None);
        assert_eq!(parse_timestamp(Some("2024-13-01 10:00")), None);
    }
}
