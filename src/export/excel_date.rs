// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

/// Interpret a cell as a date or date-time, returning the Excel serial and
/// the number format to display it with.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(("yyyy-mm-dd hh:mm", excel_serial(&dt)?));
        }
    }

    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(("yyyy-mm-dd", excel_serial(&d.and_hms_opt(0, 0, 0)?)?))
}

fn excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let secs = (*dt - epoch).num_seconds() as f64;
    Some(secs / 86_400.0)
}
