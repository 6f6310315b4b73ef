use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Parse a range expression into inclusive bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(invalid(r, "start and end must have same format"));
            }
            (period_bounds(s)?.0, period_bounds(e)?.1)
        }
        None => period_bounds(r)?,
    };

    if start > end {
        return Err(invalid(r, "start is after end"));
    }
    Ok((start, end))
}

/// First and last day of a single YYYY / YYYY-MM / YYYY-MM-DD period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(p, "invalid year"))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(p, "invalid year"))?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(p, "invalid year"))?;
            Ok((first, last))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid(p, "invalid month"))?;
            Ok((first, last_day_of_month(first)))
        }
        10 => {
            let d = parse_date(p).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(invalid(p, "unsupported range format")),
    }
}

pub fn last_day_of_month(d: NaiveDate) -> NaiveDate {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(d)
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidRange(format!("{r} ({why})"))
}
