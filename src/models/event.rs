use crate::ingest::duration::parse_duration;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One CSV row, exactly as it appears in the file.
/// Empty cells deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "Start")]
    pub start: Option<String>,
    #[serde(rename = "End")]
    pub end: Option<String>,
    #[serde(rename = "Duration")]
    pub duration: Option<String>,
    #[serde(rename = "Start Condition")]
    pub start_condition: Option<String>,
    #[serde(rename = "Start Location")]
    pub start_location: Option<String>,
    #[serde(rename = "End Condition")]
    pub end_condition: Option<String>,
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}

/// A logged caregiving event after timestamp normalization.
///
/// `start`/`end` are `None` when the source text could not be parsed; such
/// events are excluded from every date-bucketed aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// `Type` column.
    pub kind: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    /// Raw `Duration` text ("MM:SS"), parsed on demand.
    pub duration: Option<String>,
    pub start_condition: Option<String>,
    pub start_location: Option<String>,
    pub end_condition: Option<String>,
    pub notes: Option<String>,
}

impl Event {
    pub fn is_type(&self, kind: &str) -> bool {
        self.kind.as_deref() == Some(kind)
    }

    /// Derived `Duration_minutes`. Recomputed on every call.
    pub fn duration_minutes(&self) -> Option<i64> {
        parse_duration(self.duration.as_deref())
    }

    /// Calendar date of `start`.
    pub fn day(&self) -> Option<NaiveDate> {
        self.start.map(|s| s.date())
    }

    /// Hour of day (0–23) of `start`.
    pub fn hour(&self) -> Option<u32> {
        self.start.map(|s| s.hour())
    }

    pub fn start_str(&self) -> String {
        fmt_opt_ts(self.start)
    }

    pub fn end_str(&self) -> String {
        fmt_opt_ts(self.end)
    }
}

fn fmt_opt_ts(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").ok()
    }

    fn event(kind: &str, start: Option<NaiveDateTime>, duration: Option<&str>) -> Event {
        Event {
            kind: Some(kind.to_string()),
            start,
            end: None,
            duration: duration.map(str::to_string),
            start_condition: None,
            start_location: None,
            end_condition: None,
            notes: None,
        }
    }

    #[test]
    fn derived_fields_follow_start() {
        let ev = event("Feed", at("2024-01-01 14:25"), Some("5:30"));
        assert_eq!(ev.hour(), Some(14));
        assert_eq!(ev.day(), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(ev.duration_minutes(), Some(330));
        assert!(ev.is_type("Feed"));
        assert!(!ev.is_type("feed"));
    }

    #[test]
    fn absent_start_has_no_derived_fields() {
        let ev = event("Sleep", None, None);
        assert_eq!(ev.hour(), None);
        assert_eq!(ev.day(), None);
        assert_eq!(ev.duration_minutes(), None);
        assert_eq!(ev.start_str(), "--");
    }
}
