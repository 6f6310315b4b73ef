use crate::errors::{AppError, AppResult};
use crate::ingest::duration::parse_duration;
use crate::ingest::schema::validate_columns;
use crate::ingest::timestamp::parse_timestamp;
use crate::models::{Dataset, Event, RawEvent};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Per-field degradations encountered while loading.
///
/// A value counts as degraded when the cell had text but normalization
/// produced nothing. Empty cells are not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows: usize,
    pub unparsed_starts: usize,
    pub unparsed_ends: usize,
    pub unparsed_durations: usize,
}

impl LoadReport {
    pub fn degraded(&self) -> usize {
        self.unparsed_starts + self.unparsed_ends + self.unparsed_durations
    }
}

/// Load and validate a CSV activity log from disk.
pub fn load_dataset(path: &Path) -> AppResult<(Dataset, LoadReport)> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    debug!(path = %path.display(), "opening activity log");
    let file = File::open(path)?;
    load_from_reader(&name, file)
}

/// Load and validate a CSV activity log from any reader.
///
/// The header check runs before any row is read: a mismatch aborts the whole
/// load. Unparsable Start/End/Duration values only degrade that field.
pub fn load_from_reader<R: Read>(name: &str, reader: R) -> AppResult<(Dataset, LoadReport)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(AppError::EmptyFile(name.to_string()));
    }
    validate_columns(headers.iter())?;

    let mut report = LoadReport::default();
    let mut events = Vec::new();

    for row in rdr.deserialize::<RawEvent>() {
        let raw = row?;
        let event = normalize(raw, &mut report);
        events.push(event);
    }
    report.rows = events.len();

    debug!(
        rows = report.rows,
        unparsed_starts = report.unparsed_starts,
        unparsed_ends = report.unparsed_ends,
        unparsed_durations = report.unparsed_durations,
        "activity log loaded"
    );

    Ok((Dataset::new(name, events), report))
}

fn normalize(raw: RawEvent, report: &mut LoadReport) -> Event {
    let start = parse_timestamp(raw.start.as_deref());
    let end = parse_timestamp(raw.end.as_deref());

    if start.is_none() && has_text(&raw.start) {
        report.unparsed_starts += 1;
    }
    if end.is_none() && has_text(&raw.end) {
        report.unparsed_ends += 1;
    }
    if parse_duration(raw.duration.as_deref()).is_none() && has_text(&raw.duration) {
        report.unparsed_durations += 1;
    }

    Event {
        kind: raw.kind,
        start,
        end,
        duration: raw.duration,
        start_condition: raw.start_condition,
        start_location: raw.start_location,
        end_condition: raw.end_condition,
        notes: raw.notes,
    }
}

fn has_text(v: &Option<String>) -> bool {
    v.as_deref().is_some_and(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Type,Start,End,Duration,Start Condition,Start Location,End Condition,Notes\n";

    fn load(body: &str) -> AppResult<(Dataset, LoadReport)> {
        let csv = format!("{HEADER}{body}");
        load_from_reader("log.csv", csv.as_bytes())
    }

    #[test]
    fn loads_rows_in_file_order() {
        let (ds, report) = load(
            "Feed,2024-01-01 03:00,2024-01-01 03:10,10:00,,Couch,,\n\
             Diaper,2024-01-01 04:00,2024-01-01 04:05,,Wet,,,changed\n",
        )
        .unwrap();

        assert_eq!(ds.source_name(), "log.csv");
        assert_eq!(ds.len(), 2);
        assert_eq!(report.rows, 2);
        assert_eq!(report.degraded(), 0);

        let first = &ds.events()[0];
        assert_eq!(first.kind.as_deref(), Some("Feed"));
        assert_eq!(first.start_location.as_deref(), Some("Couch"));
        assert_eq!(first.duration_minutes(), Some(600));
        assert_eq!(first.notes, None);

        let second = &ds.events()[1];
        assert_eq!(second.start_condition.as_deref(), Some("Wet"));
        assert_eq!(second.notes.as_deref(), Some("changed"));
    }

    #[test]
    fn bad_fields_degrade_without_aborting() {
        let (ds, report) = load(
            "Feed,not a date,2024-01-01 03:10,bad,,,,\n\
             Feed,2024-01-01 05:00,??,7:xx,,,,\n",
        )
        .unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.events()[0].start, None);
        assert_eq!(ds.events()[1].end, None);
        assert_eq!(report.unparsed_starts, 1);
        assert_eq!(report.unparsed_ends, 1);
        assert_eq!(report.unparsed_durations, 2);
    }

    #[test]
    fn header_mismatch_aborts() {
        let csv = "Type,End,Start,Duration,Start Condition,Start Location,End Condition,Notes\n\
                   Feed,2024-01-01 03:00,2024-01-01 03:10,10:00,,,,\n";
        let err = load_from_reader("log.csv", csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::SchemaMismatch { .. }));
    }

    #[test]
    fn empty_input_is_reported() {
        let err = load_from_reader("empty.csv", "".as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::EmptyFile(_)));
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let (ds, report) = load("").unwrap();
        assert!(ds.is_empty());
        assert_eq!(report, LoadReport::default());
        assert_eq!(ds.date_bounds(), None);
    }
}
