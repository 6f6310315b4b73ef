use crate::models::Dataset;
use crate::models::summary::RangeAverages;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Averages for events of type `kind` whose Start date lies in `[from, to]`.
///
/// - `average_duration`: mean of the derived duration, absent values ignored
/// - `average_events`: matches divided by the number of distinct days that
///   have at least one match (not by the length of the range)
///
/// Either value is `None` when there is nothing to average.
pub fn range_averages(ds: &Dataset, kind: &str, from: NaiveDate, to: NaiveDate) -> RangeAverages {
    let selected: Vec<_> = ds
        .of_type(kind)
        .filter(|e| e.day().is_some_and(|d| d >= from && d <= to))
        .collect();

    let durations: Vec<i64> = selected.iter().filter_map(|e| e.duration_minutes()).collect();
    let average_duration = mean(&durations);

    let days: HashSet<NaiveDate> = selected.iter().filter_map(|e| e.day()).collect();
    let average_events = if days.is_empty() {
        None
    } else {
        Some(selected.len() as f64 / days.len() as f64)
    };

    RangeAverages {
        kind: kind.to_string(),
        from,
        to,
        matched: selected.len(),
        average_duration,
        average_events,
    }
}

fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64)
}
