// src/export/model.rs

use crate::errors::{AppError, AppResult};
use crate::models::summary::{ClosePair, DayCount, HeatmapMatrix, HourCount, RangeAverages};
use crate::utils::date::fmt_date;
use serde::Serialize;
use serde_json::Value;

/// A result table ready to be written in any export format.
///
/// `rows` hold display strings for CSV/XLSX (an undefined average is an
/// empty cell); `json` holds the typed result (an undefined average is
/// `null`).
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub sheet: &'static str,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub json: Value,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn counts(kind: &str, counts: &[DayCount]) -> AppResult<Self> {
        Ok(Self {
            title: format!("Event Count Over Time for {kind}"),
            sheet: "counts",
            headers: strings(["Start", "Event Count"]),
            rows: counts
                .iter()
                .map(|c| vec![fmt_date(c.day), c.count.to_string()])
                .collect(),
            json: to_json(counts)?,
        })
    }

    pub fn averages(avg: &RangeAverages) -> AppResult<Self> {
        Ok(Self {
            title: format!(
                "Average daily values for {} from {} to {}",
                avg.kind,
                fmt_date(avg.from),
                fmt_date(avg.to)
            ),
            sheet: "averages",
            headers: strings([
                "Type",
                "From",
                "To",
                "Average Duration (Minutes)",
                "Average Number of Events",
            ]),
            rows: vec![vec![
                avg.kind.clone(),
                fmt_date(avg.from),
                fmt_date(avg.to),
                opt_num(avg.average_duration),
                opt_num(avg.average_events),
            ]],
            json: to_json(avg)?,
        })
    }

    /// One row per hour (0–23), one column per day.
    pub fn heatmap(kind: &str, matrix: &HeatmapMatrix) -> AppResult<Self> {
        let mut headers = vec!["Hour".to_string()];
        headers.extend(matrix.days.iter().map(|d| fmt_date(*d)));

        let rows = if matrix.days.is_empty() {
            Vec::new()
        } else {
            matrix
                .counts
                .iter()
                .enumerate()
                .map(|(hour, row)| {
                    let mut cells = vec![hour.to_string()];
                    cells.extend(row.iter().map(usize::to_string));
                    cells
                })
                .collect()
        };

        Ok(Self {
            title: format!("Calendar Heatmap of Events by Hour and Day for {kind}"),
            sheet: "heatmap",
            headers,
            rows,
            json: to_json(matrix)?,
        })
    }

    pub fn hours(kind: &str, hours: &[HourCount]) -> AppResult<Self> {
        Ok(Self {
            title: format!("Events by Hour of Day for {kind}"),
            sheet: "hours",
            headers: strings(["Hour", "Event Count"]),
            rows: hours
                .iter()
                .map(|h| vec![h.hour.to_string(), h.count.to_string()])
                .collect(),
            json: to_json(hours)?,
        })
    }

    pub fn pairs(first: &str, second: &str, pairs: &[ClosePair]) -> AppResult<Self> {
        Ok(Self {
            title: format!("{first} events close to the end of a {second} event"),
            sheet: "pairs",
            headers: strings(["Start Location", "Start", "End", "Gap (Minutes)"]),
            rows: pairs
                .iter()
                .map(|p| {
                    vec![
                        p.location.clone(),
                        p.first_start.format("%Y-%m-%d %H:%M").to_string(),
                        p.second_end.format("%Y-%m-%d %H:%M").to_string(),
                        p.gap_minutes.to_string(),
                    ]
                })
                .collect(),
            json: to_json(pairs)?,
        })
    }
}

fn strings<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Same two decimals as the terminal table; blank when undefined.
fn opt_num(v: Option<f64>) -> String {
    v.filter(|x| x.is_finite())
        .map(|x| format!("{x:.2}"))
        .unwrap_or_default()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}
