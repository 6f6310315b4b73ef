use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Number of events of one Type that started on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub day: NaiveDate,
    pub count: usize,
}

/// Averages over a closed date range.
///
/// Both values are `None` when no event matched: an empty selection is not
/// the same thing as an average of zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeAverages {
    pub kind: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub matched: usize,
    pub average_duration: Option<f64>,
    pub average_events: Option<f64>,
}

/// Number of events that started in one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourCount {
    pub hour: u32,
    pub count: usize,
}

/// Hour × day count grid.
///
/// `counts[hour][col]` is the number of events in that hour on `days[col]`.
/// There are always 24 rows; cells without events hold 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapMatrix {
    pub days: Vec<NaiveDate>,
    pub counts: Vec<Vec<usize>>,
}

impl HeatmapMatrix {
    pub const HOURS: u32 = 24;

    /// Cell value; 0 for any (hour, day) pair without events,
    /// including days outside the matrix.
    pub fn get(&self, hour: u32, day: NaiveDate) -> usize {
        let Ok(col) = self.days.binary_search(&day) else {
            return 0;
        };
        self.counts
            .get(hour as usize)
            .and_then(|row| row.get(col))
            .copied()
            .unwrap_or(0)
    }

    pub fn max(&self) -> usize {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Result of the heatmap builder, shaped by the requested grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "grouping", rename_all = "snake_case")]
pub enum Heatmap {
    Hour { hours: Vec<HourCount> },
    HourAndDay { matrix: HeatmapMatrix },
}

/// A first-type event that started close to the end of a second-type event
/// at the same location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosePair {
    pub location: String,
    pub first_start: NaiveDateTime,
    pub second_end: NaiveDateTime,
    pub gap_minutes: i64,
}
