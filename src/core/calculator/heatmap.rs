//! Hour-of-day event density, optionally split by calendar day.

use crate::models::Dataset;
use crate::models::event::Event;
use crate::models::summary::{Heatmap, HeatmapMatrix, HourCount};
use chrono::NaiveDate;
use clap::ValueEnum;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeatmapGrouping {
    /// One bin per hour of day, dates collapsed.
    Hour,
    /// 24 hour rows × one column per day present.
    HourAndDay,
}

#[derive(Debug, Clone)]
pub struct HeatmapQuery<'a> {
    pub kind: &'a str,
    /// Inclusive Start-date filter; `None` keeps every dated event.
    pub range: Option<(NaiveDate, NaiveDate)>,
    pub grouping: HeatmapGrouping,
}

pub fn build_heatmap(ds: &Dataset, query: &HeatmapQuery<'_>) -> Heatmap {
    let selected: Vec<&Event> = ds
        .of_type(query.kind)
        .filter(|e| match (e.day(), query.range) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(d), Some((from, to))) => d >= from && d <= to,
        })
        .collect();

    match query.grouping {
        HeatmapGrouping::Hour => Heatmap::Hour {
            hours: by_hour(&selected),
        },
        HeatmapGrouping::HourAndDay => Heatmap::HourAndDay {
            matrix: by_hour_and_day(&selected),
        },
    }
}

/// Only hours with at least one event appear, ascending.
fn by_hour(events: &[&Event]) -> Vec<HourCount> {
    let mut bins: BTreeMap<u32, usize> = BTreeMap::new();
    for hour in events.iter().filter_map(|e| e.hour()) {
        *bins.entry(hour).or_default() += 1;
    }
    bins.into_iter()
        .map(|(hour, count)| HourCount { hour, count })
        .collect()
}

fn by_hour_and_day(events: &[&Event]) -> HeatmapMatrix {
    let days: Vec<NaiveDate> = events
        .iter()
        .filter_map(|e| e.day())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut counts = vec![vec![0usize; days.len()]; HeatmapMatrix::HOURS as usize];

    for ev in events {
        let (Some(day), Some(hour)) = (ev.day(), ev.hour()) else {
            continue;
        };
        if let Ok(col) = days.binary_search(&day) {
            counts[hour as usize][col] += 1;
        }
    }

    HeatmapMatrix { days, counts }
}
