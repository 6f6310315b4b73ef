use super::event::Event;
use chrono::NaiveDate;
use std::collections::HashSet;

/// All events of one loaded file.
///
/// Built once by the loader and never mutated afterwards: every aggregation
/// takes `&Dataset`, and loading another file produces a new value.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    source: String,
    events: Vec<Event>,
}

impl Dataset {
    pub fn new(source: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            source: source.into(),
            events,
        }
    }

    /// File name the dataset was loaded from (used in status messages).
    pub fn source_name(&self) -> &str {
        &self.source
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events whose Type equals `kind` (exact, case-sensitive).
    pub fn of_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| e.is_type(kind))
    }

    /// Distinct Type values in first-appearance order.
    pub fn types(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.events
            .iter()
            .filter_map(|e| e.kind.as_deref())
            .filter(|k| seen.insert(*k))
            .map(str::to_string)
            .collect()
    }

    /// Default date range: earliest and latest Start date.
    /// `None` when no event has a parsable Start.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut days = self.events.iter().filter_map(Event::day);
        let first = days.next()?;
        Some(days.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }
}
