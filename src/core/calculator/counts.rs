use crate::models::Dataset;
use crate::models::event::Event;
use crate::models::summary::DayCount;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Events of type `kind` per calendar day of Start, oldest day first.
///
/// Events with an absent Start are skipped. No match → empty vector.
pub fn count_by_day(ds: &Dataset, kind: &str) -> Vec<DayCount> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for day in ds.of_type(kind).filter_map(Event::day) {
        *per_day.entry(day).or_default() += 1;
    }

    per_day
        .into_iter()
        .map(|(day, count)| DayCount { day, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::load_from_reader;

    fn dataset(body: &str) -> Dataset {
        let csv = format!(
            "Type,Start,End,Duration,Start Condition,Start Location,End Condition,Notes\n{body}"
        );
        load_from_reader("t.csv", csv.as_bytes()).unwrap().0
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn groups_by_start_date_ascending() {
        let ds = dataset(
            "Feed,2024-01-02 09:00,,,,,,\n\
             Feed,2024-01-01 03:00,,,,,,\n\
             Sleep,2024-01-01 04:00,,,,,,\n\
             Feed,2024-01-02 23:59,,,,,,\n\
             Feed,2024-01-01 14:00,,,,,,\n",
        );

        assert_eq!(
            count_by_day(&ds, "Feed"),
            vec![
                DayCount { day: d(2024, 1, 1), count: 2 },
                DayCount { day: d(2024, 1, 2), count: 2 },
            ]
        );
        assert_eq!(
            count_by_day(&ds, "Sleep"),
            vec![DayCount { day: d(2024, 1, 1), count: 1 }]
        );
    }

    #[test]
    fn unknown_type_is_empty_not_error() {
        let ds = dataset("Feed,2024-01-01 03:00,,,,,,\n");
        assert!(count_by_day(&ds, "Bath").is_empty());
        assert!(count_by_day(&Dataset::default(), "Feed").is_empty());
    }

    #[test]
    fn absent_start_is_excluded() {
        let ds = dataset("Feed,garbage,,,,,,\nFeed,2024-01-01 03:00,,,,,,\n");
        assert_eq!(
            count_by_day(&ds, "Feed"),
            vec![DayCount { day: d(2024, 1, 1), count: 1 }]
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let ds = dataset(
            "Feed,2024-01-03 09:00,,,,,,\n\
             Feed,2024-01-01 03:00,,,,,,\n\
             Feed,2024-01-02 14:00,,,,,,\n",
        );
        assert_eq!(count_by_day(&ds, "Feed"), count_by_day(&ds, "Feed"));
    }
}
