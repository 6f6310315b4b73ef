//! Events of one type that start shortly after (or before) the end of an
//! event of another type at the same location, e.g. a feed right after a
//! diaper change.

use crate::models::Dataset;
use crate::models::summary::ClosePair;
use chrono::Duration;

/// Inner join of `first`-type and `second`-type events on Start Location,
/// keeping pairs where `|first.start - second.end| <= window`.
///
/// Events without a location, a first Start or a second End never pair.
/// Output follows first-event order, then second-event order.
pub fn close_pairs(ds: &Dataset, first: &str, second: &str, window: Duration) -> Vec<ClosePair> {
    let seconds: Vec<_> = ds.of_type(second).collect();
    let mut out = Vec::new();

    for a in ds.of_type(first) {
        let (Some(loc), Some(start)) = (a.start_location.as_deref(), a.start) else {
            continue;
        };

        for b in &seconds {
            let (Some(other_loc), Some(end)) = (b.start_location.as_deref(), b.end) else {
                continue;
            };
            if loc != other_loc {
                continue;
            }

            let gap = start - end;
            if gap.abs() <= window {
                out.push(ClosePair {
                    location: loc.to_string(),
                    first_start: start,
                    second_end: end,
                    gap_minutes: gap.num_minutes(),
                });
            }
        }
    }

    out
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

    #[test]
    fn pairs_within_window_at_same_location() {
        let ds = dataset(
            "Diaper,2024-01-01 02:50,2024-01-01 02:55,,,Nursery,,\n\
             Feed,2024-01-01 03:00,2024-01-01 03:20,20:00,,Nursery,,\n\
             Feed,2024-01-01 03:20,2024-01-01 03:40,20:00,,Nursery,,\n\
             Feed,2024-01-01 03:05,2024-01-01 03:25,20:00,,Couch,,\n",
        );
        let pairs = close_pairs(&ds, "Feed", "Diaper", Duration::minutes(15));

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].location, "Nursery");
        assert_eq!(pairs[0].gap_minutes, 5);
    }

    #[test]
    fn window_is_inclusive_and_symmetric() {
        let ds = dataset(
            "Feed,2024-01-01 03:00,,,,Nursery,,\n\
             Diaper,2024-01-01 03:00,2024-01-01 03:15,,,Nursery,,\n\
             Diaper,2024-01-01 02:30,2024-01-01 02:45,,,Nursery,,\n\
             Diaper,2024-01-01 02:30,2024-01-01 02:44,,,Nursery,,\n",
        );
        let pairs = close_pairs(&ds, "Feed", "Diaper", Duration::minutes(15));
        let gaps: Vec<i64> = pairs.iter().map(|p| p.gap_minutes).collect();
        assert_eq!(gaps, vec![-15, 15]);
    }

    #[test]
    fn missing_location_or_timestamps_never_pair() {
        let ds = dataset(
            "Feed,2024-01-01 03:00,,,,,,\n\
             Feed,bad,,,,Nursery,,\n\
             Diaper,2024-01-01 02:50,,,,Nursery,,\n\
             Diaper,2024-01-01 02:50,2024-01-01 02:55,,,,,\n",
        );
        assert!(close_pairs(&ds, "Feed", "Diaper", Duration::minutes(15)).is_empty());
    }
}
