//! Walk pairing: match each walk-start to the next chronologically valid
//! walk-end to derive walk intervals.

use crate::models::day_summary::WalkInterval;
use crate::models::event::Event;

/// Two-pointer greedy match over one day's chronologically ordered events.
///
/// Ends that predate (or coincide with) the current candidate start are
/// discarded as out-of-order artifacts (a double-tapped "end" or a missed
/// "start"). Trailing starts with no later end are dropped silently: an
/// in-progress or abandoned walk contributes nothing to the summary.
pub fn pair_walks(events: &[Event]) -> Vec<WalkInterval> {
    let starts: Vec<_> = events
        .iter()
        .filter(|e| e.category.is_walk_start())
        .map(|e| e.timestamp)
        .collect();
    let ends: Vec<_> = events
        .iter()
        .filter(|e| e.category.is_walk_end())
        .map(|e| e.timestamp)
        .collect();

    let mut pairs = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < starts.len() && j < ends.len() {
        if ends[j] > starts[i] {
            pairs.push(WalkInterval {
                start: starts[i],
                end: ends[j],
            });
            i += 1;
            j += 1;
        } else {
            // end earlier than start: skip the end
            j += 1;
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn ev(id: i64, ts: NaiveDateTime, category: Category) -> Event {
        Event {
            id,
            timestamp: ts,
            category,
            actor: "test".to_string(),
        }
    }

    #[test]
    fn stale_end_is_discarded() {
        // starts 09:00, 09:05 / ends 08:00, 09:10, 09:20:
        // the 08:00 end predates the first start and must be skipped
        let events = vec![
            ev(1, at(8, 0), Category::WalkEnd),
            ev(2, at(9, 0), Category::WalkStart),
            ev(3, at(9, 5), Category::WalkStart),
            ev(4, at(9, 10), Category::WalkEnd),
            ev(5, at(9, 20), Category::WalkEnd),
        ];

        let pairs = pair_walks(&events);
        assert_eq!(pairs.len(), 2);
        assert_eq!((pairs[0].start, pairs[0].end), (at(9, 0), at(9, 10)));
        assert_eq!((pairs[1].start, pairs[1].end), (at(9, 5), at(9, 20)));
    }

    #[test]
    fn trailing_start_without_end_is_dropped() {
        let events = vec![
            ev(1, at(7, 0), Category::WalkStart),
            ev(2, at(7, 30), Category::WalkEnd),
            ev(3, at(18, 0), Category::WalkStart),
        ];

        let pairs = pair_walks(&events);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].start, pairs[0].end), (at(7, 0), at(7, 30)));
    }

    #[test]
    fn end_coinciding_with_start_is_not_a_pair() {
        let events = vec![
            ev(1, at(9, 0), Category::WalkStart),
            ev(2, at(9, 0), Category::WalkEnd),
            ev(3, at(9, 15), Category::WalkEnd),
        ];

        let pairs = pair_walks(&events);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].start, pairs[0].end), (at(9, 0), at(9, 15)));
    }

    #[test]
    fn never_emits_end_before_start() {
        let events = vec![
            ev(1, at(6, 0), Category::WalkEnd),
            ev(2, at(6, 30), Category::WalkEnd),
            ev(3, at(7, 0), Category::WalkStart),
            ev(4, at(8, 0), Category::WalkEnd),
            ev(5, at(9, 0), Category::WalkStart),
        ];

        for p in pair_walks(&events) {
            assert!(p.end > p.start);
        }
    }

    #[test]
    fn pairing_is_idempotent_on_sorted_input() {
        let events = vec![
            ev(1, at(9, 0), Category::WalkStart),
            ev(2, at(9, 40), Category::WalkEnd),
            ev(3, at(17, 0), Category::WalkStart),
            ev(4, at(17, 25), Category::WalkEnd),
        ];

        assert_eq!(pair_walks(&events), pair_walks(&events));
    }

    #[test]
    fn other_categories_are_ignored() {
        let events = vec![
            ev(1, at(9, 0), Category::WalkStart),
            ev(2, at(9, 10), Category::Pee),
            ev(3, at(9, 20), Category::Feed),
            ev(4, at(9, 40), Category::WalkEnd),
        ];

        let pairs = pair_walks(&events);
        assert_eq!(pairs.len(), 1);
    }
}
