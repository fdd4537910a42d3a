//! Same-day activity summary built from one day's events.

use crate::core::pairing::pair_walks;
use crate::models::category::Category;
use crate::models::day_summary::DaySummary;
use crate::models::event::Event;
use chrono::{NaiveDate, NaiveTime};

pub struct SummaryLogic;

impl SummaryLogic {
    /// Build the summary for `date` from that day's events.
    ///
    /// Returns `None` when the day has no events at all: callers must be
    /// able to distinguish "no events today" from "events exist but one
    /// category is empty".
    pub fn build(date: NaiveDate, events: &[Event]) -> Option<DaySummary> {
        if events.is_empty() {
            return None;
        }

        let mut sorted = events.to_vec();
        sorted.sort_by_key(|e| (e.timestamp, e.id));

        let walks = pair_walks(&sorted);
        let walk_minutes = walks.iter().map(|w| w.duration_minutes()).sum();

        Some(DaySummary {
            date,
            walk_minutes,
            pee_times: times_of(&sorted, Category::Pee),
            poo_times: times_of(&sorted, Category::Poo),
            feed_times: times_of(&sorted, Category::Feed),
            home_incidents: sorted
                .iter()
                .filter(|e| e.category.is_home_incident())
                .count(),
            walks,
        })
    }
}

fn times_of(events: &[Event], category: Category) -> Vec<NaiveTime> {
    events
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.time())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        day().and_hms_opt(h, m, s).unwrap()
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
    fn no_events_means_no_summary() {
        assert!(SummaryLogic::build(day(), &[]).is_none());
    }

    #[test]
    fn walk_minutes_are_summed_over_pairs() {
        let events = vec![
            ev(1, at(7, 0, 0), Category::WalkStart),
            ev(2, at(7, 45, 0), Category::WalkEnd),
            ev(3, at(19, 0, 0), Category::WalkStart),
            ev(4, at(19, 40, 0), Category::WalkEnd),
        ];

        let s = SummaryLogic::build(day(), &events).unwrap();
        assert_eq!(s.walk_count(), 2);
        assert_eq!(s.walk_minutes, 85);
    }

    #[test]
    fn partial_minutes_are_floored() {
        let events = vec![
            ev(1, at(7, 0, 0), Category::WalkStart),
            ev(2, at(7, 10, 59), Category::WalkEnd),
        ];

        let s = SummaryLogic::build(day(), &events).unwrap();
        assert_eq!(s.walk_minutes, 10);
    }

    #[test]
    fn category_time_lists_keep_chronological_order() {
        // inserted out of order on purpose
        let events = vec![
            ev(1, at(12, 30, 0), Category::Feed),
            ev(2, at(7, 10, 0), Category::Pee),
            ev(3, at(7, 0, 0), Category::Pee),
        ];

        let s = SummaryLogic::build(day(), &events).unwrap();
        assert_eq!(
            s.pee_times,
            vec![
                NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(7, 10, 0).unwrap(),
            ]
        );
        assert_eq!(s.feed_times.len(), 1);
        assert!(s.poo_times.is_empty());
    }

    #[test]
    fn home_incidents_count_both_kinds() {
        let events = vec![
            ev(1, at(8, 0, 0), Category::PeeHome),
            ev(2, at(9, 0, 0), Category::PooHome),
            ev(3, at(10, 0, 0), Category::Pee),
        ];

        let s = SummaryLogic::build(day(), &events).unwrap();
        assert_eq!(s.home_incidents, 2);
    }

    #[test]
    fn unfinished_walk_contributes_nothing() {
        let events = vec![ev(1, at(7, 0, 0), Category::WalkStart)];

        let s = SummaryLogic::build(day(), &events).unwrap();
        assert_eq!(s.walk_count(), 0);
        assert_eq!(s.walk_minutes, 0);
    }
}
