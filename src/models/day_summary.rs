use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// One matched walk interval. `end` is always strictly after `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WalkInterval {
    pub fn duration_minutes(&self) -> i64 {
        ((self.end - self.start).num_seconds() / 60).max(0)
    }
}

/// Same-day activity report, computed on demand and never stored.
/// A day with zero events produces no summary at all ("no data"),
/// which callers must distinguish from a summary with empty categories.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub walks: Vec<WalkInterval>,
    pub walk_minutes: i64,
    pub pee_times: Vec<NaiveTime>,
    pub poo_times: Vec<NaiveTime>,
    pub feed_times: Vec<NaiveTime>,
    pub home_incidents: usize,
}

impl DaySummary {
    pub fn walk_count(&self) -> usize {
        self.walks.len()
    }
}
