//! Rolling-window regularity analysis: mean time-of-day and dispersion per
//! event category, over the trailing window handed in by the caller.
//!
//! The statistics are deliberately linear (no wrap-around correction near
//! midnight): two events at 23:50 and 00:10 average to noon, not midnight.
//! See DESIGN.md for why this stays as-is.

use crate::models::category::Category;
use crate::models::event::Event;
use crate::models::regularity::{CategoryRegularity, RegularityReport};
use crate::utils::time::clock_minutes;
use chrono::NaiveTime;

pub struct RegularityLogic;

impl RegularityLogic {
    /// Analyze the events of the trailing `window_days` window.
    ///
    /// Returns `None` when the window contains zero events of any kind
    /// ("insufficient data"). A window with events but none of a given
    /// category still produces a report, with sentinel stats for that
    /// category.
    pub fn analyze(window_days: u32, events: &[Event]) -> Option<RegularityReport> {
        if events.is_empty() {
            return None;
        }

        let times_of = |category: Category| -> Vec<NaiveTime> {
            events
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.time())
                .collect()
        };

        Some(RegularityReport {
            window_days,
            pee: mean_and_sigma(&times_of(Category::Pee)),
            poo: mean_and_sigma(&times_of(Category::Poo)),
            pee_home_count: count_of(events, Category::PeeHome),
            poo_home_count: count_of(events, Category::PooHome),
        })
    }
}

fn count_of(events: &[Event], category: Category) -> usize {
    events.iter().filter(|e| e.category == category).count()
}

/// Linear mean and population standard deviation of times-of-day, in
/// minutes since midnight. The mean is rounded half-up to the nearest
/// minute; σ is the float sqrt truncated to whole minutes.
pub fn mean_and_sigma(times: &[NaiveTime]) -> CategoryRegularity {
    if times.is_empty() {
        return CategoryRegularity::empty();
    }

    let minutes: Vec<i64> = times.iter().map(|t| clock_minutes(*t)).collect();
    let n = minutes.len() as f64;

    let avg = minutes.iter().sum::<i64>() as f64 / n;
    let variance = minutes
        .iter()
        .map(|&m| (m as f64 - avg).powi(2))
        .sum::<f64>()
        / n;

    CategoryRegularity {
        mean_minutes: Some((avg + 0.5) as i64),
        sigma_minutes: variance.sqrt() as i64,
        samples: minutes.len(),
    }
}
