//! Regularity report models: how consistent is the timing of a recurring
//! event category over a trailing window of days.

/// Mean time-of-day and dispersion for one event category.
///
/// `mean_minutes` is the linear arithmetic mean of minutes-since-midnight,
/// with no wrap-around correction near midnight. `sigma_minutes` is the
/// population standard deviation truncated to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRegularity {
    pub mean_minutes: Option<i64>,
    pub sigma_minutes: i64,
    pub samples: usize,
}

impl CategoryRegularity {
    /// Sentinel value for a category with zero samples in the window.
    pub fn empty() -> Self {
        Self {
            mean_minutes: None,
            sigma_minutes: 0,
            samples: 0,
        }
    }

    /// Mean rendered as `HH:MM` (round-half-up already applied), or `—`.
    pub fn mean_hhmm(&self) -> String {
        match self.mean_minutes {
            Some(m) => format!("{:02}:{:02}", m / 60, m % 60),
            None => "—".to_string(),
        }
    }
}

/// Rolling-window regularity report over the trailing `window_days` days.
#[derive(Debug, Clone)]
pub struct RegularityReport {
    pub window_days: u32,
    pub pee: CategoryRegularity,
    pub poo: CategoryRegularity,
    pub pee_home_count: usize,
    pub poo_home_count: usize,
}
