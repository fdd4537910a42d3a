//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveTime;

/// Placeholder shown for categories with no events.
pub const EMPTY_MARK: &str = "—";

/// Ordered, comma-joined `HH:MM` list, or the placeholder dash if empty.
pub fn format_time_list(times: &[NaiveTime]) -> String {
    if times.is_empty() {
        return EMPTY_MARK.to_string();
    }
    times
        .iter()
        .map(|t| t.format("%H:%M").to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
