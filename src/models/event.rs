use super::category::Category;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Storage format of the `events.timestamp` column.
/// Lexicographic order matches chronological order, and the value
/// round-trips exactly through export/import cycles.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,                  // ⇔ events.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub timestamp: NaiveDateTime, // ⇔ events.timestamp (TEXT "YYYY-MM-DD HH:MM:SS")
    pub category: Category,       // ⇔ events.category (TEXT, closed enumeration)
    pub actor: String,            // ⇔ events.actor (TEXT, display name only)
}

impl Event {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
