//! The append-only event store.
//!
//! Events are stored in insertion order but every analytic read re-sorts by
//! timestamp (ORDER BY timestamp, id): the two orders are not guaranteed to
//! coincide if the host clock was adjusted between inserts.

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::event::{Event, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Event> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = NaiveDateTime::parse_from_str(&ts_str, TIMESTAMP_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    let cat_str: String = row.get("category")?;
    let category = Category::from_db_str(&cat_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidCategory(cat_str.clone())),
        )
    })?;

    Ok(Event {
        id: row.get("id")?,
        timestamp,
        category,
        actor: row.get("actor")?,
    })
}

/// Append one event. The store is lazily initialized on first use, so a
/// fresh database file becomes usable without an explicit `init`.
pub fn insert_event(
    conn: &Connection,
    timestamp: NaiveDateTime,
    category: Category,
    actor: &str,
) -> AppResult<i64> {
    init_db(conn)?;

    conn.execute(
        "INSERT INTO events (timestamp, category, actor)
         VALUES (?1, ?2, ?3)",
        params![
            timestamp.format(TIMESTAMP_FORMAT).to_string(),
            category.to_db_str(),
            actor,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Events with `from ≤ timestamp < to`, ascending by timestamp.
/// Returns an empty Vec (not an error) when none match.
pub fn load_events_between(
    conn: &Connection,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> AppResult<Vec<Event>> {
    init_db(conn)?;

    let mut stmt = conn.prepare(
        "SELECT id, timestamp, category, actor FROM events
         WHERE timestamp >= ?1 AND timestamp < ?2
         ORDER BY timestamp ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            from.format(TIMESTAMP_FORMAT).to_string(),
            to.format(TIMESTAMP_FORMAT).to_string(),
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Full ordered dump, used for export and listing.
pub fn load_all_events(conn: &Connection) -> AppResult<Vec<Event>> {
    init_db(conn)?;

    let mut stmt = conn.prepare(
        "SELECT id, timestamp, category, actor FROM events
         ORDER BY timestamp ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_events(conn: &Connection) -> AppResult<i64> {
    init_db(conn)?;

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    Ok(count)
}

/// Atomically delete every event. All-or-nothing: the DELETE runs in a
/// single transaction, so a crash mid-clear cannot leave a partial log.
pub fn clear_events(conn: &mut Connection) -> AppResult<usize> {
    init_db(conn)?;

    let tx = conn.transaction()?;
    let deleted = tx.execute("DELETE FROM events", [])?;
    tx.execute(
        "UPDATE sqlite_sequence SET seq = 0 WHERE name = 'events'",
        [],
    )?;
    tx.commit()?;

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, d)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn open() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn append_then_range_query_round_trips() {
        let conn = open();
        insert_event(&conn, ts(1, 8, 30, 15), Category::Pee, "Anna").unwrap();

        let got = load_events_between(&conn, ts(1, 0, 0, 0), ts(2, 0, 0, 0)).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].timestamp_str(), "2025-06-01 08:30:15");
        assert_eq!(got[0].category, Category::Pee);
        assert_eq!(got[0].actor, "Anna");
    }

    #[test]
    fn range_query_is_half_open() {
        let conn = open();
        insert_event(&conn, ts(1, 0, 0, 0), Category::Feed, "a").unwrap();
        insert_event(&conn, ts(2, 0, 0, 0), Category::Feed, "a").unwrap();

        let got = load_events_between(&conn, ts(1, 0, 0, 0), ts(2, 0, 0, 0)).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].timestamp, ts(1, 0, 0, 0));
    }

    #[test]
    fn reads_are_sorted_by_timestamp_not_insertion_order() {
        let conn = open();
        insert_event(&conn, ts(1, 9, 0, 0), Category::Poo, "a").unwrap();
        insert_event(&conn, ts(1, 7, 0, 0), Category::Pee, "a").unwrap();

        let got = load_all_events(&conn).unwrap();
        assert_eq!(got[0].category, Category::Pee);
        assert_eq!(got[1].category, Category::Poo);
    }

    #[test]
    fn empty_range_returns_empty_not_error() {
        let conn = open();
        let got = load_events_between(&conn, ts(1, 0, 0, 0), ts(2, 0, 0, 0)).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let mut conn = open();
        insert_event(&conn, ts(1, 8, 0, 0), Category::Pee, "a").unwrap();
        insert_event(&conn, ts(2, 8, 0, 0), Category::Poo, "b").unwrap();

        let deleted = clear_events(&mut conn).unwrap();
        assert_eq!(deleted, 2);
        assert!(load_all_events(&conn).unwrap().is_empty());
        assert_eq!(count_events(&conn).unwrap(), 0);
    }
}
