//! Schema migration engine.
//!
//! All schema creation and upgrades go through here; nothing else in the
//! crate issues CREATE TABLE statements. Running the pending migrations is
//! idempotent and cheap, so it is safe to invoke lazily on every startup.

use crate::db::log::plog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success};
use rusqlite::{Connection, OptionalExtension};

/// Version the schema is expected to be at after all migrations ran.
const LATEST_SCHEMA_VERSION: i64 = 2;

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn ensure_schema_version_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER NOT NULL,
            applied_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn current_schema_version(conn: &Connection) -> AppResult<i64> {
    let v: Option<i64> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .optional()?
        .flatten();
    Ok(v.unwrap_or(0))
}

fn record_schema_version(conn: &Connection, version: i64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO schema_version (version, applied_at) VALUES (?1, ?2)",
        rusqlite::params![version, chrono::Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// v1: the events table. One row per recorded occurrence; rows are never
/// updated, the only mutation the schema allows for is whole-log deletion.
fn migrate_to_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            category  TEXT NOT NULL CHECK(category IN
                ('walk_start','walk_end','pee','poo','pee_home','poo_home','feed')),
            actor     TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// v2: indexes for range scans and per-category filtering.
fn migrate_to_v2(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_events_timestamp ON events(timestamp);
        CREATE INDEX IF NOT EXISTS idx_events_category  ON events(category, timestamp);
        "#,
    )?;
    Ok(())
}

/// Run every migration newer than the recorded schema version.
/// Each migration runs inside its own transaction.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    ensure_schema_version_table(conn)?;

    let mut version = current_schema_version(conn)?;

    while version < LATEST_SCHEMA_VERSION {
        let next = version + 1;

        conn.execute_batch("BEGIN;")?;

        let applied = match next {
            1 => migrate_to_v1(conn),
            2 => migrate_to_v2(conn),
            other => Err(AppError::Migration(format!(
                "No migration registered for schema version {}",
                other
            ))),
        };

        match applied.and_then(|()| record_schema_version(conn, next)) {
            Ok(()) => conn.execute_batch("COMMIT;")?,
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK;");
                return Err(e);
            }
        }

        success(format!("Schema migrated to version {}", next));

        if let Err(e) = plog(
            conn,
            &format!("migrate_to_v{}", next),
            "schema",
            &format!("Schema migrated to version {}", next),
        ) {
            error(format!("Failed to write internal log: {}", e));
        }

        version = next;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();
        assert_eq!(
            current_schema_version(&conn).unwrap(),
            LATEST_SCHEMA_VERSION
        );
    }

    #[test]
    fn events_table_rejects_unknown_categories() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        let res = conn.execute(
            "INSERT INTO events (timestamp, category, actor) VALUES ('2025-06-01 08:00:00', 'nap', 'x')",
            [],
        );
        assert!(res.is_err());
    }
}
