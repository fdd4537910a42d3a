//! CSV export of the full event log.
//!
//! Events are streamed straight from the store into the caller-supplied
//! sink; no temporary file round trip.

use crate::db::log::plog;
use crate::db::queries::load_all_events;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs::File;
use std::io::Write;

/// Explicit outcome so the caller can avoid presenting a zero-byte artifact.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(usize),
    Empty,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Serialize the full event log as CSV into `sink`.
    /// The sink is left untouched when the store has zero events.
    pub fn export_events<W: Write>(conn: &Connection, sink: W) -> AppResult<ExportOutcome> {
        let events = load_all_events(conn)?;
        if events.is_empty() {
            return Ok(ExportOutcome::Empty);
        }
        write_csv(sink, &events)
    }

    /// Export to a file path (with `~` expansion). The file is only created
    /// once we know there is something to write; an existing file is never
    /// overwritten unless `force` is set.
    pub fn export_to_file(conn: &Connection, path: &str, force: bool) -> AppResult<ExportOutcome> {
        let target = expand_tilde(path);

        if target.exists() && !force {
            return Err(AppError::Export(format!(
                "File {} already exists (use --force to overwrite)",
                target.display()
            )));
        }

        let events = load_all_events(conn)?;
        if events.is_empty() {
            return Ok(ExportOutcome::Empty);
        }

        let file = File::create(&target)?;
        let outcome = write_csv(file, &events)?;

        if let Err(e) = plog(
            conn,
            "export",
            &target.display().to_string(),
            &format!("Exported {} events", events.len()),
        ) {
            eprintln!("Failed to write internal log: {}", e);
        }

        Ok(outcome)
    }
}

fn write_csv<W: Write>(sink: W, events: &[Event]) -> AppResult<ExportOutcome> {
    let mut wtr = csv::Writer::from_writer(sink);

    wtr.write_record(["timestamp", "category", "actor"])?;

    for ev in events {
        wtr.write_record([
            ev.timestamp_str().as_str(),
            ev.category.to_db_str(),
            ev.actor.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(ExportOutcome::Written(events.len()))
}
