//! Whole-log reset. The only deletion the store supports: everything or
//! nothing, in a single transaction.

use crate::db::log::plog;
use crate::db::pool::DbPool;
use crate::db::queries::clear_events;
use crate::errors::AppResult;

pub struct ResetLogic;

impl ResetLogic {
    /// Delete every stored event. Returns the number of deleted rows;
    /// failures (locked or missing storage) propagate to the caller.
    pub fn apply(pool: &mut DbPool) -> AppResult<usize> {
        let deleted = clear_events(&mut pool.conn)?;

        if let Err(e) = plog(
            &pool.conn,
            "reset",
            "events",
            &format!("Deleted {} events", deleted),
        ) {
            eprintln!("Failed to write internal log: {}", e);
        }

        Ok(deleted)
    }
}
