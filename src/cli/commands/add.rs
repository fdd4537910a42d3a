use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::plog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_event_timestamp;

/// Record one activity event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        category,
        at,
        actor,
    } = cmd
    {
        //
        // 1. Resolve the category at the edge; the store only ever sees
        //    the closed enumeration, never raw CLI text
        //
        let cat = Category::from_code(category).ok_or_else(|| {
            AppError::InvalidCategory(format!(
                "'{}'. Valid categories: walk-start, walk-end, pee, poo, pee-home, poo-home, feed",
                category
            ))
        })?;

        //
        // 2. Resolve the timestamp (default: now, second precision)
        //
        let timestamp = match at {
            Some(s) => parse_event_timestamp(s, date::today())?,
            None => date::now(),
        };

        //
        // 3. Resolve the actor (default from config)
        //
        let actor = actor
            .clone()
            .unwrap_or_else(|| cfg.default_actor.clone());

        //
        // 4. Append to the store
        //
        let pool = DbPool::new(&cfg.database)?;
        let id = insert_event(&pool.conn, timestamp, cat, &actor)?;

        if let Err(e) = plog(
            &pool.conn,
            "add",
            cat.to_db_str(),
            &format!("Event {} recorded at {}", id, timestamp),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "{} recorded at {} (by {})",
            cat.label(),
            timestamp.format("%H:%M"),
            actor
        ));
    }

    Ok(())
}
