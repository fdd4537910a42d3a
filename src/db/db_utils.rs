use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::category::Category;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL EVENTS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    println!(
        "{}• Total events:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) TIMESTAMP RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM events ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM events ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}• Range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) EVENTS PER CATEGORY
    //
    println!("{}• Per category:{}", CYAN, RESET);
    for cat in Category::ALL {
        let n: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM events WHERE category = ?1",
            [cat.to_db_str()],
            |row| row.get(0),
        )?;
        if n > 0 {
            println!("    {:<14} {}", cat.to_db_str(), n);
        }
    }

    println!();
    Ok(())
}
