use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Color for each recorded operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "reset" => Colour::Red,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("migrate_to_") => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + if target.is_empty() { 0 } else { target.len() + 3 })
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{} ({})", operation, target)
            };
            let padding = " ".repeat(op_w.saturating_sub(op_target.len()));

            // only the operation word is colored; the target stays plain
            let colored = match op_target.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(op_target.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
