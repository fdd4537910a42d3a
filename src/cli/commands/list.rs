use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::{NaiveDate, NaiveTime};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let (from_day, to_day) = resolve_period(period, *now)?;

        let from = from_day.and_time(NaiveTime::MIN);
        let to = to_day
            .succ_opt()
            .map(|d| d.and_time(NaiveTime::MIN))
            .unwrap_or(from);

        let pool = DbPool::new(&cfg.database)?;
        let events = load_events_between(&pool.conn, from, to)?;

        if events.is_empty() {
            info("No events in the selected period.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("TIMESTAMP", 19),
            Column::new("CATEGORY", 12),
            Column::new("ACTOR", 10),
        ]);

        for ev in &events {
            table.add_row(vec![
                ev.id.to_string(),
                ev.timestamp_str(),
                ev.category.to_db_str().to_string(),
                ev.actor.clone(),
            ]);
        }

        print!("{}", table.render());
        println!("{} events", events.len());
    }

    Ok(())
}

fn resolve_period(period: &Option<String>, today_only: bool) -> AppResult<(NaiveDate, NaiveDate)> {
    if today_only {
        let today = date::today();
        return Ok((today, today));
    }

    match period {
        Some(p) => date::period_range(p).map_err(AppError::InvalidDate),
        // default: current month up to today
        None => {
            let today = date::today();
            let (first, _) = date::period_range(&today.format("%Y-%m").to_string())
                .map_err(AppError::InvalidDate)?;
            Ok((first, today))
        }
    }
}
