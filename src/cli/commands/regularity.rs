use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::regularity::RegularityLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::errors::{AppError, AppResult};
use crate::models::regularity::RegularityReport;
use crate::ui::messages::{header, info};
use crate::utils::date;
use chrono::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Regularity { days } = cmd {
        let window_days = days.unwrap_or(cfg.regularity_window_days);
        if window_days == 0 {
            return Err(AppError::Config(
                "regularity window must be at least 1 day".to_string(),
            ));
        }

        // closed interval [now − window, now]: the store query is half-open,
        // so push the upper bound one second past now
        let now = date::now();
        let from = now - Duration::days(i64::from(window_days));
        let to = now + Duration::seconds(1);

        let pool = DbPool::new(&cfg.database)?;
        let events = load_events_between(&pool.conn, from, to)?;

        match RegularityLogic::analyze(window_days, &events) {
            None => info(format!("No events in the last {} days.", window_days)),
            Some(report) => print_report(&report),
        }
    }

    Ok(())
}

fn print_report(r: &RegularityReport) {
    header(format!("Regularity ({} days)", r.window_days));
    println!(
        "• Pee: mean {} ±{} min (n={})",
        r.pee.mean_hhmm(),
        r.pee.sigma_minutes,
        r.pee.samples
    );
    println!(
        "• Poo: mean {} ±{} min (n={})",
        r.poo.mean_hhmm(),
        r.poo.sigma_minutes,
        r.poo.samples
    );
    println!(
        "• Home incidents: pee {}, poo {}",
        r.pee_home_count, r.poo_home_count
    );
}
