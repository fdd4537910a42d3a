use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::format_time_list;
use chrono::NaiveTime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: date_arg } = cmd {
        let day = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        // Today's summary covers [start-of-day, now]; a past day covers
        // the whole day. The store query is half-open, so the upper bound
        // sits one second past now.
        let from = day.and_time(NaiveTime::MIN);
        let to = if day == date::today() {
            date::now() + chrono::Duration::seconds(1)
        } else {
            day.succ_opt()
                .map(|d| d.and_time(NaiveTime::MIN))
                .unwrap_or(from)
        };

        let pool = DbPool::new(&cfg.database)?;
        let events = load_events_between(&pool.conn, from, to)?;

        match SummaryLogic::build(day, &events) {
            None => info(format!("No events recorded on {} 🐶", day)),
            Some(summary) => print_summary(&summary),
        }
    }

    Ok(())
}

fn print_summary(s: &DaySummary) {
    header(format!("Day report {}", s.date.format("%d.%m.%Y")));
    println!("• Walks:          {} min ({})", s.walk_minutes, s.walk_count());
    println!(
        "• Pee:            {}",
        colorize_optional(&format_time_list(&s.pee_times))
    );
    println!(
        "• Poo:            {}",
        colorize_optional(&format_time_list(&s.poo_times))
    );
    println!(
        "• Feedings:       {}",
        colorize_optional(&format_time_list(&s.feed_times))
    );
    println!("• Home incidents: {}", s.home_incidents);
}
