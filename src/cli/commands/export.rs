use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::{ExportLogic, ExportOutcome};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match ExportLogic::export_to_file(&pool.conn, file, *force)? {
            ExportOutcome::Empty => warning("No data to export."),
            ExportOutcome::Written(n) => {
                success(format!("Exported {} events to {}", n, file));
            }
        }
    }
    Ok(())
}
