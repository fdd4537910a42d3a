use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::io::{self, BufRead, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !yes && !confirm()? {
            info("Reset cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let deleted = ResetLogic::apply(&mut pool)?;

        success(format!("Event log cleared ({} events deleted).", deleted));
    }
    Ok(())
}

fn confirm() -> AppResult<bool> {
    print!("This will delete ALL recorded events. Type 'yes' to confirm: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("yes"))
}
