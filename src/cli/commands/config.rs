use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let issues = cfg.check();
            if issues.is_empty() {
                success("Configuration looks good.");
            } else {
                for issue in issues {
                    warning(issue);
                }
            }
        }
    }

    Ok(())
}
