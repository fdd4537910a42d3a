use clap::{Parser, Subcommand};

/// Command-line interface definition for pawlogger
/// CLI application to track a dog's activity with SQLite
#[derive(Parser)]
#[command(
    name = "pawlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple dog activity CLI: log walks, meals and toilet events, get daily summaries and regularity analytics",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record an activity event
    Add {
        /// Event category (walk-start, walk-end, pee, poo, pee-home, poo-home, feed)
        category: String,

        /// Event time: HH:MM[:SS] or "YYYY-MM-DD HH:MM[:SS]" (default: now)
        #[arg(long = "at", value_name = "TIME")]
        at: Option<String>,

        /// Name of the person reporting the event
        #[arg(long, value_name = "NAME")]
        actor: Option<String>,
    },

    /// Show the activity summary for one day
    Day {
        /// Day to summarize (YYYY-MM-DD, default: today)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },

    /// Analyze timing regularity over the trailing window
    Regularity {
        /// Window length in days (default: from configuration)
        #[arg(long, value_name = "N")]
        days: Option<u32>,
    },

    /// List recorded events
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's events")]
        now: bool,
    },

    /// Export the full event log as CSV
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Delete the whole event log
    Reset {
        #[arg(long, help = "Skip the interactive confirmation")]
        yes: bool,
    },
}
