use crate::config::Config;
use crate::db::log::plog;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing pawlogger…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    if let Err(e) = plog(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 pawlogger initialization completed!");
    Ok(())
}
