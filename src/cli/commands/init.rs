use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// Creates the config directory and file when missing, then the SQLite
/// database with every pending migration applied.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing timecard…");
    println!("📄 Config file: {}", Config::config_file().display());
    println!("🗄️  Database:    {}", &cfg.database);

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &cfg.database);

    // Internal log failure must not block initialization.
    if let Err(e) = log::record_op(
        &conn,
        "init",
        "database",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        eprintln!("⚠️  Failed to write internal log: {}", e);
    }

    println!("🎉 timecard initialization completed!");
    Ok(())
}
