//! timecard library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! engine modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Routes one parsed command to its handler.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Profile { .. } => cli::commands::profile::handle(&cli.command, cfg),
        Commands::Clock { .. } => cli::commands::clock::handle(cli, cfg),
        Commands::Add { .. } => cli::commands::add::handle(cli, cfg),
        Commands::Rm { .. } => cli::commands::rm::handle(cli, cfg),
        Commands::Cards { .. } => cli::commands::cards::handle(&cli.command, cfg),
        Commands::Today => cli::commands::today::handle(&cli.command, cfg),
        Commands::Balance { .. } => cli::commands::balance::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Holiday { .. } => cli::commands::holiday::handle(&cli.command, cfg),
        Commands::Absence { .. } => cli::commands::absence::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // The --db flag wins over whatever the config file says.
    if let Some(custom_db) = &cli.db {
        cfg.database.clone_from(custom_db);
    }
    cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();

    dispatch(&cli, &cfg)
}
