use crate::cli::commands::balance::print_footer;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Rm { uuid } = &cli.command {
        let mut pool = DbPool::new(&cfg.database)?;
        let profile = queries::require_profile(&mut pool)?;

        if ClockLogic::delete(&mut pool, &profile, uuid)? {
            success(format!("Card {} deleted", uuid));
        } else {
            warning(format!("No card with uuid {}", uuid));
            return Ok(());
        }

        if !cli.no_balance {
            print_footer(&mut pool, &profile)?;
        }
    }

    Ok(())
}
