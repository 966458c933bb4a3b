use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::TodayLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Today) {
        let mut pool = DbPool::new(&cfg.database)?;
        let profile = queries::require_profile(&mut pool)?;
        TodayLogic::run(&mut pool, &profile)?;
    }

    Ok(())
}
