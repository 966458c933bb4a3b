use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Log { print } = cmd else {
        return Ok(());
    };

    if !*print {
        info("Nothing to do: pass --print to show the operation journal");
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;
    LogLogic::print_log(&mut pool)
}
