use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Backup { file, compress } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;
    BackupLogic::backup(&mut pool, &cfg.database, file, *compress)
}
