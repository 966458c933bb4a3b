use crate::cli::commands::balance::print_footer;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::{local_to_utc, parse_date};
use crate::utils::time::parse_clock;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, time } = &cli.command {
        let day = parse_date(date)?;
        let clock = parse_clock(time)?;
        let ts = local_to_utc(day, clock)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let profile = queries::require_profile(&mut pool)?;

        let card = ClockLogic::add_manual(&mut pool, &profile, ts)?;
        success(format!(
            "Added manual card on {} at {} ({})",
            card.local_date_str(),
            card.local_time_str(),
            card.uuid
        ));

        if !cli.no_balance {
            print_footer(&mut pool, &profile)?;
        }
    }

    Ok(())
}
