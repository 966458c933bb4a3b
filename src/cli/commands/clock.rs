use crate::cli::commands::balance::print_footer;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::core::report::TodayLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::today;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { no_report } = &cli.command {
        let mut pool = DbPool::new(&cfg.database)?;
        let profile = queries::require_profile(&mut pool)?;

        let card = ClockLogic::clock_now(&mut pool, &profile, cfg.cooldown_seconds)?;

        // Odd card counts mean an open shift, so this card opened one.
        let count = queries::load_cards_for_day(&mut pool, &profile.uuid, today())?.len();
        let direction = if count % 2 == 1 { "in" } else { "out" };
        success(format!(
            "Clocked {} at {} ({} today)",
            direction,
            card.local_time_str(),
            count
        ));

        if !*no_report {
            println!();
            TodayLogic::run(&mut pool, &profile)?;
        }

        if !cli.no_balance {
            println!();
            print_footer(&mut pool, &profile)?;
        }
    }

    Ok(())
}
