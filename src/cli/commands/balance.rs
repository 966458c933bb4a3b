use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::profile::Profile;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_delta};
use crate::utils::date::{parse_range, yesterday};
use crate::utils::formatting::{balance_phrase, mins2readable};
use crate::utils::table::Table;
use chrono::NaiveDate;

/// The running balance line printed after every mutation.
pub fn print_footer(pool: &mut DbPool, profile: &Profile) -> AppResult<()> {
    let (start, end) = (profile.start_date, yesterday());
    if start > end {
        return Ok(());
    }

    let report = Core::balance(pool, profile, start, end)?;
    let color = color_for_delta(report.total_delta_minutes);
    println!(
        "📊 Extra hours balance: {}{}{}",
        color,
        balance_phrase(report.total_delta_minutes),
        RESET
    );
    Ok(())
}

fn resolve_range(range: &Option<String>, profile: &Profile) -> AppResult<(NaiveDate, NaiveDate)> {
    match range {
        Some(r) => parse_range(r),
        None => Ok((profile.start_date, yesterday())),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance { range, detail } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let profile = queries::require_profile(&mut pool)?;

        let (start, end) = resolve_range(range, &profile)?;
        if start > end {
            info("Nothing to report yet: the range is empty.");
            return Ok(());
        }

        let report = Core::balance(&mut pool, &profile, start, end)?;

        let color = color_for_delta(report.total_delta_minutes);
        println!("📆 Range: {} to {}", start, end);
        println!(
            "📊 Extra hours balance: {}{}{}",
            color,
            balance_phrase(report.total_delta_minutes),
            RESET
        );

        if *detail {
            println!();
            let mut table = Table::new(&["DATE", "WORKED", "SCHEDULED", "DELTA"]);
            for day in &report.per_day {
                let date = if cfg.show_weekday {
                    format!("{} {}", day.date, day.date.format("%a"))
                } else {
                    day.date.to_string()
                };
                let delta_color = color_for_delta(day.delta_minutes);
                table.add_row(vec![
                    date,
                    mins2readable(day.worked_minutes, false, true),
                    mins2readable(day.scheduled_minutes, false, true),
                    format!(
                        "{}{}{}",
                        delta_color,
                        mins2readable(day.delta_minutes, true, true),
                        RESET
                    ),
                ]);
            }
            print!("{}", table.render(cfg.separator()));
        }
    }

    Ok(())
}
