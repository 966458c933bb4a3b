use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::record_op;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::holiday::Holiday;
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Holiday {
        date,
        description,
        hours,
        recurring,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let profile = queries::require_profile(&mut pool)?;

        if *list {
            let holidays = queries::load_holidays(&mut pool, &profile.location)?;
            if holidays.is_empty() {
                println!("No holidays recorded for location '{}'.", profile.location);
                return Ok(());
            }

            let mut table = Table::new(&["DATE", "DESCRIPTION", "HOURS", "RECURRING"]);
            for h in &holidays {
                table.add_row(vec![
                    h.date.to_string(),
                    h.description.clone(),
                    h.working_hours.to_string(),
                    if h.recurring { "yes" } else { "no" }.to_string(),
                ]);
            }
            print!("{}", table.render(cfg.separator()));
            return Ok(());
        }

        let (date, description) = match (date, description) {
            (Some(d), Some(desc)) => (parse_date(d)?, desc),
            _ => {
                return Err(AppError::Other(
                    "holiday needs a date and --description (or --list)".to_string(),
                ));
            }
        };

        let holiday = Holiday::new(date, &profile.location, description, *hours, *recurring);
        queries::insert_holiday(&pool.conn, &holiday)?;
        record_op(
            &pool.conn,
            "holiday",
            &holiday.uuid,
            &format!("{} on {}", holiday.description, holiday.date),
        )?;

        success(format!(
            "Holiday '{}' recorded on {}{}",
            holiday.description,
            holiday.date,
            if holiday.recurring {
                " (recurring every year)"
            } else {
                ""
            }
        ));
    }

    Ok(())
}
