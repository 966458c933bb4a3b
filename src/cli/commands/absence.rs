use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::record_op;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::absence::Absence;
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Absence {
        date,
        description,
        authorized,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let profile = queries::require_profile(&mut pool)?;

        if *list {
            let absences = queries::load_absences(&mut pool, &profile.uuid)?;
            if absences.is_empty() {
                println!("No absences recorded.");
                return Ok(());
            }

            let mut table = Table::new(&["DATE", "DESCRIPTION", "AUTHORIZED"]);
            for a in &absences {
                table.add_row(vec![
                    a.date.to_string(),
                    a.description.clone(),
                    if a.authorized { "yes" } else { "no" }.to_string(),
                ]);
            }
            print!("{}", table.render(cfg.separator()));
            return Ok(());
        }

        let (date, description) = match (date, description) {
            (Some(d), Some(desc)) => (parse_date(d)?, desc),
            _ => {
                return Err(AppError::Other(
                    "absence needs a date and --description (or --list)".to_string(),
                ));
            }
        };

        let absence = Absence::new(&profile.uuid, date, description, *authorized);
        queries::insert_absence(&pool.conn, &absence)?;
        record_op(
            &pool.conn,
            "absence",
            &absence.uuid,
            &format!("{} on {}", absence.description, absence.date),
        )?;

        success(format!(
            "Absence '{}' recorded on {}{}",
            absence.description,
            absence.date,
            if absence.authorized {
                " (authorized)"
            } else {
                ""
            }
        ));
    }

    Ok(())
}
