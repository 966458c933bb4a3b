use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::day_status::SeverityFilter;
use crate::ui::messages::info;
use crate::utils::date::{parse_range, yesterday};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { range, severity } = cmd {
        let filter = SeverityFilter::parse(severity)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let profile = queries::require_profile(&mut pool)?;

        let (start, end) = match range {
            Some(r) => parse_range(r)?,
            None => (profile.start_date, yesterday()),
        };
        if start > end {
            info("Nothing to report yet: the range is empty.");
            return Ok(());
        }

        let statuses = Core::status_report(&mut pool, &profile, start, end, filter)?;
        if statuses.is_empty() {
            info(format!("No days at or above '{}' in {} to {}", severity, start, end));
            return Ok(());
        }

        let mut table = Table::new(&["DATE", "STATUS", "REASON", "INFO"]);
        for day in &statuses {
            let date = if cfg.show_weekday {
                format!("{} {}", day.date, day.date.format("%a"))
            } else {
                day.date.to_string()
            };
            table.add_row(vec![
                date,
                day.severity.paint(),
                day.reason.clone().unwrap_or_else(|| "-".to_string()),
                day.info.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        print!("{}", table.render(cfg.separator()));
    }

    Ok(())
}
