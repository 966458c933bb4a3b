use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::RESET;
use crate::utils::date::{parse_date, today};
use crate::utils::formatting::describe_method;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cards { date } = cmd {
        let day = match date {
            Some(d) => parse_date(d)?,
            None => today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let profile = queries::require_profile(&mut pool)?;
        let cards = queries::load_cards_for_day(&mut pool, &profile.uuid, day)?;

        let title = if cfg.show_weekday {
            format!("Cards for {} {}", day, day.format("%a"))
        } else {
            format!("Cards for {}", day)
        };
        header(title);

        if cards.is_empty() {
            println!("Empty");
            return Ok(());
        }

        let mut table = Table::new(&["TIME", "METHOD", "UUID"]);
        for card in &cards {
            let (label, color) = describe_method(card.method.to_db_str());
            table.add_row(vec![
                card.local_time_str(),
                format!("{}{}{}", color, label, RESET),
                card.uuid.clone(),
            ]);
        }
        print!("{}", table.render(cfg.separator()));

        if cards.len() % 2 != 0 {
            println!();
            println!("⏳ Open shift: the last card has no closing card yet.");
        }
    }

    Ok(())
}
