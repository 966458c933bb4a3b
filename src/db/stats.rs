use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::DateTime;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let cards: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_cards", [], |row| row.get(0))?;
    let holidays: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM holidays", [], |row| row.get(0))?;
    let absences: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM absences", [], |row| row.get(0))?;

    println!(
        "{}• Time cards:{} {}{}{}",
        CYAN, RESET, GREEN, cards, RESET
    );
    println!("{}• Holidays:{}   {}", CYAN, RESET, holidays);
    println!("{}• Absences:{}   {}", CYAN, RESET, absences);

    let first_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT event_timestamp_utc FROM time_cards ORDER BY event_timestamp_utc ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT event_timestamp_utc FROM time_cards ORDER BY event_timestamp_utc DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_ts.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_ts.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Card range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    if let (Some(f), Some(l)) = (first_ts, last_ts)
        && let (Ok(d1), Ok(d2)) = (
            DateTime::parse_from_rfc3339(&f),
            DateTime::parse_from_rfc3339(&l),
        )
    {
        let days = (d2 - d1).num_days().max(1);
        let avg = cards as f64 / days as f64;
        println!("{}• Average cards/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
