//! Pretty-printer for the internal audit log.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock" | "add" => Colour::Green,
        "del" => Colour::Red,
        "holiday" | "absence" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" | "profile" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, logged_at_utc, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let logged_at: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let when = chrono::DateTime::parse_from_rfc3339(&logged_at)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(logged_at);

            Ok((id, when, operation, target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let label = |op: &str, target: &str| {
            if target.is_empty() {
                op.to_string()
            } else {
                format!("{op} ({target})")
            }
        };

        // Widths come from the untinted text; capped so one long target
        // cannot blow up the whole column.
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| label(op, target).len())
            .max()
            .unwrap_or(10)
            .min(60);
        let id_w = entries
            .last()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let mut text = label(&operation, &target);
            if text.len() > op_w {
                text.truncate(op_w.saturating_sub(3));
                text.push_str("...");
            }
            let padding = " ".repeat(op_w.saturating_sub(text.len()));

            // Only the operation word gets the tint.
            let colored = match text.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(text.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
