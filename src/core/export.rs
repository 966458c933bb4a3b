//! Time card export to CSV or JSON.

use crate::db::log::record_op;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::profile::Profile;
use crate::models::time_card::TimeCard;
use crate::ui::prompt::confirm;
use crate::utils::date::{day_start_utc, parse_range};
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Flat row shape shared by both formats.
#[derive(Serialize, Clone, Debug)]
struct CardRow {
    uuid: String,
    date: String,
    time: String,
    timestamp_utc: String,
    method: String,
}

impl CardRow {
    fn from_card(card: &TimeCard) -> Self {
        Self {
            uuid: card.uuid.clone(),
            date: card.local_date_str(),
            time: card.local_time_str(),
            timestamp_utc: card.timestamp_utc.to_rfc3339(),
            method: card.method.to_db_str().to_string(),
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Writes the profile's cards to `file`.
    ///
    /// `range` accepts `all`, a period (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`)
    /// or a `start:end` interval of equal granularity; `None` exports
    /// everything.
    pub fn export(
        pool: &mut DbPool,
        profile: &Profile,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let cards = match range {
            None => queries::load_all_cards(pool, &profile.uuid)?,
            Some(r) if r.eq_ignore_ascii_case("all") => {
                queries::load_all_cards(pool, &profile.uuid)?
            }
            Some(r) => {
                let (start, end) = parse_range(r)?;
                let end_excl = day_start_utc(end.succ_opt().unwrap_or(end));
                queries::load_cards_between(pool, &profile.uuid, day_start_utc(start), end_excl)?
            }
        };

        if cards.is_empty() {
            println!("⚠️  No time cards in the selected range. Nothing to export.");
            return Ok(());
        }

        let rows: Vec<CardRow> = cards.iter().map(CardRow::from_card).collect();
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        record_op(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} cards", rows.len()),
        )?;

        Ok(())
    }
}

/// Refuses to clobber an existing file unless forced or confirmed.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let question = format!("File '{}' already exists. Overwrite?", path.display());
    if confirm(&question)? {
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        ))
    }
}

fn export_json(rows: &[CardRow], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    println!("✅ Exported data to {}", path.display());
    Ok(())
}

fn export_csv(rows: &[CardRow], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }
    wtr.flush()?;

    println!("✅ Exported data to {}", path.display());
    Ok(())
}
