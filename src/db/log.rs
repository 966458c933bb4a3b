//! Append-only operation journal, one row per state-changing command.

use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{Connection, params};

/// Record one operation in the `log` table. The journal timestamp is UTC,
/// like every other instant the database holds.
pub fn record_op(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (logged_at_utc, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Utc::now().to_rfc3339(), operation, target, message])?;

    Ok(())
}
