use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            logged_at_utc TEXT NOT NULL,
            operation     TEXT NOT NULL,
            target        TEXT DEFAULT '',
            message       TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table has a given column.
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Databases created before the authorization flag existed carry absences
/// without it; unauthorized is the safe default for old rows.
fn migrate_add_authorized_to_absences(conn: &Connection) -> Result<()> {
    if table_has_column(conn, "absences", "authorized")? {
        return Ok(());
    }

    warning("Adding 'authorized' column to absences table...");

    conn.execute_batch(
        "ALTER TABLE absences ADD COLUMN authorized INTEGER NOT NULL DEFAULT 0;",
    )?;

    success("'authorized' column added.");

    let _ = crate::db::log::record_op(
        conn,
        "migration_applied",
        "absences",
        "Added 'authorized' column with default 0",
    );

    Ok(())
}

/// Run all schema migrations that the connected database still needs.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    migrate_add_authorized_to_absences(conn)?;
    Ok(())
}
