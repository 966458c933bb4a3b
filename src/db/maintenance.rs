//! One-shot administrative operations on the SQLite file.

use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Runs `PRAGMA integrity_check` and returns SQLite's verdict line.
pub fn integrity_check(pool: &mut DbPool) -> AppResult<String> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(verdict)
}

/// Rebuilds the database file, reclaiming free pages.
pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM;")?;
    Ok(())
}
