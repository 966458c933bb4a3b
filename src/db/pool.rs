//! SQLite connection wrapper shared by every command.

use rusqlite::{Connection, Result};
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database at `path`. A short busy timeout keeps a clock
    /// stamp and a report running side by side from failing on the lock.
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self { conn })
    }
}
