//! Single error type for the whole binary. Everything that can fail
//! returns `AppResult` so the CLI layer reports failures in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    #[error("SQLite error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    // Input parsing
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid insertion method: {0}")]
    InvalidMethod(String),

    #[error("Unknown severity filter: {0}")]
    UnknownSeverityFilter(String),

    // Accounting rules
    #[error("Clock is on cooldown: last card is {0}s old, minimum is {1}s")]
    CooldownActive(i64, i64),

    #[error("Odd card list: {0} cards cannot be paired")]
    InconsistentCardCount(usize),

    #[error("No profile found, run `timecard profile` first")]
    ProfileMissing,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("{0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
