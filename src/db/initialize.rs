use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the base schema idempotently, then apply pending migrations so
/// older databases end up on the same shape.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            uuid                        TEXT PRIMARY KEY,
            first_name                  TEXT NOT NULL,
            last_name                   TEXT NOT NULL DEFAULT '',
            company                     TEXT NOT NULL DEFAULT '',
            location                    TEXT NOT NULL DEFAULT '',
            start_date                  TEXT NOT NULL,
            daily_office_hours          INTEGER NOT NULL DEFAULT 8,
            max_allowed_extra_hours     INTEGER NOT NULL DEFAULT 2,
            required_lunch_hours        INTEGER NOT NULL DEFAULT 1,
            min_hours_between_work_days INTEGER NOT NULL DEFAULT 11,
            auto_insert_lunch_minutes   INTEGER NOT NULL DEFAULT 0,
            created_at                  TEXT NOT NULL,
            updated_at                  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS time_cards (
            uuid                TEXT PRIMARY KEY,
            profile_uuid        TEXT NOT NULL,
            event_timestamp_utc TEXT NOT NULL,
            method              TEXT NOT NULL CHECK(method IN ('clock','manual')),
            created_at          TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_time_cards_profile_ts
            ON time_cards(profile_uuid, event_timestamp_utc);

        CREATE TABLE IF NOT EXISTS holidays (
            uuid          TEXT PRIMARY KEY,
            date          TEXT NOT NULL,
            location      TEXT NOT NULL DEFAULT '',
            description   TEXT NOT NULL DEFAULT '',
            working_hours INTEGER NOT NULL DEFAULT 0,
            recurring     INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS absences (
            uuid         TEXT PRIMARY KEY,
            profile_uuid TEXT NOT NULL,
            date         TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            authorized   INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;

    run_pending_migrations(conn)?;
    Ok(())
}
