use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::absence::Absence;
use crate::models::holiday::Holiday;
use crate::models::insert_method::InsertMethod;
use crate::models::profile::Profile;
use crate::models::time_card::TimeCard;
use crate::utils::date::day_bounds_utc;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_err(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_ts(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_err(AppError::InvalidDateFormat(raw.to_string())))
}

fn parse_day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| conversion_err(AppError::InvalidDateFormat(raw.to_string())))
}

// ---------------------------
// time_cards
// ---------------------------

pub fn map_card(row: &Row) -> Result<TimeCard> {
    let ts_raw: String = row.get("event_timestamp_utc")?;
    let created_raw: String = row.get("created_at")?;

    let method_raw: String = row.get("method")?;
    let method = InsertMethod::from_db_str(&method_raw)
        .ok_or_else(|| conversion_err(AppError::InvalidMethod(method_raw.clone())))?;

    Ok(TimeCard {
        uuid: row.get("uuid")?,
        profile_uuid: row.get("profile_uuid")?,
        timestamp_utc: parse_ts(&ts_raw)?,
        method,
        created_at: parse_ts(&created_raw)?,
    })
}

pub fn insert_card(conn: &Connection, card: &TimeCard) -> AppResult<()> {
    conn.execute(
        "INSERT INTO time_cards (uuid, profile_uuid, event_timestamp_utc, method, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            card.uuid,
            card.profile_uuid,
            card.timestamp_utc.to_rfc3339(),
            card.method.to_db_str(),
            card.created_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Cards in `[start, end)`, ordered by timestamp. Stored timestamps are
/// RFC3339 in UTC, so string comparison matches time order.
pub fn load_cards_between(
    pool: &mut DbPool,
    profile_uuid: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AppResult<Vec<TimeCard>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM time_cards
         WHERE profile_uuid = ?1
           AND event_timestamp_utc >= ?2
           AND event_timestamp_utc < ?3
         ORDER BY event_timestamp_utc ASC",
    )?;

    let rows = stmt.query_map(
        params![profile_uuid, start.to_rfc3339(), end.to_rfc3339()],
        map_card,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Cards of one local calendar day.
pub fn load_cards_for_day(
    pool: &mut DbPool,
    profile_uuid: &str,
    date: NaiveDate,
) -> AppResult<Vec<TimeCard>> {
    let (start, end) = day_bounds_utc(date);
    load_cards_between(pool, profile_uuid, start, end)
}

/// Every card of the profile, oldest first.
pub fn load_all_cards(pool: &mut DbPool, profile_uuid: &str) -> AppResult<Vec<TimeCard>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM time_cards
         WHERE profile_uuid = ?1
         ORDER BY event_timestamp_utc ASC",
    )?;

    let rows = stmt.query_map([profile_uuid], map_card)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Returns the number of deleted rows (0 when the uuid is unknown).
pub fn delete_card(conn: &Connection, profile_uuid: &str, uuid: &str) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM time_cards WHERE profile_uuid = ?1 AND uuid = ?2",
        params![profile_uuid, uuid],
    )?;
    Ok(n)
}

// ---------------------------
// holidays
// ---------------------------

pub fn map_holiday(row: &Row) -> Result<Holiday> {
    let date_raw: String = row.get("date")?;
    Ok(Holiday {
        uuid: row.get("uuid")?,
        date: parse_day(&date_raw)?,
        location: row.get("location")?,
        description: row.get("description")?,
        working_hours: row.get("working_hours")?,
        recurring: row.get::<_, i64>("recurring")? != 0,
    })
}

pub fn insert_holiday(conn: &Connection, h: &Holiday) -> AppResult<()> {
    conn.execute(
        "INSERT INTO holidays (uuid, date, location, description, working_hours, recurring)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            h.uuid,
            h.date.format("%Y-%m-%d").to_string(),
            h.location,
            h.description,
            h.working_hours,
            h.recurring as i64,
        ],
    )?;
    Ok(())
}

/// All holidays visible from one location, recurring ones included.
pub fn load_holidays(pool: &mut DbPool, location: &str) -> AppResult<Vec<Holiday>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM holidays WHERE location = ?1 ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([location], map_holiday)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// First holiday matching the date (recurring by day+month, else exact).
pub fn holiday_for_date(
    pool: &mut DbPool,
    location: &str,
    date: NaiveDate,
) -> AppResult<Option<Holiday>> {
    Ok(load_holidays(pool, location)?
        .into_iter()
        .find(|h| h.matches(date)))
}

// ---------------------------
// absences
// ---------------------------

pub fn map_absence(row: &Row) -> Result<Absence> {
    let date_raw: String = row.get("date")?;
    Ok(Absence {
        uuid: row.get("uuid")?,
        profile_uuid: row.get("profile_uuid")?,
        date: parse_day(&date_raw)?,
        description: row.get("description")?,
        authorized: row.get::<_, i64>("authorized")? != 0,
    })
}

pub fn insert_absence(conn: &Connection, a: &Absence) -> AppResult<()> {
    conn.execute(
        "INSERT INTO absences (uuid, profile_uuid, date, description, authorized)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            a.uuid,
            a.profile_uuid,
            a.date.format("%Y-%m-%d").to_string(),
            a.description,
            a.authorized as i64,
        ],
    )?;
    Ok(())
}

pub fn load_absences(pool: &mut DbPool, profile_uuid: &str) -> AppResult<Vec<Absence>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM absences WHERE profile_uuid = ?1 ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([profile_uuid], map_absence)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// First absence recorded for the date, authorized or not.
pub fn absence_for_date(
    pool: &mut DbPool,
    profile_uuid: &str,
    date: NaiveDate,
) -> AppResult<Option<Absence>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM absences WHERE profile_uuid = ?1 AND date = ?2 ORDER BY uuid LIMIT 1",
    )?;

    let found = stmt
        .query_row(
            params![profile_uuid, date.format("%Y-%m-%d").to_string()],
            map_absence,
        )
        .optional()?;
    Ok(found)
}

// ---------------------------
// profiles
// ---------------------------

pub fn map_profile(row: &Row) -> Result<Profile> {
    let start_raw: String = row.get("start_date")?;
    let created_raw: String = row.get("created_at")?;
    let updated_raw: String = row.get("updated_at")?;

    Ok(Profile {
        uuid: row.get("uuid")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        company: row.get("company")?,
        location: row.get("location")?,
        start_date: parse_day(&start_raw)?,
        daily_office_hours: row.get("daily_office_hours")?,
        max_allowed_extra_hours: row.get("max_allowed_extra_hours")?,
        required_lunch_hours: row.get("required_lunch_hours")?,
        min_hours_between_work_days: row.get("min_hours_between_work_days")?,
        auto_insert_lunch_minutes: row.get("auto_insert_lunch_minutes")?,
        created_at: parse_ts(&created_raw)?,
        updated_at: parse_ts(&updated_raw)?,
    })
}

pub fn insert_profile(conn: &Connection, p: &Profile) -> AppResult<()> {
    conn.execute(
        "INSERT INTO profiles (uuid, first_name, last_name, company, location, start_date,
                               daily_office_hours, max_allowed_extra_hours, required_lunch_hours,
                               min_hours_between_work_days, auto_insert_lunch_minutes,
                               created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            p.uuid,
            p.first_name,
            p.last_name,
            p.company,
            p.location,
            p.start_date.format("%Y-%m-%d").to_string(),
            p.daily_office_hours,
            p.max_allowed_extra_hours,
            p.required_lunch_hours,
            p.min_hours_between_work_days,
            p.auto_insert_lunch_minutes,
            p.created_at.to_rfc3339(),
            p.updated_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn update_profile(conn: &Connection, p: &Profile) -> AppResult<()> {
    conn.execute(
        "UPDATE profiles SET
             first_name = ?2, last_name = ?3, company = ?4, location = ?5,
             start_date = ?6, daily_office_hours = ?7, max_allowed_extra_hours = ?8,
             required_lunch_hours = ?9, min_hours_between_work_days = ?10,
             auto_insert_lunch_minutes = ?11, updated_at = ?12
         WHERE uuid = ?1",
        params![
            p.uuid,
            p.first_name,
            p.last_name,
            p.company,
            p.location,
            p.start_date.format("%Y-%m-%d").to_string(),
            p.daily_office_hours,
            p.max_allowed_extra_hours,
            p.required_lunch_hours,
            p.min_hours_between_work_days,
            p.auto_insert_lunch_minutes,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// The single profile, when one exists. Multi-profile selection is out of
/// scope; the first row wins.
pub fn load_profile(pool: &mut DbPool) -> AppResult<Option<Profile>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM profiles ORDER BY created_at ASC LIMIT 1")?;

    let found = stmt.query_row([], map_profile).optional()?;
    Ok(found)
}

pub fn require_profile(pool: &mut DbPool) -> AppResult<Profile> {
    load_profile(pool)?.ok_or(AppError::ProfileMissing)
}
