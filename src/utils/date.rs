//! Date utilities: parsing, local-day bucketing, range expansion.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn yesterday() -> NaiveDate {
    today().pred_opt().unwrap()
}

/// Monday through Friday count as workdays.
pub fn is_workday(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDateFormat(s.to_string()))
}

/// Expand a period token into its first and last day.
/// Accepts YYYY, YYYY-MM and YYYY-MM-DD.
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    if p.len() == 7
        && let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
    {
        let last = match first.month() {
            12 => NaiveDate::from_ymd_opt(first.year() + 1, 1, 1),
            m => NaiveDate::from_ymd_opt(first.year(), m + 1, 1),
        }
        .and_then(|d| d.pred_opt());
        if let Some(last) = last {
            return Ok((first, last));
        }
    }

    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(AppError::InvalidDateFormat(p.to_string()))
}

/// Parse a `--range` value: a single period or `start:end` of equal
/// granularity (`2025`, `2025-03`, `2025-03-01:2025-03-15`, ...).
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((a, b)) = r.split_once(':') {
        let (a, b) = (a.trim(), b.trim());
        if a.len() != b.len() {
            return Err(AppError::InvalidDateFormat(r.to_string()));
        }
        let (start, _) = parse_period(a)?;
        let (_, end) = parse_period(b)?;
        Ok((start, end))
    } else {
        parse_period(r.trim())
    }
}

/// Every day of `[start, end]`, inclusive. Empty when `end < start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;
    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(n) => d = n,
            None => break,
        }
    }
    out
}

/// Local calendar date of a UTC instant.
pub fn local_date_of(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// First instant of the local day, as UTC.
pub fn day_start_utc(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_hms_opt(0, 0, 0).unwrap();
    match naive.and_local_timezone(Local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        // Zones that skip midnight on a DST day; UTC midnight is close enough.
        LocalResult::None => Utc.from_utc_datetime(&naive),
    }
}

/// A local wall-clock date and time as a UTC instant. Times a DST jump
/// skips do not exist and are rejected.
pub fn local_to_utc(date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Utc>> {
    let naive = date.and_time(time);
    match naive.and_local_timezone(Local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
        LocalResult::None => Err(AppError::InvalidDateFormat(format!(
            "{} {} is not a valid local time",
            date, time
        ))),
    }
}

/// UTC bounds `[start, end)` covering one local calendar day.
pub fn day_bounds_utc(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let next = date.succ_opt().unwrap_or(date);
    (day_start_utc(date), day_start_utc(next))
}
