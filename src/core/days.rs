//! Daily aggregation: raw cards bucketed into per-day work days over a
//! date range, with holiday and absence context attached.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::profile::Profile;
use crate::models::work_day::WorkDay;
use crate::utils::date::{day_start_utc, days_between, is_workday, local_date_of};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Loads every card in `[start, end]` and buckets it by local calendar
/// date. Weekdays without a single card still get an empty bucket so a
/// missing day surfaces downstream; weekends only appear when worked.
pub fn collect_work_days(
    pool: &mut DbPool,
    profile: &Profile,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<WorkDay>> {
    let range_start = day_start_utc(start);
    let range_end = day_start_utc(end.succ_opt().unwrap_or(end));
    let cards = queries::load_cards_between(pool, &profile.uuid, range_start, range_end)?;

    let mut buckets: BTreeMap<NaiveDate, WorkDay> = BTreeMap::new();
    for card in cards {
        let date = local_date_of(card.timestamp_utc);
        buckets
            .entry(date)
            .or_insert_with(|| WorkDay::empty(date))
            .cards
            .push(card);
    }

    for date in days_between(start, end) {
        if is_workday(date) {
            buckets.entry(date).or_insert_with(|| WorkDay::empty(date));
        }
    }

    let holidays = queries::load_holidays(pool, &profile.location)?;
    let absences = queries::load_absences(pool, &profile.uuid)?;

    let mut days: Vec<WorkDay> = buckets.into_values().collect();
    for day in &mut days {
        day.holiday = holidays.iter().find(|h| h.matches(day.date)).cloned();
        day.absence = absences.iter().find(|a| a.date == day.date).cloned();
    }

    Ok(days)
}

/// Single-day variant of [`collect_work_days`].
pub fn collect_work_day(
    pool: &mut DbPool,
    profile: &Profile,
    date: NaiveDate,
) -> AppResult<WorkDay> {
    let mut days = collect_work_days(pool, profile, date, date)?;
    match days.pop() {
        Some(day) if day.date == date => Ok(day),
        _ => Ok(WorkDay::empty(date)),
    }
}

/// Drops the trailing card of an odd list so the pair sum stays sane.
///
/// Only the balance path repairs odd days this way; the status path keeps
/// the odd count and reports it instead.
pub fn trim_odd_cards(stamps: &[i64]) -> &[i64] {
    if stamps.len() % 2 != 0 {
        &stamps[..stamps.len() - 1]
    } else {
        stamps
    }
}
