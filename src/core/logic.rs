//! High-level engine entry points tying the store to the calculators.

use crate::core::balance::{self, BalanceReport};
use crate::core::calculator::{pairing, schedule};
use crate::core::days;
use crate::core::status;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::day_status::{DayStatus, SeverityFilter};
use crate::models::profile::Profile;
use crate::models::work_day::WorkDay;
use crate::utils::time::epoch_minutes;
use chrono::{NaiveDate, Utc};

/// One day's derived numbers plus its classification.
#[derive(Debug)]
pub struct DayReport {
    pub day: WorkDay,
    pub worked_minutes: i64,
    pub scheduled_minutes: i64,
    pub status: DayStatus,
}

pub struct Core;

impl Core {
    /// Worked, scheduled and status for one day. An open shift counts up
    /// to the current minute.
    pub fn day_report(
        pool: &mut DbPool,
        profile: &Profile,
        date: NaiveDate,
    ) -> AppResult<DayReport> {
        let sched = profile.schedule();
        let day = days::collect_work_day(pool, profile, date)?;

        let worked = pairing::worked_minutes(
            &day.card_minutes(),
            epoch_minutes(Utc::now()),
            sched.auto_lunch_minutes,
        );
        let scheduled = schedule::scheduled_minutes(&day, &sched);
        let status = status::classify_day(&day, &sched, None);

        Ok(DayReport {
            day,
            worked_minutes: worked,
            scheduled_minutes: scheduled,
            status,
        })
    }

    /// Extra-hours balance over `[start, end]`, both days included.
    pub fn balance(
        pool: &mut DbPool,
        profile: &Profile,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<BalanceReport> {
        let work_days = days::collect_work_days(pool, profile, start, end)?;
        Ok(balance::compute_balance(
            &work_days,
            &profile.schedule(),
            epoch_minutes(Utc::now()),
        ))
    }

    /// Per-day classification over `[start, end]`, filtered to entries at
    /// or above the requested severity.
    pub fn status_report(
        pool: &mut DbPool,
        profile: &Profile,
        start: NaiveDate,
        end: NaiveDate,
        filter: SeverityFilter,
    ) -> AppResult<Vec<DayStatus>> {
        let work_days = days::collect_work_days(pool, profile, start, end)?;
        Ok(status::filtered_report(
            &work_days,
            &profile.schedule(),
            filter,
        ))
    }
}
