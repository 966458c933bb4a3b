//! Scheduled-minutes resolution for a single day.

use crate::models::profile::Schedule;
use crate::models::work_day::WorkDay;

/// How many minutes the day demands.
///
/// An authorized absence cancels the day entirely, even when it falls on
/// a holiday. A holiday replaces the office shift with its own required
/// hours. Otherwise the plain office schedule applies.
pub fn scheduled_minutes(day: &WorkDay, schedule: &Schedule) -> i64 {
    if day.has_authorized_absence() {
        return 0;
    }
    if let Some(holiday) = &day.holiday {
        return holiday.working_hours * 60;
    }
    schedule.daily_office_minutes
}
