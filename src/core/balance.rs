//! Balance accumulation: worked minus scheduled minutes across a range.

use crate::core::calculator::{pairing, schedule};
use crate::core::days::trim_odd_cards;
use crate::models::day_balance::DayBalance;
use crate::models::profile::Schedule;
use crate::models::work_day::WorkDay;

/// Range total plus the per-day breakdown, ordered by date.
///
/// Positive deltas are extra hours owed to the person, negative ones are
/// hours the person still owes.
#[derive(Debug, Default)]
pub struct BalanceReport {
    pub total_delta_minutes: i64,
    pub per_day: Vec<DayBalance>,
}

/// Walks aggregated days and accumulates worked minus scheduled minutes.
///
/// Odd buckets lose their trailing card before pairing. Lunch deductions
/// are never estimated here: a trimmed list is eventless or closed, and
/// short histories carry their breaks as explicit gaps once three or more
/// cards exist.
pub fn compute_balance(days: &[WorkDay], sched: &Schedule, now_min: i64) -> BalanceReport {
    let mut report = BalanceReport::default();

    for day in days {
        let stamps = day.card_minutes();
        let worked = pairing::worked_minutes(trim_odd_cards(&stamps), now_min, 0);
        let scheduled = schedule::scheduled_minutes(day, sched);
        let delta = worked - scheduled;

        report.total_delta_minutes += delta;
        report.per_day.push(DayBalance {
            date: day.date,
            worked_minutes: worked,
            scheduled_minutes: scheduled,
            delta_minutes: delta,
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::absence::Absence;
    use crate::models::holiday::Holiday;
    use crate::models::insert_method::InsertMethod;
    use crate::models::time_card::TimeCard;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sched() -> Schedule {
        Schedule {
            daily_office_minutes: 480,
            max_extra_minutes: 120,
            required_lunch_minutes: 60,
            min_rest_minutes: 660,
            auto_lunch_minutes: 0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn day_with(date: &str, clock_times: &[(u32, u32)]) -> WorkDay {
        let date: NaiveDate = date.parse().unwrap();
        let mut day = WorkDay::empty(date);
        for &(h, m) in clock_times {
            let ts = Utc.from_utc_datetime(&date.and_hms_opt(h, m, 0).unwrap());
            day.cards
                .push(TimeCard::new("p-1", ts, InsertMethod::Clock));
        }
        day
    }

    // Later than every card above; the balance path never reads it anyway.
    const NOW: i64 = 29_100_000;

    #[test]
    fn full_day_balances_to_zero() {
        let day = day_with("2025-03-03", &[(9, 0), (12, 0), (13, 0), (18, 0)]);
        let report = compute_balance(&[day], &sched(), NOW);
        assert_eq!(report.total_delta_minutes, 0);
        assert_eq!(report.per_day[0].worked_minutes, 480);
        assert_eq!(report.per_day[0].scheduled_minutes, 480);
    }

    #[test]
    fn odd_day_is_trimmed_not_summed_raw() {
        // Third card dropped, leaving the closed 09:00-12:00 interval.
        let day = day_with("2025-03-03", &[(9, 0), (12, 0), (13, 0)]);
        let report = compute_balance(&[day], &sched(), NOW);
        assert_eq!(report.per_day[0].worked_minutes, 180);
        assert_eq!(report.total_delta_minutes, 180 - 480);
    }

    #[test]
    fn missing_day_owes_the_full_shift() {
        let day = WorkDay::empty("2025-03-03".parse().unwrap());
        let report = compute_balance(&[day], &sched(), NOW);
        assert_eq!(report.total_delta_minutes, -480);
    }

    #[test]
    fn authorized_absence_cancels_the_day() {
        let mut day = WorkDay::empty("2025-03-03".parse().unwrap());
        day.absence = Some(Absence::new("p-1", day.date, "sick leave", true));
        let report = compute_balance(&[day], &sched(), NOW);
        assert_eq!(report.total_delta_minutes, 0);
        assert_eq!(report.per_day[0].scheduled_minutes, 0);
    }

    #[test]
    fn holiday_hours_shrink_the_debt() {
        let mut day = WorkDay::empty("2025-03-03".parse().unwrap());
        day.holiday = Some(Holiday::new(day.date, "HQ", "Half day", 4, false));
        let report = compute_balance(&[day], &sched(), NOW);
        assert_eq!(report.total_delta_minutes, -240);
    }

    #[test]
    fn totals_accumulate_across_days() {
        let days = vec![
            day_with("2025-03-03", &[(9, 0), (18, 0)]), // 540 - 480 = +60
            day_with("2025-03-04", &[(9, 0), (16, 0)]), // 420 - 480 = -60
            day_with("2025-03-05", &[(9, 0), (19, 30)]), // 630 - 480 = +150
        ];
        let report = compute_balance(&days, &sched(), NOW);
        assert_eq!(report.total_delta_minutes, 150);
        assert_eq!(report.per_day.len(), 3);
    }

    #[test]
    fn recomputing_changes_nothing() {
        let days = vec![
            day_with("2025-03-03", &[(9, 0), (12, 0), (13, 0), (18, 0)]),
            day_with("2025-03-04", &[(8, 30), (17, 0)]),
        ];
        let first = compute_balance(&days, &sched(), NOW);
        let second = compute_balance(&days, &sched(), NOW);
        assert_eq!(first.total_delta_minutes, second.total_delta_minutes);
        assert_eq!(first.per_day.len(), second.per_day.len());
        for (a, b) in first.per_day.iter().zip(second.per_day.iter()) {
            assert_eq!(a.delta_minutes, b.delta_minutes);
        }
    }
}
