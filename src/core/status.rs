//! Compliance classification: one severity per day from a fixed rule
//! order, first match wins.

use crate::core::calculator::{pairing, schedule};
use crate::models::day_status::{DayStatus, Severity, SeverityFilter};
use crate::models::profile::Schedule;
use crate::models::work_day::WorkDay;
use crate::utils::formatting::mins2readable;

/// Longest tolerated unbroken work block. Fixed, not configurable.
pub const MAX_UNBROKEN_BLOCK_MIN: i64 = 6 * 60;

/// Classifies every day of an aggregated range, in order.
pub fn classify_days(days: &[WorkDay], sched: &Schedule) -> Vec<DayStatus> {
    let mut out = Vec::with_capacity(days.len());
    let mut prev_last_min: Option<i64> = None;

    for day in days {
        out.push(classify_day(day, sched, prev_last_min));
        // The previous shift's end survives days without any card, so an
        // empty Tuesday cannot hide a short Monday-to-Wednesday rest.
        if let Some(last) = day.last_card_min() {
            prev_last_min = Some(last);
        }
    }

    out
}

/// Classified days at or above the filter threshold.
pub fn filtered_report(
    days: &[WorkDay],
    sched: &Schedule,
    filter: SeverityFilter,
) -> Vec<DayStatus> {
    classify_days(days, sched)
        .into_iter()
        .filter(|s| filter.admits(s.severity))
        .collect()
}

pub fn classify_day(day: &WorkDay, sched: &Schedule, prev_last_min: Option<i64>) -> DayStatus {
    let stamps = day.card_minutes();
    let (severity, reason) = evaluate(day, sched, &stamps, prev_last_min);
    DayStatus {
        date: day.date,
        severity,
        reason,
        info: Some(info_line(day, sched, &stamps)),
    }
}

fn evaluate(
    day: &WorkDay,
    sched: &Schedule,
    stamps: &[i64],
    prev_last_min: Option<i64>,
) -> (Severity, Option<String>) {
    if stamps.len() % 2 != 0 {
        return (
            Severity::Error,
            Some(format!("odd number of time cards ({})", stamps.len())),
        );
    }

    if stamps.is_empty() && day.holiday.is_none() && day.absence.is_none() {
        return (Severity::Error, Some("missing time card".to_string()));
    }

    let worked = pairing::closed_minutes(stamps);
    let allowed = schedule::scheduled_minutes(day, sched) + sched.max_extra_minutes;
    if worked > allowed {
        return (
            Severity::Warn,
            Some(format!(
                "worked {}, allowed at most {}",
                mins2readable(worked, false, false),
                mins2readable(allowed, false, false),
            )),
        );
    }

    match pairing::paired_blocks(stamps) {
        Ok(blocks) => {
            let longest = pairing::longest_block(&blocks);
            if longest > MAX_UNBROKEN_BLOCK_MIN {
                return (
                    Severity::Info,
                    Some(format!(
                        "unbroken block of {}",
                        mins2readable(longest, false, false)
                    )),
                );
            }
        }
        // Unreachable while the odd-count rule runs first.
        Err(err) => return (Severity::Error, Some(err.to_string())),
    }

    if let Some(&longest_gap) = pairing::gaps_after_first(stamps).iter().max()
        && longest_gap < sched.required_lunch_minutes
    {
        return (
            Severity::Info,
            Some(format!(
                "longest break of {} is under the required {}",
                mins2readable(longest_gap, false, false),
                mins2readable(sched.required_lunch_minutes, false, false),
            )),
        );
    }

    if let (Some(prev_last), Some(first)) = (prev_last_min, day.first_card_min())
        && first - prev_last < sched.min_rest_minutes
    {
        return (
            Severity::Info,
            Some(format!(
                "only {} of rest since the previous shift",
                mins2readable(first - prev_last, false, false)
            )),
        );
    }

    (Severity::Ok, None)
}

/// Display context carried by every day, independent of the class:
/// the holiday, the absence, or a worked-vs-scheduled summary.
fn info_line(day: &WorkDay, sched: &Schedule, stamps: &[i64]) -> String {
    if let Some(h) = &day.holiday {
        return format!("{} ({}h scheduled)", h.description, h.working_hours);
    }
    if let Some(a) = &day.absence {
        let kind = if a.authorized {
            "authorized"
        } else {
            "not authorized"
        };
        return format!("{} ({})", a.description, kind);
    }

    let worked = pairing::closed_minutes(stamps);
    let scheduled = schedule::scheduled_minutes(day, sched);
    format!(
        "worked {} of {} ({})",
        mins2readable(worked, false, false),
        mins2readable(scheduled, false, false),
        mins2readable(worked - scheduled, true, false),
    )
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

    fn classify(day: &WorkDay) -> DayStatus {
        classify_day(day, &sched(), None)
    }

    #[test]
    fn odd_count_is_an_error_with_the_count() {
        let status = classify(&day_with("2025-03-03", &[(9, 0), (12, 0), (13, 0)]));
        assert_eq!(status.severity, Severity::Error);
        assert!(status.reason.unwrap().contains("(3)"));
    }

    #[test]
    fn empty_workday_is_a_missing_error() {
        let status = classify(&day_with("2025-03-03", &[]));
        assert_eq!(status.severity, Severity::Error);
        assert_eq!(status.reason.as_deref(), Some("missing time card"));
    }

    #[test]
    fn empty_holiday_is_fine() {
        let mut day = day_with("2025-12-25", &[]);
        day.holiday = Some(Holiday::new(day.date, "HQ", "Christmas", 0, true));
        let status = classify(&day);
        assert_eq!(status.severity, Severity::Ok);
        assert!(status.info.unwrap().contains("Christmas"));
    }

    #[test]
    fn empty_day_with_unauthorized_absence_is_not_missing() {
        let mut day = day_with("2025-03-03", &[]);
        day.absence = Some(Absence::new("p-1", day.date, "no show", false));
        let status = classify(&day);
        assert_eq!(status.severity, Severity::Ok);
        assert!(status.info.unwrap().contains("not authorized"));
    }

    #[test]
    fn overwork_warns_before_block_length_informs() {
        // 11h30m straight: beyond the 8h+2h allowance and beyond the block
        // limit; the warning must win.
        let status = classify(&day_with("2025-03-03", &[(8, 0), (19, 30)]));
        assert_eq!(status.severity, Severity::Warn);
        assert!(status.reason.unwrap().contains("allowed at most"));
    }

    #[test]
    fn authorized_absence_shrinks_the_warn_threshold() {
        let mut day = day_with("2025-03-03", &[(9, 0), (12, 0)]);
        day.absence = Some(Absence::new("p-1", day.date, "sick leave", true));
        let status = classify(&day);
        // 3h worked on a day whose allowance shrank to the 2h extra.
        assert_eq!(status.severity, Severity::Warn);
    }

    #[test]
    fn long_unbroken_block_informs() {
        let status = classify(&day_with("2025-03-03", &[(9, 0), (16, 0)]));
        assert_eq!(status.severity, Severity::Info);
        assert!(status.reason.unwrap().contains("unbroken block"));
    }

    #[test]
    fn six_hours_exactly_is_still_ok() {
        let status = classify(&day_with("2025-03-03", &[(9, 0), (15, 0)]));
        assert_eq!(status.severity, Severity::Ok);
    }

    #[test]
    fn short_lunch_informs() {
        // Breaks after the morning interval: 20m and 50m, both under 1h.
        let day = day_with("2025-03-03", &[(9, 0), (12, 0), (12, 20), (13, 10)]);
        let status = classify(&day);
        assert_eq!(status.severity, Severity::Info);
        assert!(status.reason.unwrap().contains("longest break"));
    }

    #[test]
    fn a_proper_lunch_gap_satisfies_the_rule() {
        let day = day_with("2025-03-03", &[(9, 0), (12, 0), (13, 0), (17, 0)]);
        assert_eq!(classify(&day).severity, Severity::Ok);
    }

    #[test]
    fn short_rest_between_shifts_informs() {
        let days = vec![
            day_with("2025-03-03", &[(13, 0), (16, 0), (16, 30), (21, 0)]),
            day_with("2025-03-04", &[(7, 0), (12, 0), (13, 0), (16, 0)]),
        ];
        let statuses = classify_days(&days, &sched());
        assert_eq!(statuses[0].severity, Severity::Ok);
        assert_eq!(statuses[1].severity, Severity::Info);
        assert!(statuses[1].reason.as_deref().unwrap().contains("rest"));
    }

    #[test]
    fn rest_rule_carries_across_empty_days() {
        let mut tight = sched();
        tight.min_rest_minutes = 40 * 60;
        let days = vec![
            day_with("2025-03-03", &[(13, 0), (16, 0), (17, 0), (21, 0)]),
            day_with("2025-03-04", &[]),
            day_with("2025-03-05", &[(8, 0), (11, 0), (12, 0), (16, 0)]),
        ];
        let statuses = classify_days(&days, &tight);
        // 35h between Monday 21:00 and Wednesday 08:00, under the 40h floor.
        assert_eq!(statuses[1].severity, Severity::Error);
        assert_eq!(statuses[2].severity, Severity::Info);
        assert!(statuses[2].reason.as_deref().unwrap().contains("rest"));
    }

    #[test]
    fn plain_day_reports_ok_with_a_summary() {
        let status = classify(&day_with("2025-03-03", &[(9, 0), (12, 0), (13, 0), (18, 0)]));
        assert_eq!(status.severity, Severity::Ok);
        assert!(status.reason.is_none());
        assert_eq!(
            status.info.as_deref(),
            Some("worked 08h 00m of 08h 00m (00h 00m)")
        );
    }

    #[test]
    fn filtered_report_respects_the_threshold() {
        let days = vec![
            day_with("2025-03-03", &[(9, 0), (12, 0), (13, 0), (18, 0)]),
            day_with("2025-03-04", &[]),
            day_with("2025-03-05", &[(9, 0), (16, 0)]),
        ];
        let all = filtered_report(&days, &sched(), SeverityFilter::Min(Severity::Ok));
        assert_eq!(all.len(), 3);

        let warnings = filtered_report(&days, &sched(), SeverityFilter::Min(Severity::Warn));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Error);

        let none = filtered_report(&days, &sched(), SeverityFilter::None);
        assert!(none.is_empty());
    }
}
