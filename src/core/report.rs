//! The interactive "where am I today" report.

use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::profile::Profile;
use crate::utils::date::is_workday;
use crate::utils::formatting::{bold, mins2readable};
use chrono::{DateTime, Duration, Local};

pub struct TodayLogic;

impl TodayLogic {
    pub fn run(pool: &mut DbPool, profile: &Profile) -> AppResult<()> {
        let now_local = Local::now();
        let date = now_local.date_naive();
        let report = Core::day_report(pool, profile, date)?;
        let day = &report.day;

        println!("🕑 Now: {}", now_local.format("%Y-%m-%d %H:%M:%S"));
        println!();

        // Days that require no work end the report early.
        if let Some(a) = &day.absence {
            let kind = if a.authorized {
                "authorized"
            } else {
                "not authorized"
            };
            println!("🏖️  No work scheduled today: {} ({}).", a.description, kind);
            return Ok(());
        }
        if let Some(h) = &day.holiday
            && h.working_hours == 0
        {
            println!("🎉 No work scheduled today: {}.", h.description);
            return Ok(());
        }
        if !is_workday(date) && day.cards.is_empty() {
            println!("🛋️  Today is not a workday.");
            return Ok(());
        }

        if day.cards.is_empty() {
            println!("You haven't started to work yet.");
        } else {
            let noun = if day.cards.len() == 1 { "card" } else { "cards" };
            println!(
                "Worked so far: {} ({} {})",
                bold(&mins2readable(report.worked_minutes, false, false)),
                day.cards.len(),
                noun,
            );
        }
        println!();

        let max_extra = profile.schedule().max_extra_minutes;
        print_shift(
            "Regular shift",
            report.scheduled_minutes,
            report.worked_minutes,
            now_local,
        );
        print_shift(
            "Extra shift  ",
            report.scheduled_minutes + max_extra,
            report.worked_minutes,
            now_local,
        );

        Ok(())
    }
}

fn print_shift(label: &str, target_min: i64, worked_min: i64, now: DateTime<Local>) {
    let missing = target_min - worked_min;
    println!("{} ({}):", label, mins2readable(target_min, false, false));

    if missing > 0 {
        let out_at = now + Duration::minutes(missing);
        println!(
            "    clock out at {}  (missing {})",
            out_at.format("%H:%M:%S"),
            mins2readable(missing, false, false),
        );
    } else {
        println!(
            "    ✅ completed, {} beyond",
            mins2readable(-missing, false, false)
        );
    }
}
