use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::record_op;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::profile::Profile;
use crate::ui::messages::{header, success};
use crate::utils::date::{parse_date, today};
use crate::utils::formatting::mins2readable;

#[allow(clippy::too_many_arguments)]
fn apply_fields(
    p: &mut Profile,
    first_name: &Option<String>,
    last_name: &Option<String>,
    company: &Option<String>,
    location: &Option<String>,
    start_date: &Option<String>,
    office_hours: Option<i64>,
    max_extra_hours: Option<i64>,
    lunch_hours: Option<i64>,
    min_rest_hours: Option<i64>,
    auto_lunch_minutes: Option<i64>,
) -> AppResult<()> {
    if let Some(v) = first_name {
        p.first_name = v.clone();
    }
    if let Some(v) = last_name {
        p.last_name = v.clone();
    }
    if let Some(v) = company {
        p.company = v.clone();
    }
    if let Some(v) = location {
        p.location = v.clone();
    }
    if let Some(v) = start_date {
        p.start_date = parse_date(v)?;
    }
    if let Some(v) = office_hours {
        p.daily_office_hours = v;
    }
    if let Some(v) = max_extra_hours {
        p.max_allowed_extra_hours = v;
    }
    if let Some(v) = lunch_hours {
        p.required_lunch_hours = v;
    }
    if let Some(v) = min_rest_hours {
        p.min_hours_between_work_days = v;
    }
    if let Some(v) = auto_lunch_minutes {
        p.auto_insert_lunch_minutes = v;
    }
    Ok(())
}

fn show(p: &Profile) {
    header(format!("Profile: {}", p.display_name()));
    println!("🏢 Company:  {} ({})", p.company, p.location);
    println!("📅 Tracked since {}", p.start_date);
    println!();
    println!(
        "Office hours:     {} per workday",
        mins2readable(p.daily_office_hours * 60, false, false)
    );
    println!(
        "Max extra hours:  {}",
        mins2readable(p.max_allowed_extra_hours * 60, false, false)
    );
    println!(
        "Required lunch:   {}",
        mins2readable(p.required_lunch_hours * 60, false, false)
    );
    println!(
        "Min rest between: {}",
        mins2readable(p.min_hours_between_work_days * 60, false, false)
    );
    println!("Auto lunch:       {} minutes", p.auto_insert_lunch_minutes);
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        first_name,
        last_name,
        company,
        location,
        start_date,
        office_hours,
        max_extra_hours,
        lunch_hours,
        min_rest_hours,
        auto_lunch_minutes,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let existing = queries::load_profile(&mut pool)?;

        let has_changes = first_name.is_some()
            || last_name.is_some()
            || company.is_some()
            || location.is_some()
            || start_date.is_some()
            || office_hours.is_some()
            || max_extra_hours.is_some()
            || lunch_hours.is_some()
            || min_rest_hours.is_some()
            || auto_lunch_minutes.is_some();

        if !has_changes {
            match existing {
                Some(p) => show(&p),
                None => {
                    println!("No profile yet. Create one with:");
                    println!("  timecard profile --first-name NAME --last-name NAME");
                }
            }
            return Ok(());
        }

        match existing {
            Some(mut p) => {
                apply_fields(
                    &mut p,
                    first_name,
                    last_name,
                    company,
                    location,
                    start_date,
                    *office_hours,
                    *max_extra_hours,
                    *lunch_hours,
                    *min_rest_hours,
                    *auto_lunch_minutes,
                )?;
                queries::update_profile(&pool.conn, &p)?;
                record_op(&pool.conn, "profile", &p.uuid, "Profile updated")?;
                success(format!("Profile updated: {}", p.display_name()));
            }
            None => {
                let start = match start_date {
                    Some(s) => parse_date(s)?,
                    None => today(),
                };
                let mut p = Profile::new(
                    first_name.as_deref().unwrap_or(""),
                    last_name.as_deref().unwrap_or(""),
                    company.as_deref().unwrap_or(""),
                    location.as_deref().unwrap_or("default"),
                    start,
                );
                apply_fields(
                    &mut p,
                    &None,
                    &None,
                    &None,
                    &None,
                    &None,
                    *office_hours,
                    *max_extra_hours,
                    *lunch_hours,
                    *min_rest_hours,
                    *auto_lunch_minutes,
                )?;
                queries::insert_profile(&pool.conn, &p)?;
                record_op(&pool.conn, "profile", &p.uuid, "Profile created")?;
                success(format!("Profile created: {}", p.display_name()));
            }
        }
    }

    Ok(())
}
