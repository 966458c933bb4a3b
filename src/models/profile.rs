use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The person being tracked. Exactly one profile exists; identity fields are
/// display-only, the schedule subset drives the engine.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub uuid: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub daily_office_hours: i64,
    pub max_allowed_extra_hours: i64,
    pub required_lunch_hours: i64,
    pub min_hours_between_work_days: i64,
    pub auto_insert_lunch_minutes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Schedule subset consumed by the engine, normalized to minutes.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    pub daily_office_minutes: i64,
    pub max_extra_minutes: i64,
    pub required_lunch_minutes: i64,
    pub min_rest_minutes: i64,
    pub auto_lunch_minutes: i64,
    pub start_date: NaiveDate,
}

impl Profile {
    pub fn new(
        first_name: &str,
        last_name: &str,
        company: &str,
        location: &str,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            uuid: Uuid::new_v4().to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            start_date,
            daily_office_hours: 8,
            max_allowed_extra_hours: 2,
            required_lunch_hours: 1,
            min_hours_between_work_days: 11,
            auto_insert_lunch_minutes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn schedule(&self) -> Schedule {
        Schedule {
            daily_office_minutes: self.daily_office_hours * 60,
            max_extra_minutes: self.max_allowed_extra_hours * 60,
            required_lunch_minutes: self.required_lunch_hours * 60,
            min_rest_minutes: self.min_hours_between_work_days * 60,
            auto_lunch_minutes: self.auto_insert_lunch_minutes,
            start_date: self.start_date,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
