use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

/// A calendar holiday for one location.
#[derive(Debug, Clone, Serialize)]
pub struct Holiday {
    pub uuid: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub working_hours: i64,
    pub recurring: bool,
}

impl Holiday {
    pub fn new(
        date: NaiveDate,
        location: &str,
        description: &str,
        working_hours: i64,
        recurring: bool,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            date,
            location: location.to_string(),
            description: description.to_string(),
            working_hours,
            recurring,
        }
    }

    /// Recurring holidays match by (day, month) every year; the rest match
    /// the exact date.
    pub fn matches(&self, date: NaiveDate) -> bool {
        if self.recurring {
            self.date.day() == date.day() && self.date.month() == date.month()
        } else {
            self.date == date
        }
    }
}
