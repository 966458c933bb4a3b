use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// A justified absence for one profile and date. At most one is considered
/// per (profile, date); the store returns the first match.
#[derive(Debug, Clone, Serialize)]
pub struct Absence {
    pub uuid: String,
    pub profile_uuid: String,
    pub date: NaiveDate,
    pub description: String,
    pub authorized: bool,
}

impl Absence {
    pub fn new(profile_uuid: &str, date: NaiveDate, description: &str, authorized: bool) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            profile_uuid: profile_uuid.to_string(),
            date,
            description: description.to_string(),
            authorized,
        }
    }
}
