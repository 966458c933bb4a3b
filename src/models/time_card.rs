use super::insert_method::InsertMethod;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One clock event. Immutable once persisted; edits are delete + reinsert.
/// Ordering key is `timestamp_utc`.
#[derive(Debug, Clone, Serialize)]
pub struct TimeCard {
    pub uuid: String,
    pub profile_uuid: String,
    pub timestamp_utc: DateTime<Utc>,
    pub method: InsertMethod,
    pub created_at: DateTime<Utc>,
}

impl TimeCard {
    pub fn new(profile_uuid: &str, timestamp_utc: DateTime<Utc>, method: InsertMethod) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            profile_uuid: profile_uuid.to_string(),
            timestamp_utc,
            method,
            created_at: Utc::now(),
        }
    }

    /// Local calendar day this card belongs to.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp_utc.with_timezone(&Local).date_naive()
    }

    pub fn local_date_str(&self) -> String {
        self.local_date().format("%Y-%m-%d").to_string()
    }

    pub fn local_time_str(&self) -> String {
        self.timestamp_utc
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string()
    }
}
