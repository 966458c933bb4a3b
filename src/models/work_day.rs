use super::{absence::Absence, holiday::Holiday, time_card::TimeCard};
use crate::utils::time::epoch_minutes;
use chrono::NaiveDate;

/// One local calendar day's bucket of cards plus resolved calendar context.
/// Ephemeral: rebuilt on every query, never persisted.
/// Invariant: `cards` sorted ascending by timestamp, unique by uuid.
#[derive(Debug, Clone)]
pub struct WorkDay {
    pub date: NaiveDate,
    pub cards: Vec<TimeCard>,
    pub holiday: Option<Holiday>,
    pub absence: Option<Absence>,
}

impl WorkDay {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            cards: Vec::new(),
            holiday: None,
            absence: None,
        }
    }

    /// Card timestamps as minutes since epoch, in order.
    pub fn card_minutes(&self) -> Vec<i64> {
        self.cards
            .iter()
            .map(|c| epoch_minutes(c.timestamp_utc))
            .collect()
    }

    pub fn first_card_min(&self) -> Option<i64> {
        self.cards.first().map(|c| epoch_minutes(c.timestamp_utc))
    }

    pub fn last_card_min(&self) -> Option<i64> {
        self.cards.last().map(|c| epoch_minutes(c.timestamp_utc))
    }

    pub fn has_authorized_absence(&self) -> bool {
        self.absence.as_ref().is_some_and(|a| a.authorized)
    }
}
