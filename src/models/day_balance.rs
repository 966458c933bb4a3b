use chrono::NaiveDate;

/// Per-day outcome of the balance accumulator. Derived, never persisted.
/// Sign convention: positive delta = extra minutes owed to the person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBalance {
    pub date: NaiveDate,
    pub worked_minutes: i64,
    pub scheduled_minutes: i64,
    pub delta_minutes: i64,
}
