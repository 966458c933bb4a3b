//! Card mutations: cooldown-guarded clocking, manual inserts, deletion.

use crate::db::log::record_op;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::insert_method::InsertMethod;
use crate::models::profile::Profile;
use crate::models::time_card::TimeCard;
use crate::utils::date::today;
use chrono::{DateTime, Utc};

pub struct ClockLogic;

impl ClockLogic {
    /// Records a clock card at the current instant.
    ///
    /// Rejected while the newest card of today is younger than the
    /// configured cooldown.
    pub fn clock_now(
        pool: &mut DbPool,
        profile: &Profile,
        cooldown_seconds: i64,
    ) -> AppResult<TimeCard> {
        let now = Utc::now();
        let cards_today = queries::load_cards_for_day(pool, &profile.uuid, today())?;

        if let Some(last) = cards_today.last() {
            let age = (now - last.timestamp_utc).num_seconds();
            if age < cooldown_seconds {
                return Err(AppError::CooldownActive(age, cooldown_seconds));
            }
        }

        let card = TimeCard::new(&profile.uuid, now, InsertMethod::Clock);
        queries::insert_card(&pool.conn, &card)?;
        record_op(
            &pool.conn,
            "clock",
            &card.uuid,
            &format!("Card at {}", card.local_time_str()),
        )?;

        Ok(card)
    }

    /// Inserts a card at an explicit timestamp. Manual cards skip the
    /// cooldown.
    pub fn add_manual(
        pool: &mut DbPool,
        profile: &Profile,
        ts: DateTime<Utc>,
    ) -> AppResult<TimeCard> {
        let card = TimeCard::new(&profile.uuid, ts, InsertMethod::Manual);
        queries::insert_card(&pool.conn, &card)?;
        record_op(
            &pool.conn,
            "add",
            &card.uuid,
            &format!(
                "Manual card at {} {}",
                card.local_date_str(),
                card.local_time_str()
            ),
        )?;

        Ok(card)
    }

    /// Deletes one card by uuid. Returns whether anything matched.
    pub fn delete(pool: &mut DbPool, profile: &Profile, uuid: &str) -> AppResult<bool> {
        let removed = queries::delete_card(&pool.conn, &profile.uuid, uuid)?;
        if removed > 0 {
            record_op(&pool.conn, "del", uuid, "Card deleted")?;
        }
        Ok(removed > 0)
    }
}
