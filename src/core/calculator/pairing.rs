//! Pairing engine: turns one day's ordered card timestamps into worked
//! minutes and paired work blocks.
//!
//! All timestamps are whole minutes since the Unix epoch, ascending.

use crate::errors::{AppError, AppResult};

/// One closed work interval between a clock-in and a clock-out card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start_min: i64,
    pub end_min: i64,
}

impl Block {
    pub fn minutes(&self) -> i64 {
        self.end_min - self.start_min
    }
}

/// Worked minutes for one day's cards, branching on the card count.
///
/// * 0 cards: nothing worked yet.
/// * 1 card: open shift since the single card, minus the auto-lunch
///   estimate, floored at zero.
/// * 2 cards: the closed interval, minus the auto-lunch estimate,
///   floored at zero.
/// * 3 cards: first closed interval plus the open tail since the third
///   card. The middle gap is the recorded lunch, so no estimate applies.
/// * even count: sum of the consecutive (in, out) pairs.
/// * odd count of five or more: a virtual card at `now_min` closes the
///   open shift, then the even rule applies.
pub fn worked_minutes(stamps: &[i64], now_min: i64, auto_lunch_min: i64) -> i64 {
    match stamps.len() {
        0 => 0,
        1 => (now_min - stamps[0] - auto_lunch_min).max(0),
        2 => (stamps[1] - stamps[0] - auto_lunch_min).max(0),
        3 => (stamps[1] - stamps[0]) + (now_min - stamps[2]),
        n if n % 2 == 0 => closed_minutes(stamps),
        _ => {
            let mut closed = Vec::with_capacity(stamps.len() + 1);
            closed.extend_from_slice(stamps);
            closed.push(now_min);
            closed_minutes(&closed)
        }
    }
}

/// Sum of the closed (in, out) pairs. A trailing unpaired card is ignored,
/// which makes this the now-free estimate for in-progress or odd days.
pub fn closed_minutes(stamps: &[i64]) -> i64 {
    stamps.chunks_exact(2).map(|pair| pair[1] - pair[0]).sum()
}

/// Splits an even card list into its (in, out) blocks.
pub fn paired_blocks(stamps: &[i64]) -> AppResult<Vec<Block>> {
    if stamps.len() % 2 != 0 {
        return Err(AppError::InconsistentCardCount(stamps.len()));
    }
    Ok(stamps
        .chunks_exact(2)
        .map(|pair| Block {
            start_min: pair[0],
            end_min: pair[1],
        })
        .collect())
}

/// Duration of the longest single block, zero when there are none.
pub fn longest_block(blocks: &[Block]) -> i64 {
    blocks.iter().map(Block::minutes).max().unwrap_or(0)
}

/// Gaps between consecutive cards, skipping the first one.
///
/// The first gap is the morning work interval, so with fewer than three
/// cards there is no break candidate and the result is empty.
pub fn gaps_after_first(stamps: &[i64]) -> Vec<i64> {
    if stamps.len() < 3 {
        return Vec::new();
    }
    stamps.windows(2).skip(1).map(|w| w[1] - w[0]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minutes since epoch for a clock time on an arbitrary fixed day.
    fn at(h: i64, m: i64) -> i64 {
        const DAY: i64 = 20_000 * 24 * 60;
        DAY + h * 60 + m
    }

    #[test]
    fn no_cards_means_no_work() {
        assert_eq!(worked_minutes(&[], at(12, 0), 0), 0);
    }

    #[test]
    fn single_card_counts_up_to_now() {
        assert_eq!(worked_minutes(&[at(9, 0)], at(10, 0), 0), 60);
    }

    #[test]
    fn single_card_deducts_auto_lunch() {
        assert_eq!(worked_minutes(&[at(9, 0)], at(17, 0), 60), 420);
    }

    #[test]
    fn auto_lunch_never_pushes_below_zero() {
        assert_eq!(worked_minutes(&[at(9, 0)], at(9, 20), 60), 0);
        assert_eq!(worked_minutes(&[at(9, 0), at(9, 30)], at(23, 0), 60), 0);
    }

    #[test]
    fn two_cards_close_the_interval() {
        assert_eq!(worked_minutes(&[at(9, 0), at(17, 30)], at(23, 0), 0), 510);
        assert_eq!(worked_minutes(&[at(9, 0), at(17, 30)], at(23, 0), 45), 465);
    }

    #[test]
    fn three_cards_skip_the_lunch_estimate() {
        // 09:00-13:00 worked, lunch, back at 14:00, still in at 19:00.
        let stamps = [at(9, 0), at(13, 0), at(14, 0)];
        assert_eq!(worked_minutes(&stamps, at(19, 0), 60), 540);
    }

    #[test]
    fn four_cards_sum_both_pairs() {
        let stamps = [at(9, 0), at(12, 0), at(13, 0), at(18, 0)];
        assert_eq!(worked_minutes(&stamps, at(23, 0), 60), 480);
    }

    #[test]
    fn five_cards_get_a_virtual_closing_card() {
        let stamps = [at(8, 0), at(10, 0), at(11, 0), at(13, 0), at(14, 0)];
        // 120 + 120 + (15:30 - 14:00)
        assert_eq!(worked_minutes(&stamps, at(15, 30), 60), 330);
    }

    #[test]
    fn pairing_rejects_odd_counts() {
        let err = paired_blocks(&[at(9, 0), at(12, 0), at(13, 0)]).unwrap_err();
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn blocks_and_longest() {
        let blocks = paired_blocks(&[at(9, 0), at(12, 0), at(13, 0), at(18, 0)]).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].minutes(), 180);
        assert_eq!(longest_block(&blocks), 300);
        assert_eq!(longest_block(&[]), 0);
    }

    #[test]
    fn break_gaps_exclude_the_morning_interval() {
        let stamps = [at(9, 0), at(12, 0), at(12, 20), at(18, 0)];
        assert_eq!(gaps_after_first(&stamps), vec![20, 340]);
        assert!(gaps_after_first(&[at(9, 0), at(17, 0)]).is_empty());
    }
}
