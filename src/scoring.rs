//! Play-time scoring
//!
//! A played word is worth its precomputed base score, plus a bonus when the
//! play consumes every letter that remained in the hand.

use crate::dictionary::{IndexEntry, WordIndex};

/// Bonus awarded when a play uses the whole remaining hand.
pub const FULL_HAND_BONUS: u32 = 50;

/// Score for playing `word` when `hand_len` letters remained in the hand.
///
/// `hand_len` must be the hand length *before* the play is applied. Returns
/// `None` for words not present in the index; callers are expected to have
/// validated the play first.
///
/// # Examples
/// ```
/// use wordplay::dictionary::WordIndex;
/// use wordplay::pool::WorkerPool;
/// use wordplay::scoring::score;
///
/// let pool = WorkerPool::new(2).unwrap();
/// let lines = ["cats"].map(|w| Ok::<_, std::io::Error>(w.to_string()));
/// let index = WordIndex::build(&pool, lines, 5).unwrap();
///
/// assert_eq!(score(&index, "cats", 7), Some(24));
/// // playing the whole hand earns the bonus
/// assert_eq!(score(&index, "cats", 4), Some(74));
/// ```
#[must_use]
pub fn score(index: &WordIndex, word: &str, hand_len: usize) -> Option<u32> {
    index.get(word).map(|entry| score_entry(entry, hand_len))
}

/// Score an already-resolved index entry against the pre-play hand length.
#[inline]
#[must_use]
pub fn score_entry(entry: &IndexEntry, hand_len: usize) -> u32 {
    if entry.length == hand_len {
        entry.base_score + FULL_HAND_BONUS
    } else {
        entry.base_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::WorkerPool;
    use std::io;

    fn tiny_index() -> WordIndex {
        let pool = WorkerPool::new(2).unwrap();
        let lines = ["cat", "cats", "act", "tacos"]
            .map(|w| Ok::<_, io::Error>(w.to_string()));
        WordIndex::build(&pool, lines, 5).unwrap()
    }

    #[test]
    fn base_score_without_bonus() {
        let index = tiny_index();
        assert_eq!(score(&index, "cat", 7), Some(15));
        assert_eq!(score(&index, "cats", 7), Some(24));
        assert_eq!(score(&index, "tacos", 7), Some(35));
    }

    #[test]
    fn bonus_applies_only_on_exact_hand_length() {
        let index = tiny_index();
        assert_eq!(score(&index, "cats", 4), Some(74));
        assert_eq!(score(&index, "cats", 5), Some(24));
        assert_eq!(score(&index, "cats", 3), Some(24));
    }

    #[test]
    fn unindexed_word_scores_none() {
        let index = tiny_index();
        assert_eq!(score(&index, "dog", 3), None);
    }

    #[test]
    fn score_entry_matches_lookup() {
        let index = tiny_index();
        let entry = index.get("tacos").unwrap();
        assert_eq!(score_entry(entry, 5), 85);
        assert_eq!(score_entry(entry, 6), 35);
    }
}
