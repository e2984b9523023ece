//! Hand of letters
//!
//! A multiset of lowercase letters dealt from the dictionary. Playing a word
//! never mutates the hand it was played from; `apply` returns the reduced
//! hand as a new value.

use crate::dictionary::WordIndex;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;

/// Deal failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    /// No dictionary entry has the requested length.
    NoWordsOfLength(usize),
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsOfLength(len) => {
                write!(f, "no dictionary word has exactly {len} letters")
            }
        }
    }
}

impl std::error::Error for DealError {}

/// Multiset of letters available to play.
///
/// Letters with a count of zero are removed from the map, never retained as
/// zero entries, so the sum of counts always equals [`Hand::remaining`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    counts: FxHashMap<u8, u8>,
}

impl Hand {
    /// The letter-frequency multiset of a word.
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::Hand;
    ///
    /// let hand = Hand::from_word("cats");
    /// assert_eq!(hand.count(b'c'), 1);
    /// assert_eq!(hand.remaining(), 4);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for letter in word.bytes() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Deal a hand from the letters of a word chosen uniformly at random
    /// among all index entries of exactly `length` letters.
    ///
    /// # Errors
    /// Returns `DealError::NoWordsOfLength` when no entry matches.
    pub fn deal(index: &WordIndex, length: usize) -> Result<Self, DealError> {
        Self::deal_with(index, length, &mut rand::rng())
    }

    /// `deal` with an explicit random source.
    ///
    /// # Errors
    /// Returns `DealError::NoWordsOfLength` when no entry matches.
    pub fn deal_with<R: Rng + ?Sized>(
        index: &WordIndex,
        length: usize,
        rng: &mut R,
    ) -> Result<Self, DealError> {
        let candidates: Vec<&str> = index.words_of_length(length).collect();
        let word = candidates
            .choose(rng)
            .ok_or(DealError::NoWordsOfLength(length))?;
        Ok(Self::from_word(word))
    }

    /// Whether `word` is in the dictionary and every one of its letters is
    /// available in this hand in sufficient quantity. Mutates nothing.
    #[must_use]
    pub fn is_valid_play(&self, word: &str, index: &WordIndex) -> bool {
        if !index.contains(word) {
            return false;
        }
        let needed = Self::from_word(word);
        needed
            .counts
            .iter()
            .all(|(letter, count)| self.count(*letter) >= *count)
    }

    /// The hand left after playing `word`: each letter's count is reduced by
    /// the letter's frequency in `word`, and letters reaching zero are
    /// removed. The caller must have validated the play with
    /// [`Hand::is_valid_play`]; counts never go below zero regardless.
    #[must_use]
    pub fn apply(&self, word: &str) -> Self {
        let mut counts = self.counts.clone();
        for letter in word.bytes() {
            if let Some(count) = counts.get_mut(&letter) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    counts.remove(&letter);
                }
            }
        }
        Self { counts }
    }

    /// Copies of `letter` currently held.
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters left in the hand.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.counts.values().map(|&count| usize::from(count)).sum()
    }

    /// Whether the hand has been played out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The held letters flattened out, one byte per tile, in sorted order.
    #[must_use]
    pub fn tiles(&self) -> Vec<u8> {
        let mut tiles: Vec<u8> = self
            .counts
            .iter()
            .flat_map(|(&letter, &count)| std::iter::repeat_n(letter, usize::from(count)))
            .collect();
        tiles.sort_unstable();
        tiles
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for tile in self.tiles() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", tile as char)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::WorkerPool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io;

    fn tiny_index() -> WordIndex {
        let pool = WorkerPool::new(2).unwrap();
        let lines = ["cat", "cats", "act", "tacos"]
            .map(|w| Ok::<_, io::Error>(w.to_string()));
        WordIndex::build(&pool, lines, 5).unwrap()
    }

    #[test]
    fn from_word_counts_letters() {
        let hand = Hand::from_word("cats");
        assert_eq!(hand.count(b'c'), 1);
        assert_eq!(hand.count(b'a'), 1);
        assert_eq!(hand.count(b't'), 1);
        assert_eq!(hand.count(b's'), 1);
        assert_eq!(hand.count(b'z'), 0);
        assert_eq!(hand.remaining(), 4);
    }

    #[test]
    fn from_word_counts_duplicates() {
        let hand = Hand::from_word("added");
        assert_eq!(hand.count(b'd'), 3);
        assert_eq!(hand.count(b'a'), 1);
        assert_eq!(hand.count(b'e'), 1);
        assert_eq!(hand.remaining(), 5);
    }

    #[test]
    fn deal_returns_the_only_matching_word() {
        let index = tiny_index();
        // "cats" is the only four-letter entry
        let hand = Hand::deal(&index, 4).unwrap();
        assert_eq!(hand, Hand::from_word("cats"));
    }

    #[test]
    fn deal_fails_when_no_length_matches() {
        let index = tiny_index();
        assert_eq!(
            Hand::deal(&index, 9),
            Err(DealError::NoWordsOfLength(9))
        );
    }

    #[test]
    fn deal_with_seeded_rng_picks_a_member() {
        let index = tiny_index();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let hand = Hand::deal_with(&index, 3, &mut rng).unwrap();
            // both three-letter words are anagrams of each other
            assert_eq!(hand, Hand::from_word("cat"));
        }
    }

    #[test]
    fn valid_play_needs_membership_and_letters() {
        let index = tiny_index();
        let hand = Hand::from_word("cats");

        assert!(hand.is_valid_play("cat", &index));
        assert!(hand.is_valid_play("act", &index));
        assert!(hand.is_valid_play("cats", &index));
        // indexed but needs an o the hand lacks
        assert!(!hand.is_valid_play("tacos", &index));
        // letters available but not a dictionary word
        assert!(!hand.is_valid_play("tac", &index));
    }

    #[test]
    fn valid_play_respects_duplicate_counts() {
        let index = tiny_index();
        let hand = Hand::from_word("cat");
        // "cats" needs an s the hand does not hold
        assert!(!hand.is_valid_play("cats", &index));
    }

    #[test]
    fn apply_consumes_letters() {
        let hand = Hand::from_word("cats");
        let rest = hand.apply("cat");

        assert_eq!(rest, Hand::from_word("s"));
        assert_eq!(rest.remaining(), 1);
        // the original is untouched
        assert_eq!(hand.remaining(), 4);
    }

    #[test]
    fn apply_removes_zeroed_letters() {
        let hand = Hand::from_word("cats");
        let rest = hand.apply("cats");
        assert!(rest.is_empty());
        assert_eq!(rest.count(b'c'), 0);
    }

    #[test]
    fn applied_word_cannot_be_replayed_without_surplus() {
        let index = tiny_index();
        let hand = Hand::from_word("cats");
        let rest = hand.apply("cat");
        assert!(!rest.is_valid_play("cat", &index));
    }

    #[test]
    fn remaining_drops_by_word_length() {
        let hand = Hand::from_word("tacos");
        let rest = hand.apply("cat");
        assert_eq!(rest.remaining(), hand.remaining() - 3);
    }

    #[test]
    fn tiles_flatten_the_multiset() {
        let hand = Hand::from_word("added");
        assert_eq!(hand.tiles(), b"addde".to_vec());
        assert_eq!(format!("{hand}"), "a d d d e");
    }
}
