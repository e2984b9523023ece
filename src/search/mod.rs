//! Parallel best-word search
//!
//! Scans the full index against a hand across the worker pool, collecting the
//! top candidates in a mutex-guarded [`Shortlist`], then picks the play with
//! a weighted draw skewed toward (but not locked to) the best rank. The
//! deliberate wobble keeps the computer player near-optimal rather than
//! perfect.

mod shortlist;

pub use shortlist::Shortlist;

use crate::core::Hand;
use crate::dictionary::WordIndex;
use crate::pool::WorkerPool;
use crate::scoring;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rayon::prelude::*;
use std::fmt;
use std::sync::Mutex;
use tracing::debug;

/// Number of ranked slots kept during a search.
pub const SHORTLIST_LEN: usize = 4;

/// Default rank weights: rank 0 is drawn 10% of the time, rank 1 30%,
/// rank 2 40%, rank 3 20%.
pub const DEFAULT_RANK_WEIGHTS: [u32; SHORTLIST_LEN] = [1, 3, 4, 2];

/// Search failure.
#[derive(Debug)]
pub enum SearchError {
    /// The pool deadline expired before every partition was scanned.
    TimedOut,
    /// The configured weight table cannot drive the rank draw.
    InvalidWeights,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimedOut => write!(f, "candidate search exceeded its deadline"),
            Self::InvalidWeights => write!(
                f,
                "rank weights must have one entry per shortlist rank, a non-zero \
                 total, and a non-zero weight for the best rank"
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// Parallel candidate search with a configurable rank-weight table.
#[derive(Debug, Clone)]
pub struct CandidateSearch {
    weights: WeightedIndex<u32>,
}

impl Default for CandidateSearch {
    fn default() -> Self {
        Self::with_weights(&DEFAULT_RANK_WEIGHTS).expect("default weights are valid")
    }
}

impl CandidateSearch {
    /// A search drawing ranks from a custom weight table, one weight per
    /// shortlist rank with the best rank first.
    ///
    /// # Errors
    /// Returns `SearchError::InvalidWeights` when the table does not have
    /// exactly [`SHORTLIST_LEN`] entries, sums to zero, or gives the best
    /// rank a zero weight (which could leave the draw with nothing to land
    /// on).
    pub fn with_weights(weights: &[u32]) -> Result<Self, SearchError> {
        if weights.len() != SHORTLIST_LEN || weights[0] == 0 {
            return Err(SearchError::InvalidWeights);
        }
        let weights = WeightedIndex::new(weights).map_err(|_| SearchError::InvalidWeights)?;
        Ok(Self { weights })
    }

    /// Choose a word playable from `hand`, or `None` when the dictionary
    /// holds no playable word (a normal end-of-hand signal, not an error).
    ///
    /// The index keys are partitioned across the worker pool; every worker
    /// validates its words against the hand, scores hits with `hand_len` as
    /// the pre-play hand length, and offers them to a shared shortlist under
    /// a single lock. The call blocks until all workers have joined, and must
    /// not be re-entered while in flight.
    ///
    /// The top shortlist rank always holds the best score found, but lower
    /// ranks (and therefore the exact word chosen) depend on worker timing
    /// and are not reproducible across runs, even for identical inputs.
    ///
    /// # Errors
    /// Returns `SearchError::TimedOut` if the pool deadline expires before
    /// the scan completes.
    pub fn choose_word(
        &self,
        pool: &WorkerPool,
        hand: &Hand,
        index: &WordIndex,
        hand_len: usize,
    ) -> Result<Option<String>, SearchError> {
        let clock = pool.deadline_clock();
        let shortlist = Mutex::new(Shortlist::new(SHORTLIST_LEN));

        pool.install(|| {
            index.entries().par_iter().try_for_each(|(word, entry)| {
                if clock.expired() {
                    return Err(SearchError::TimedOut);
                }
                if hand.is_valid_play(word, index) {
                    let score = scoring::score_entry(entry, hand_len);
                    shortlist
                        .lock()
                        .expect("search worker panicked holding the shortlist lock")
                        .offer(score, word);
                }
                Ok(())
            })
        })?;

        let shortlist = shortlist
            .into_inner()
            .expect("search worker panicked holding the shortlist lock");
        if let Some((score, word)) = shortlist.best() {
            debug!("best candidate '{word}' scores {score}");
        }
        Ok(self.pick(&shortlist, &mut rand::rng()))
    }

    /// Weighted draw over the shortlist ranks, resampling until it lands on
    /// an occupied rank. Occupied ranks form a prefix and the best rank has a
    /// non-zero weight, so the draw terminates whenever any candidate exists.
    fn pick<R: Rng + ?Sized>(&self, shortlist: &Shortlist, rng: &mut R) -> Option<String> {
        shortlist.best()?;
        loop {
            let rank = self.weights.sample(rng);
            if let Some((_, word)) = shortlist.get(rank) {
                return Some(word.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io;
    use std::time::Duration;

    fn tiny_index(pool: &WorkerPool) -> WordIndex {
        let lines = ["cat", "cats", "act", "tacos"]
            .map(|w| Ok::<_, io::Error>(w.to_string()));
        WordIndex::build(pool, lines, 5).unwrap()
    }

    #[test]
    fn chosen_word_is_always_playable() {
        let pool = WorkerPool::new(4).unwrap();
        let index = tiny_index(&pool);
        let hand = Hand::from_word("cats");
        let search = CandidateSearch::default();

        for _ in 0..20 {
            let word = search
                .choose_word(&pool, &hand, &index, hand.remaining())
                .unwrap()
                .expect("the hand has playable words");
            assert!(hand.is_valid_play(&word, &index));
        }
    }

    #[test]
    fn exhausted_hand_yields_no_candidate() {
        let pool = WorkerPool::new(4).unwrap();
        let index = tiny_index(&pool);
        let hand = Hand::from_word("s");
        let search = CandidateSearch::default();

        let result = search
            .choose_word(&pool, &hand, &index, hand.remaining())
            .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn best_only_weights_always_choose_the_maximum() {
        let pool = WorkerPool::new(4).unwrap();
        let index = tiny_index(&pool);
        let hand = Hand::from_word("cats");
        // all weight on rank 0, which is guaranteed to hold the top score
        let search = CandidateSearch::with_weights(&[1, 0, 0, 0]).unwrap();

        for _ in 0..10 {
            let word = search
                .choose_word(&pool, &hand, &index, hand.remaining())
                .unwrap();
            // "cats" scores 24 + 50 full-hand bonus, beating cat/act at 15
            assert_eq!(word.as_deref(), Some("cats"));
        }
    }

    #[test]
    fn weight_table_must_match_shortlist() {
        assert!(matches!(
            CandidateSearch::with_weights(&[1, 2]),
            Err(SearchError::InvalidWeights)
        ));
        assert!(matches!(
            CandidateSearch::with_weights(&[0, 0, 0, 0]),
            Err(SearchError::InvalidWeights)
        ));
        assert!(matches!(
            CandidateSearch::with_weights(&[0, 3, 4, 2]),
            Err(SearchError::InvalidWeights)
        ));
        assert!(CandidateSearch::with_weights(&[1, 3, 4, 2]).is_ok());
    }

    #[test]
    fn pick_skips_empty_ranks() {
        let search = CandidateSearch::default();
        let mut shortlist = Shortlist::new(SHORTLIST_LEN);
        shortlist.offer(30, "only");

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(search.pick(&shortlist, &mut rng).as_deref(), Some("only"));
        }
    }

    #[test]
    fn pick_on_empty_shortlist_is_none() {
        let search = CandidateSearch::default();
        let shortlist = Shortlist::new(SHORTLIST_LEN);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(search.pick(&shortlist, &mut rng), None);
    }

    #[test]
    fn pick_spreads_over_occupied_ranks() {
        let search = CandidateSearch::default();
        let mut shortlist = Shortlist::new(SHORTLIST_LEN);
        shortlist.offer(40, "a");
        shortlist.offer(30, "b");
        shortlist.offer(20, "c");
        shortlist.offer(10, "d");

        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(search.pick(&shortlist, &mut rng).unwrap());
        }
        // every rank has positive default weight, so all four words show up
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn expired_deadline_fails_as_timed_out() {
        let no_deadline = WorkerPool::new(2).unwrap();
        let index = tiny_index(&no_deadline);
        let pool = WorkerPool::with_deadline(2, Some(Duration::ZERO)).unwrap();
        let hand = Hand::from_word("cats");
        let search = CandidateSearch::default();

        let result = search.choose_word(&pool, &hand, &index, hand.remaining());
        assert!(matches!(result, Err(SearchError::TimedOut)));
    }
}
