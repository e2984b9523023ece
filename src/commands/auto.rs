//! Computer plays a hand
//!
//! Runs the candidate search turn by turn until the hand is used up or no
//! playable word remains. Printing lives in the output module; this command
//! only produces the report.

use crate::core::Hand;
use crate::dictionary::WordIndex;
use crate::pool::WorkerPool;
use crate::scoring;
use crate::search::{CandidateSearch, SearchError};

/// One computer turn.
#[derive(Debug, Clone)]
pub struct Turn {
    /// The word the computer played.
    pub word: String,
    /// Points earned, including any full-hand bonus.
    pub score: u32,
    /// The hand as it stood before the play.
    pub hand_before: Hand,
}

/// Result of a full computer-played hand.
#[derive(Debug, Clone)]
pub struct PlayReport {
    pub turns: Vec<Turn>,
    pub total_score: u32,
    /// Letters the computer could not use.
    pub leftover: Hand,
}

/// Let the computer play `hand` to exhaustion.
///
/// # Errors
/// Propagates search failures; finding no playable word is the normal end of
/// the hand, not an error.
pub fn play_hand(
    pool: &WorkerPool,
    search: &CandidateSearch,
    index: &WordIndex,
    mut hand: Hand,
) -> Result<PlayReport, SearchError> {
    let mut turns = Vec::new();
    let mut total_score = 0;

    while hand.remaining() > 0 {
        let Some(word) = search.choose_word(pool, &hand, index, hand.remaining())? else {
            break;
        };
        let score = scoring::score(index, &word, hand.remaining()).unwrap_or(0);
        total_score += score;
        let next = hand.apply(&word);
        turns.push(Turn {
            word,
            score,
            hand_before: hand,
        });
        hand = next;
    }

    Ok(PlayReport {
        turns,
        total_score,
        leftover: hand,
    })
}
