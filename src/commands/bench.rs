//! Benchmark command
//!
//! Deals many hands and lets the computer play each one, aggregating scores.

use crate::commands::auto;
use crate::core::Hand;
use crate::dictionary::WordIndex;
use crate::pool::WorkerPool;
use crate::search::CandidateSearch;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a benchmark run.
#[derive(Debug)]
pub struct BenchResult {
    pub hands: usize,
    pub total_score: u64,
    pub average_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    /// Words played across all hands.
    pub total_words: usize,
    /// Hands the computer emptied completely.
    pub cleared: usize,
    pub duration: Duration,
}

/// Auto-play `hands` freshly dealt hands of `hand_size` letters.
///
/// # Errors
/// Returns a message if dealing fails (no words of the requested length) or
/// a search fails.
pub fn run_bench(
    pool: &WorkerPool,
    search: &CandidateSearch,
    index: &WordIndex,
    hand_size: usize,
    hands: usize,
) -> Result<BenchResult, String> {
    let pb = ProgressBar::new(hands as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_score = 0u64;
    let mut min_score = u32::MAX;
    let mut max_score = 0u32;
    let mut total_words = 0usize;
    let mut cleared = 0usize;

    for played in 0..hands {
        let hand = Hand::deal(index, hand_size).map_err(|e| e.to_string())?;
        let report = auto::play_hand(pool, search, index, hand).map_err(|e| e.to_string())?;

        total_score += u64::from(report.total_score);
        min_score = min_score.min(report.total_score);
        max_score = max_score.max(report.total_score);
        total_words += report.turns.len();
        if report.leftover.is_empty() {
            cleared += 1;
        }

        if played % 10 == 0 && played > 0 {
            let avg = total_score as f64 / played as f64;
            pb.set_message(format!("Avg: {avg:.1}"));
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    Ok(BenchResult {
        hands,
        total_score,
        average_score: if hands > 0 {
            total_score as f64 / hands as f64
        } else {
            0.0
        },
        min_score: if hands > 0 { min_score } else { 0 },
        max_score,
        total_words,
        cleared,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn tiny_index(pool: &WorkerPool) -> WordIndex {
        let lines = ["cat", "cats", "act", "tacos"]
            .map(|w| Ok::<_, io::Error>(w.to_string()));
        WordIndex::build(pool, lines, 5).unwrap()
    }

    #[test]
    fn bench_runs_and_aggregates() {
        let pool = WorkerPool::new(2).unwrap();
        let index = tiny_index(&pool);
        let search = CandidateSearch::default();

        let result = run_bench(&pool, &search, &index, 4, 3).unwrap();

        assert_eq!(result.hands, 3);
        assert!(result.total_words >= 3);
        assert!(result.min_score <= result.max_score);
        assert!(result.average_score >= f64::from(result.min_score));
        assert!(result.average_score <= f64::from(result.max_score));
    }

    #[test]
    fn bench_fails_on_undealable_length() {
        let pool = WorkerPool::new(2).unwrap();
        let index = tiny_index(&pool);
        let search = CandidateSearch::default();

        assert!(run_bench(&pool, &search, &index, 9, 1).is_err());
    }

    #[test]
    fn bench_with_zero_hands() {
        let pool = WorkerPool::new(2).unwrap();
        let index = tiny_index(&pool);
        let search = CandidateSearch::default();

        let result = run_bench(&pool, &search, &index, 4, 0).unwrap();
        assert_eq!(result.hands, 0);
        assert_eq!(result.total_score, 0);
        assert_eq!(result.min_score, 0);
    }
}
