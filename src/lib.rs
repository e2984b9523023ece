//! Wordplay
//!
//! A Scrabble-scored word game engine: the dictionary is indexed in parallel
//! across a shared worker pool, a hand of letters is dealt from it, and a
//! computer player picks near-optimal words with a parallel shortlist search.
//!
//! # Quick Start
//!
//! ```rust
//! use wordplay::core::Hand;
//! use wordplay::dictionary::WordIndex;
//! use wordplay::pool::WorkerPool;
//! use wordplay::search::CandidateSearch;
//!
//! let pool = WorkerPool::new(4).unwrap();
//! let lines = ["cat", "cats", "act", "tacos"]
//!     .map(|w| Ok::<_, std::io::Error>(w.to_string()));
//! let index = WordIndex::build(&pool, lines, 5).unwrap();
//!
//! // "cats" is the only four-letter word, so the hand is its letters
//! let hand = Hand::deal(&index, 4).unwrap();
//!
//! let search = CandidateSearch::default();
//! let word = search
//!     .choose_word(&pool, &hand, &index, hand.remaining())
//!     .unwrap();
//! assert!(word.is_some());
//! ```

// Core domain types
pub mod core;

// Concurrent dictionary index
pub mod dictionary;

// Shared worker pool
pub mod pool;

// Play-time scoring
pub mod scoring;

// Parallel candidate search
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
