//! Indexed word dictionary
//!
//! Builds the word → (base score, length) index by fanning admitted words out
//! across the shared worker pool. The index is written only during
//! construction and is read-only afterwards, so gameplay reads need no
//! locking.

use crate::core::letters;
use crate::pool::WorkerPool;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::io;
use tracing::debug;

/// Precomputed entry for one dictionary word.
///
/// Both fields are derived from the word at insertion time and never
/// recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// Sum of the word's letter values multiplied by its length.
    pub base_score: u32,
    /// Word length in letters.
    pub length: usize,
}

impl IndexEntry {
    fn compute(word: &str) -> Self {
        Self {
            base_score: letters::base_score(word),
            length: word.len(),
        }
    }
}

/// Dictionary build failure.
#[derive(Debug)]
pub enum BuildError {
    /// The raw word source could not be read.
    SourceUnavailable(io::Error),
    /// The pool deadline expired before the index was fully populated.
    TimedOut,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable(e) => write!(f, "word source unavailable: {e}"),
            Self::TimedOut => write!(f, "dictionary build exceeded its deadline"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceUnavailable(e) => Some(e),
            Self::TimedOut => None,
        }
    }
}

/// Immutable word index built once per session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordIndex {
    entries: FxHashMap<String, IndexEntry>,
}

impl WordIndex {
    /// Build an index from a raw line stream.
    ///
    /// Each line is trimmed and lower-cased; lines that normalize to the
    /// empty string, contain anything other than letters, or exceed
    /// `max_len` letters are silently discarded. Entry computation for the
    /// admitted words runs on the worker pool, and the call blocks until
    /// every worker has finished.
    ///
    /// # Errors
    /// - `BuildError::SourceUnavailable` if the line stream yields a read
    ///   error.
    /// - `BuildError::TimedOut` if the pool deadline expires mid-build.
    ///
    /// # Examples
    /// ```
    /// use wordplay::dictionary::WordIndex;
    /// use wordplay::pool::WorkerPool;
    ///
    /// let pool = WorkerPool::new(4).unwrap();
    /// let lines = ["cat", "cats", "act", "tacos"]
    ///     .map(|w| Ok::<_, std::io::Error>(w.to_string()));
    ///
    /// let index = WordIndex::build(&pool, lines, 5).unwrap();
    /// assert_eq!(index.len(), 4);
    /// assert_eq!(index.get("cats").unwrap().base_score, 24);
    /// ```
    pub fn build<I>(pool: &WorkerPool, lines: I, max_len: usize) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let clock = pool.deadline_clock();

        let mut admitted = Vec::new();
        for line in lines {
            let line = line.map_err(BuildError::SourceUnavailable)?;
            let word = line.trim().to_lowercase();
            if word.is_empty()
                || word.len() > max_len
                || !word.bytes().all(|b| b.is_ascii_lowercase())
            {
                continue;
            }
            admitted.push(word);
        }
        debug!(
            "{} words admitted from source (max length {})",
            admitted.len(),
            max_len
        );

        let entries = pool.install(|| {
            admitted
                .into_par_iter()
                .map(|word| {
                    if clock.expired() {
                        return Err(BuildError::TimedOut);
                    }
                    let entry = IndexEntry::compute(&word);
                    Ok((word, entry))
                })
                .collect::<Result<FxHashMap<String, IndexEntry>, BuildError>>()
        })?;

        debug!("dictionary index built with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Look up the entry for a word.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&IndexEntry> {
        self.entries.get(word)
    }

    /// Whether the word is in the dictionary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of indexed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All indexed words of exactly `length` letters.
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(_, entry)| entry.length == length)
            .map(|(word, _)| word.as_str())
    }

    /// Full entry map, for the parallel candidate scan.
    pub(crate) fn entries(&self) -> &FxHashMap<String, IndexEntry> {
        &self.entries
    }
}
