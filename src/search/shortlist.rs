//! Ranked candidate shortlist
//!
//! Fixed-capacity top-K structure shared by the search workers. A candidate
//! displaces the first rank (best first) whose held score it strictly beats,
//! overwriting that single slot; nothing shifts or re-sorts. Rank 0 always
//! ends up holding the highest score offered, while the exact contents of
//! the lower ranks depend on offer arrival order, so under concurrent offers
//! they are not reproducible across runs.

/// Fixed-size ranked list of `(score, word)` candidates, best rank first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortlist {
    slots: Vec<Option<(u32, String)>>,
}

impl Shortlist {
    /// An empty shortlist with `capacity` ranked slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Offer a candidate. It overwrites the first rank whose held score is
    /// strictly lower (empty slots hold score 0); if every rank holds an
    /// equal-or-higher score the candidate is dropped. The displaced entry is
    /// discarded, not shifted down.
    pub fn offer(&mut self, score: u32, word: &str) {
        for slot in &mut self.slots {
            let held = slot.as_ref().map_or(0, |(score, _)| *score);
            if score > held {
                *slot = Some((score, word.to_string()));
                return;
            }
        }
    }

    /// The candidate held at `rank`, if any.
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<(u32, &str)> {
        self.slots
            .get(rank)?
            .as_ref()
            .map(|(score, word)| (*score, word.as_str()))
    }

    /// The best-ranked candidate, if any was offered.
    #[must_use]
    pub fn best(&self) -> Option<(u32, &str)> {
        self.get(0)
    }

    /// Number of ranked slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether no candidate has been offered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best().is_none()
    }
}
