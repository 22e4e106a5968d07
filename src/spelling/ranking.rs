//! Bounded best-N collection of scored correction candidates.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A dictionary word paired with its similarity score for one suggestion
/// request. Instances live only inside the [`WordRanking`] that holds
/// them until it is drained.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    /// The candidate word.
    pub word: String,
    /// Its similarity score against the word under test.
    pub score: f64,
}

impl ScoredWord {
    /// Create a new scored candidate.
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        ScoredWord {
            word: word.into(),
            score,
        }
    }

    fn render_debug(&self) -> String {
        format!("{} - {:.2}", self.word, self.score)
    }
}

impl Eq for ScoredWord {}

impl Ord for ScoredWord {
    fn cmp(&self, other: &Self) -> Ordering {
        // Score ascending; on ties the lexicographically later word sorts
        // smaller, so it is evicted before earlier words.
        self.score
            .partial_cmp(&other.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for ScoredWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority structure that keeps at most N highest-scoring candidates,
/// evicting the current minimum whenever the cap is exceeded.
///
/// Draining is single-use per request: it empties the structure and
/// yields the retained words best-first.
#[derive(Debug)]
pub struct WordRanking {
    heap: BinaryHeap<Reverse<ScoredWord>>,
    capacity: Option<usize>,
}

impl WordRanking {
    /// Create an unbounded ranking.
    pub fn new() -> Self {
        WordRanking {
            heap: BinaryHeap::new(),
            capacity: None,
        }
    }

    /// Create a ranking that retains at most `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        WordRanking {
            heap: BinaryHeap::with_capacity(capacity + 1),
            capacity: Some(capacity),
        }
    }

    /// Insert a candidate, then evict the minimum while over capacity.
    pub fn insert(&mut self, candidate: ScoredWord) {
        self.heap.push(Reverse(candidate));
        if let Some(capacity) = self.capacity {
            while self.heap.len() > capacity {
                self.heap.pop();
            }
        }
    }

    /// Number of candidates currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if no candidates are held.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove all candidates and return their words best-first: highest
    /// score first, ties in ascending word order.
    pub fn drain(&mut self) -> Vec<String> {
        self.drain_map(|candidate| candidate.word)
    }

    /// Like [`drain`](Self::drain), with each entry formatted as
    /// `"word - score"` (score to two decimal places).
    pub fn drain_debug(&mut self) -> Vec<String> {
        self.drain_map(|candidate| candidate.render_debug())
    }

    fn drain_map<F>(&mut self, mut f: F) -> Vec<String>
    where
        F: FnMut(ScoredWord) -> String,
    {
        let mut result = Vec::with_capacity(self.heap.len());
        while let Some(Reverse(candidate)) = self.heap.pop() {
            result.push(f(candidate));
        }
        // The heap pops worst-first; flip so the best word is in front.
        result.reverse();
        result
    }
}

impl Default for WordRanking {
    fn default() -> Self {
        Self::new()
    }
}
