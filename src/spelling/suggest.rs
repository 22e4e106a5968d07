//! Suggestion generation for misspelled words.

use serde::{Deserialize, Serialize};

use crate::error::{RespellError, Result};
use crate::spelling::dictionary::Dictionary;
use crate::spelling::ranking::{ScoredWord, WordRanking};
use crate::spelling::similarity::{
    common_count, common_percent, similarity_metric, within_length_diff,
};

/// Configuration for suggestion generation.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Maximum length difference between the word and a candidate.
    pub max_length_diff: usize,
    /// Minimum character-overlap ratio a candidate must reach.
    pub min_common_percent: f64,
    /// Cap on the number of suggestions; `None` keeps every match.
    pub max_suggestions: Option<usize>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            max_length_diff: 2,
            min_common_percent: 0.7,
            max_suggestions: Some(10),
        }
    }
}

/// Main word suggestion engine.
///
/// Owns the dictionary and answers two questions: "is this word valid?"
/// and "what are the top corrections for it?". Every operation is a
/// blocking, self-contained computation over the read-only dictionary.
pub struct SuggestionEngine {
    dictionary: Dictionary,
    config: SuggestConfig,
}

impl SuggestionEngine {
    /// Create a new engine with the default configuration.
    pub fn new(dictionary: Dictionary) -> Self {
        SuggestionEngine {
            dictionary,
            config: SuggestConfig::default(),
        }
    }

    /// Create a new engine with a custom configuration.
    pub fn with_config(dictionary: Dictionary, config: SuggestConfig) -> Self {
        SuggestionEngine { dictionary, config }
    }

    /// Get the underlying dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Get the active configuration.
    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Check a word against the dictionary.
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Score one candidate, returning `None` when a filter rejects it.
    /// The length filter runs first so most candidates skip the overlap
    /// computation entirely.
    fn word_score(&self, word: &str, candidate: &str) -> Option<ScoredWord> {
        if !within_length_diff(word, candidate, self.config.max_length_diff) {
            return None;
        }
        if common_percent(word, candidate) < self.config.min_common_percent {
            return None;
        }
        Some(ScoredWord::new(
            candidate,
            similarity_metric(word, candidate),
        ))
    }

    /// Scan the whole dictionary and collect qualifying candidates. Cost
    /// is linear in the dictionary size; there is no index or early exit.
    fn rank_candidates(&self, word: &str) -> WordRanking {
        let mut ranking = match self.config.max_suggestions {
            Some(n) => WordRanking::with_capacity(n),
            None => WordRanking::new(),
        };
        for candidate in self.dictionary.words() {
            if let Some(scored) = self.word_score(word, candidate) {
                ranking.insert(scored);
            }
        }
        ranking
    }

    /// Ranked corrections for a misspelled word, best match first.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.rank_candidates(word).drain()
    }

    /// Like [`suggest`](Self::suggest), with each entry annotated as
    /// `"word - score"` for inspecting the ranking.
    pub fn suggest_debug(&self, word: &str) -> Vec<String> {
        self.rank_candidates(word).drain_debug()
    }

    /// From `candidates`, the words sharing at least `min_common` distinct
    /// characters with `word`, in ascending lexicographic order.
    ///
    /// This is an unscored mode: every match enters an unbounded ranking
    /// with score zero, so ordering collapses to the word tie-break.
    pub fn words_with_common_letters(
        &self,
        word: &str,
        candidates: &[String],
        min_common: usize,
    ) -> Vec<String> {
        let mut ranking = WordRanking::new();
        for candidate in candidates {
            if common_count(word, candidate) >= min_common {
                ranking.insert(ScoredWord::new(candidate.clone(), 0.0));
            }
        }
        ranking.drain()
    }
}

/// A flagged word together with its ranked correction candidates.
///
/// Built once per flagged word and consumed by the interactive layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The word that failed the dictionary check.
    pub word: String,
    /// Candidate corrections, best match first.
    pub candidates: Vec<String>,
}

impl Suggestion {
    /// Create a new suggestion result.
    pub fn new(word: impl Into<String>, candidates: Vec<String>) -> Self {
        Suggestion {
            word: word.into(),
            candidates,
        }
    }

    /// Number of candidate corrections.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Candidate at `index`, or `InvalidSuggestionIndex` when out of
    /// bounds.
    pub fn candidate(&self, index: usize) -> Result<&str> {
        self.candidates
            .get(index)
            .map(String::as_str)
            .ok_or(RespellError::InvalidSuggestionIndex {
                index,
                count: self.candidates.len(),
            })
    }

    /// Render the candidates as a 1-indexed list, one per line.
    pub fn render_list(&self) -> String {
        render_numbered(&self.candidates)
    }
}

/// Render a word list as numbered lines in the form `" 1. word"`, with no
/// trailing newline. An empty list renders as an empty string.
pub fn render_numbered(words: &[String]) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| format!("{:2}. {}", i + 1, word))
        .collect::<Vec<_>>()
        .join("\n")
}
