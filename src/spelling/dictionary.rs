//! Word dictionary backing the suggestion engine.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;

use crate::error::Result;

/// The reference set of correctly spelled words.
///
/// Loaded once at startup and immutable afterwards, so it can be shared
/// freely across callers. Lookups are exact and case-sensitive; the
/// single-letter words "i" and "a" are always accepted even when the
/// loaded set does not contain them.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: AHashSet<String>,
}

impl Dictionary {
    /// Load a dictionary from a text file with one word per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a dictionary from any buffered line-oriented source.
    ///
    /// Duplicate lines collapse under set semantics. Blank lines are kept
    /// as a literal empty-string entry; input tokens are never empty, so
    /// that entry is inert during checking.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = AHashSet::new();
        for line in reader.lines() {
            words.insert(line?);
        }
        Ok(Dictionary { words })
    }

    /// Check whether a word is considered correctly spelled.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || word == "i" || word == "a"
    }

    /// Number of loaded entries, not counting the built-in exceptions.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no loaded entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the loaded words. The order is unspecified; calling
    /// again starts a fresh pass.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Dictionary {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}
