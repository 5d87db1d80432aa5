//! Parrot vocabulary with normalization on construction.

use std::collections::HashSet;

/// Reply when the parrot has no words at all.
pub const SILENCE: &str = "(silence)";
/// Reply when the requested word index is out of range.
pub const UNKNOWN_WORD: &str = "(doesn't know this word)";

/// Ordered list of words a parrot knows.
///
/// # Invariants
/// - Every entry is trimmed and non-empty.
/// - No two entries are equal ignoring case; the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Builds a normalized vocabulary from raw input words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .filter_map(|word| {
                let trimmed = word.as_ref().trim();
                if trimmed.is_empty() || !seen.insert(trimmed.to_lowercase()) {
                    return None;
                }
                Some(trimmed.to_string())
            })
            .collect();
        Self { words }
    }

    /// Returns the word at `index`, or a fixed reply when there is none.
    pub fn speak(&self, index: usize) -> &str {
        if self.words.is_empty() {
            return SILENCE;
        }
        self.words
            .get(index)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_WORD)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
