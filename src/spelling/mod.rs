//! Dictionary-backed spelling correction on top of the edit distance.
//!
//! The dictionary is an explicitly constructed, immutable value owned by the
//! caller and passed by reference into every query.

use std::collections::BTreeSet;
use std::io::BufRead;

use crate::align::align_quadratic;
use crate::AlignError;

/// Tuning knobs for suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellConfig {
    /// Largest distance a suggestion may have.
    pub max_distance: usize,
}

impl Default for SpellConfig {
    fn default() -> Self {
        Self { max_distance: 5 }
    }
}

impl SpellConfig {
    /// Set the largest accepted distance.
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }
}

/// Closest dictionary word for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Suggested word.
    pub word: String,
    /// Its edit distance to the query.
    pub distance: usize,
}

/// A misspelled word of the input text with its replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// Word as it appeared in the text.
    pub original: String,
    /// Suggested replacement.
    pub suggestion: Suggestion,
}

/// Immutable set of known words, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// Build from an iterator of words; blank entries are skipped.
    pub fn from_words<I>(words: I) -> Result<Self, AlignError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(AlignError::EmptyDictionary);
        }
        tracing::debug!(words = words.len(), "dictionary loaded");
        Ok(Self { words })
    }

    /// Build from a reader holding one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> anyhow::Result<Self> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_words(lines)?)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Nearest word within `config.max_distance`.
    ///
    /// Words are scanned in lexicographic order and only a strictly smaller
    /// distance replaces the current best, so ties resolve to the smallest
    /// word. The scan stops at the first exact match.
    pub fn nearest(&self, word: &str, config: &SpellConfig) -> Option<Suggestion> {
        let query: Vec<char> = word.to_lowercase().chars().collect();
        let mut best: Option<(&str, usize)> = None;

        for candidate in &self.words {
            let symbols: Vec<char> = candidate.chars().collect();
            let distance = align_quadratic(&query, &symbols).distance;
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((candidate.as_str(), distance));
            }
            if distance == 0 {
                break;
            }
        }

        best.filter(|&(_, d)| d <= config.max_distance)
            .map(|(w, distance)| Suggestion {
                word: w.to_string(),
                distance,
            })
    }
}

/// Suggest replacements for every unknown whitespace-separated word of `text`.
pub fn spell_check(text: &str, dictionary: &Dictionary, config: &SpellConfig) -> Vec<Correction> {
    text.split_whitespace()
        .filter(|w| !dictionary.contains(w))
        .filter_map(|w| {
            dictionary.nearest(w, config).map(|suggestion| Correction {
                original: w.to_string(),
                suggestion,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["apple", "banana", "orange", "grape", "Lemon"]).unwrap()
    }

    #[test]
    fn rejects_empty_word_list() {
        let err = Dictionary::from_words(["  ", ""]).unwrap_err();
        assert!(matches!(err, AlignError::EmptyDictionary));
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dict = dictionary();
        assert!(dict.contains("LEMON"));
        assert!(dict.contains("apple"));
        assert!(!dict.contains("pear"));
        assert_eq!(dict.len(), 5);
    }

    #[test]
    fn nearest_prefers_smallest_distance() {
        let dict = dictionary();
        let suggestion = dict.nearest("aple", &SpellConfig::default()).unwrap();
        assert_eq!(suggestion.word, "apple");
        assert_eq!(suggestion.distance, 1);
    }

    #[test]
    fn nearest_respects_max_distance() {
        let dict = dictionary();
        let strict = SpellConfig::default().with_max_distance(1);
        assert!(dict.nearest("xyzxyzxyz", &strict).is_none());
    }

    #[test]
    fn ties_resolve_lexicographically() {
        let dict = Dictionary::from_words(["cat", "bat"]).unwrap();
        let suggestion = dict.nearest("hat", &SpellConfig::default()).unwrap();
        assert_eq!(suggestion.word, "bat");
    }

    #[test]
    fn spell_check_reports_unknown_words_in_order() {
        let dict = dictionary();
        let corrections = spell_check("aple and banan", &dict, &SpellConfig::default());
        let pairs: Vec<(&str, &str)> = corrections
            .iter()
            .map(|c| (c.original.as_str(), c.suggestion.word.as_str()))
            .collect();
        assert_eq!(pairs[0], ("aple", "apple"));
        assert_eq!(pairs.last(), Some(&("banan", "banana")));
    }

    #[test]
    fn reader_skips_blank_lines() {
        let dict = Dictionary::from_reader("one\n\ntwo\n".as_bytes()).unwrap();
        assert_eq!(dict.len(), 2);
    }
}
