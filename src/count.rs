// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Keyword frequency counting.

use counter::Counter;
use std::collections::HashMap;

/// Number of keywords returned when callers have no preference.
pub const DEFAULT_KEYWORD_COUNT: usize = 10;

/// Characters stripped from both edges of every token.
pub const PUNCTUATION: &[char] = &['.', ',', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}'];

/// Common English function words that never count as keywords.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can", "this",
    "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who",
    "when", "where", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other",
    "some", "such", "no", "not", "only", "same", "so", "than", "too", "very", "just", "also",
];

/// Tokens this short (in characters) or shorter are never keywords.
const MIN_TRIVIAL_LENGTH: usize = 2;

/// A pair of keyword and the number of times it occurred.
pub type KeywordCount = (String, usize);

/// Extracts the `top_n` most frequent meaningful words from `text`.
///
/// Text is lower-cased and split on whitespace, and punctuation is stripped
/// from the edges of each word. Words of two characters or fewer and
/// [stop words](STOP_WORDS) are discarded. Words are ranked by descending
/// frequency; words with the same frequency keep the order in which they
/// first appeared.
///
/// # Examples
///
/// ```
/// use trendwatch::count::extract_keywords;
/// let text = "Peptide research, new peptide trials, and research (peptide) trends.";
/// assert_eq!(
///     extract_keywords(text, 3),
///     vec!["peptide", "research", "new"],
/// );
/// ```
///
/// ```
/// use trendwatch::count::extract_keywords;
/// assert!(extract_keywords("", 10).is_empty());
/// ```
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    KeywordCounter::from_text(text)
        .most_common(top_n)
        .into_iter()
        .map(|(word, _)| word)
        .collect()
}

/// Splits `text` into normalized candidate keywords.
///
/// This applies every filtering rule used by [`extract_keywords()`], but
/// does not count anything.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .map(|word| word.trim_matches(PUNCTUATION).to_string())
        .filter(|word| word.chars().count() > MIN_TRIVIAL_LENGTH)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
}

/// Counts keywords across one or more texts.
#[derive(Debug, Default)]
pub struct KeywordCounter {
    counts: Counter<String>,
    first_seen: HashMap<String, usize>,
}

impl KeywordCounter {
    /// Counts the keywords in a single text.
    pub fn from_text(text: &str) -> Self {
        Self::from_texts([text])
    }

    /// Counts the keywords in several texts as if they were one.
    ///
    /// Ties are broken by first appearance across all texts, in the order
    /// the texts are given.
    pub fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut first_seen = HashMap::new();
        let words = texts
            .into_iter()
            .flat_map(tokenize)
            .inspect(|word| {
                let next = first_seen.len();
                first_seen.entry(word.clone()).or_insert(next);
            })
            .collect::<Vec<_>>();
        let counts = words.into_iter().collect::<Counter<_>>();
        Self { counts, first_seen }
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no keyword was found.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most common keywords with their counts, most frequent first.
    pub fn most_common(&self, n: usize) -> Vec<KeywordCount> {
        self.counts
            .most_common_tiebreaker(|lhs, rhs| Ord::cmp(&self.first_seen[lhs], &self.first_seen[rhs]))
            .into_iter()
            .take(n)
            .collect()
    }
}
