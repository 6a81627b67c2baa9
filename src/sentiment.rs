// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Sentiment analysis.
//!
//! Sentiment is scored by a [`SentimentAnalyzer`]. When trendwatch is built
//! with the `sentiment` feature (the default), [`analyzer()`] returns a
//! lexicon-based scorer. Without it, [`analyzer()`] returns a
//! [`NeutralAnalyzer`] that scores every text as neutral, so callers never
//! need to care whether sentiment analysis is actually available.
//!
//! All scoring happens locally; no text is ever sent to a remote service.

#[cfg(feature = "sentiment")]
mod lexicon;

#[cfg(feature = "sentiment")]
pub use lexicon::LexiconAnalyzer;

use log::warn;
use serde::Serialize;

/// Polarity and subjectivity of a piece of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Sentiment {
    /// How negative (-1.0) or positive (1.0) the text is.
    pub polarity: f64,

    /// How objective (0.0) or subjective (1.0) the text is.
    pub subjectivity: f64,
}

impl Sentiment {
    /// A sentiment that is neither positive nor negative, nor subjective.
    pub const NEUTRAL: Sentiment = Sentiment {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    /// Creates a new sentiment, clamping each value into its valid range.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    /// The mean of several sentiments, or [`Sentiment::NEUTRAL`] if there
    /// are none.
    pub fn mean(sentiments: impl IntoIterator<Item = Sentiment>) -> Self {
        let (count, polarity, subjectivity) = sentiments.into_iter().fold(
            (0usize, 0.0, 0.0),
            |(count, polarity, subjectivity), s| {
                (count + 1, polarity + s.polarity, subjectivity + s.subjectivity)
            },
        );
        if count == 0 {
            Self::NEUTRAL
        } else {
            Self::new(polarity / count as f64, subjectivity / count as f64)
        }
    }
}

/// Scores the sentiment of text.
pub trait SentimentAnalyzer {
    /// Scores the polarity and subjectivity of `text`.
    ///
    /// Implementations must not fail; text that cannot be scored is
    /// [neutral](Sentiment::NEUTRAL).
    fn analyze(&self, text: &str) -> Sentiment;
}

/// Scores every text as neutral.
///
/// Used when sentiment analysis is not available.
#[derive(Debug)]
pub struct NeutralAnalyzer;

impl NeutralAnalyzer {
    /// Creates a new neutral analyzer, warning that sentiment analysis
    /// is unavailable.
    pub fn new() -> Self {
        warn!("Sentiment analysis is not available in this build; all texts will score as neutral");
        Self
    }
}

impl Default for NeutralAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for NeutralAnalyzer {
    fn analyze(&self, _text: &str) -> Sentiment {
        Sentiment::NEUTRAL
    }
}

/// Selects the best available sentiment analyzer.
///
/// This should be called once, at startup.
#[cfg(feature = "sentiment")]
pub fn analyzer() -> Box<dyn SentimentAnalyzer> {
    Box::new(LexiconAnalyzer)
}

/// Selects the best available sentiment analyzer.
///
/// This build has no real analyzer, so this warns and returns a
/// [`NeutralAnalyzer`]. This should be called once, at startup.
#[cfg(not(feature = "sentiment"))]
pub fn analyzer() -> Box<dyn SentimentAnalyzer> {
    Box::new(NeutralAnalyzer::new())
}
