// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Lexicon-based sentiment scoring.
//!
//! Each known word carries a polarity and a subjectivity score. A text's
//! sentiment is the mean of the scores of the known words it contains,
//! adjusted for negation ("not good") and intensifiers ("very good").

use super::{Sentiment, SentimentAnalyzer};
use std::collections::HashMap;
use std::sync::LazyLock;

/// How much an intensifier scales the word that follows it.
const INTENSITY: f64 = 1.3;

/// How much a negator scales the polarity of a word. Negation flips the
/// polarity and weakens it: "not great" is mildly negative, not terrible.
const NEGATION: f64 = -0.5;

/// How many tokens back a negator still applies.
const NEGATION_WINDOW: usize = 3;

#[rustfmt::skip]
const ENTRIES: &[(&str, f64, f64)] = &[
    // word            polarity  subjectivity
    ("amazing",            0.60, 0.90),
    ("awesome",            1.00, 1.00),
    ("awful",             -1.00, 1.00),
    ("bad",               -0.70, 0.67),
    ("beneficial",         0.50, 0.50),
    ("best",               1.00, 0.30),
    ("better",             0.50, 0.50),
    ("clean",              0.37, 0.69),
    ("concerning",        -0.30, 0.50),
    ("dangerous",         -0.60, 0.90),
    ("disappointed",      -0.75, 0.75),
    ("disappointing",     -0.60, 0.70),
    ("easy",               0.43, 0.83),
    ("effective",          0.60, 0.80),
    ("excellent",          1.00, 1.00),
    ("fake",              -0.50, 1.00),
    ("fantastic",          0.40, 0.90),
    ("fine",               0.42, 0.50),
    ("glad",               0.50, 1.00),
    ("good",               0.70, 0.60),
    ("great",              0.80, 0.75),
    ("happy",              0.80, 1.00),
    ("harmful",           -0.50, 0.60),
    ("helpful",            0.50, 0.50),
    ("horrible",          -1.00, 1.00),
    ("impressive",         1.00, 1.00),
    ("ineffective",       -0.50, 0.70),
    ("interesting",        0.50, 0.50),
    ("legit",              0.50, 0.60),
    ("love",               0.50, 0.60),
    ("noticeable",         0.20, 0.40),
    ("painful",           -0.70, 0.80),
    ("perfect",            1.00, 1.00),
    ("pleased",            0.50, 0.70),
    ("poor",              -0.40, 0.60),
    ("positive",           0.23, 0.55),
    ("promising",          0.50, 0.60),
    ("questionable",      -0.30, 0.70),
    ("recommend",          0.40, 0.50),
    ("reliable",           0.50, 0.50),
    ("risky",             -0.50, 0.80),
    ("sad",               -0.50, 1.00),
    ("safe",               0.50, 0.50),
    ("scam",              -0.80, 0.90),
    ("scary",             -0.50, 1.00),
    ("sick",              -0.71, 0.86),
    ("skeptical",         -0.20, 0.60),
    ("solid",              0.30, 0.50),
    ("strong",             0.43, 0.73),
    ("stupid",            -0.80, 1.00),
    ("sure",               0.50, 0.89),
    ("terrible",          -1.00, 1.00),
    ("toxic",             -0.60, 0.80),
    ("unsafe",            -0.60, 0.80),
    ("useful",             0.30, 0.00),
    ("useless",           -0.50, 0.20),
    ("weird",             -0.50, 1.00),
    ("wonderful",          1.00, 1.00),
    ("worried",           -0.40, 0.70),
    ("worse",             -0.40, 0.60),
    ("worst",             -1.00, 1.00),
    ("worth",              0.30, 0.10),
    ("wrong",             -0.50, 0.90),
];

const INTENSIFIERS: &[&str] = &[
    "very", "really", "extremely", "incredibly", "super", "highly", "truly", "so",
];

const NEGATORS: &[&str] = &["not", "no", "never", "without", "cannot", "hardly"];

static LEXICON: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});

/// Scores sentiment using a built-in lexicon of common English adjectives
/// and a handful of words frequently seen in health and supplement forums.
#[derive(Debug, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    fn is_negator(token: &str) -> bool {
        NEGATORS.contains(&token) || token.ends_with("n't")
    }

    fn is_intensifier(token: &str) -> bool {
        INTENSIFIERS.contains(&token)
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Sentiment {
        let tokens = tokenize(text).collect::<Vec<_>>();
        let scores = tokens
            .iter()
            .enumerate()
            .filter_map(|(i, token)| {
                let (mut polarity, mut subjectivity) = *LEXICON.get(token.as_str())?;
                if i > 0 && Self::is_intensifier(&tokens[i - 1]) {
                    polarity *= INTENSITY;
                    subjectivity *= INTENSITY;
                }
                let negated =
                    (1..=NEGATION_WINDOW).any(|k| i >= k && Self::is_negator(&tokens[i - k]));
                if negated {
                    polarity *= NEGATION;
                }
                Some(Sentiment::new(polarity, subjectivity))
            })
            .collect::<Vec<_>>();

        Sentiment::mean(scores)
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> Sentiment {
        LexiconAnalyzer.analyze(text)
    }

    #[test]
    fn it_scores_positive_text() {
        let sentiment = analyze("This is a great peptide, the results were excellent.");
        assert!(sentiment.polarity > 0.5, "{sentiment:?}");
        assert!(sentiment.subjectivity > 0.5, "{sentiment:?}");
    }

    #[test]
    fn it_scores_negative_text() {
        let sentiment = analyze("Terrible vendor. Worst purchase ever, total scam!");
        assert!(sentiment.polarity < -0.5, "{sentiment:?}");
    }

    #[test]
    fn it_scores_text_without_known_words_as_neutral() {
        assert_eq!(analyze("Dosage question about reconstitution"), Sentiment::NEUTRAL);
        assert_eq!(analyze(""), Sentiment::NEUTRAL);
    }

    #[test]
    fn it_flips_negated_words() {
        let plain = analyze("good");
        let negated = analyze("not good");
        assert!(negated.polarity < 0.0, "{negated:?}");
        assert_eq!(negated.polarity, plain.polarity * NEGATION);
    }

    #[test]
    fn it_understands_contracted_negation() {
        let sentiment = analyze("It really isn't that effective");
        assert!(sentiment.polarity < 0.0, "{sentiment:?}");
    }

    #[test]
    fn it_only_negates_nearby_words() {
        let sentiment = analyze("no idea why, but honestly it is good");
        assert_eq!(sentiment.polarity, analyze("good").polarity);
    }

    #[test]
    fn it_intensifies_words() {
        let plain = analyze("good");
        let intensified = analyze("very good");
        assert!(intensified.polarity > plain.polarity);
        assert!(intensified.subjectivity > plain.subjectivity);
    }

    #[test]
    fn it_keeps_scores_in_range() {
        let sentiment = analyze("extremely awesome, extremely perfect, really wonderful");
        assert_eq!(sentiment.polarity, 1.0);
        assert_eq!(sentiment.subjectivity, 1.0);
    }

    #[test]
    fn it_ignores_case_and_punctuation() {
        assert_eq!(analyze("GREAT!!!"), analyze("great"));
    }
}
