// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Trend summaries.

use crate::count::{DEFAULT_KEYWORD_COUNT, KeywordCounter};
use crate::metrics::{AnalysisError, TrendMetrics, calculate_trend_metrics};
use crate::sentiment::{Sentiment, SentimentAnalyzer};
use crate::thing::PostRecord;
use serde::Serialize;

/// A keyword and the number of times it appeared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub count: usize,
}

/// Aggregate metrics, frequent keywords, and mean sentiment of a set of
/// posts.
#[derive(Debug, Serialize)]
pub struct TrendSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<TrendMetrics>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,

    keywords: Vec<KeywordFrequency>,
    sentiment: Sentiment,
}

impl TrendSummary {
    /// Summarizes `posts`, scoring each post's title and body with
    /// `analyzer`.
    ///
    /// An empty set of posts still produces a summary; it has no metrics,
    /// no keywords, and neutral sentiment.
    pub fn for_posts(posts: &[PostRecord], analyzer: &dyn SentimentAnalyzer) -> Self {
        let (metrics, error) = match calculate_trend_metrics(posts) {
            Ok(metrics) => (Some(metrics), None),
            Err(err) => (None, Some(err.to_string())),
        };

        let texts = posts.iter().map(PostRecord::text).collect::<Vec<_>>();
        let keywords = KeywordCounter::from_texts(texts.iter().map(String::as_str))
            .most_common(DEFAULT_KEYWORD_COUNT)
            .into_iter()
            .map(|(keyword, count)| KeywordFrequency { keyword, count })
            .collect();

        let sentiment = Sentiment::mean(texts.iter().map(|text| analyzer.analyze(text)));

        Self {
            metrics,
            error,
            keywords,
            sentiment,
        }
    }

    /// Aggregate metrics, or the reason they could not be computed.
    pub fn metrics(&self) -> Result<&TrendMetrics, AnalysisError> {
        self.metrics.as_ref().ok_or(AnalysisError::NoPosts)
    }

    /// The most frequent keywords, most frequent first.
    pub fn keywords(&self) -> &[KeywordFrequency] {
        &self.keywords
    }

    /// Mean sentiment across all posts.
    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reddit::demo::demo_posts;
    use crate::sentiment::NeutralAnalyzer;
    use crate::test_utils::do_logging;
    use pretty_assertions::assert_eq;

    struct FixedAnalyzer(f64);

    impl SentimentAnalyzer for FixedAnalyzer {
        fn analyze(&self, _text: &str) -> Sentiment {
            Sentiment::new(self.0, 0.5)
        }
    }

    #[test]
    fn it_summarizes_demo_posts() {
        let summary = TrendSummary::for_posts(&demo_posts(), &FixedAnalyzer(0.25));
        let metrics = summary.metrics().unwrap();
        assert_eq!(metrics.total_posts(), 5);
        assert_eq!(metrics.average_score(), 91.0);
        assert_eq!(metrics.average_comments(), 37.8);
        assert_eq!(metrics.total_engagement(), 644);
        assert_eq!(summary.sentiment(), Sentiment::new(0.25, 0.5));
    }

    #[test]
    fn it_ranks_keywords_across_posts() {
        let summary = TrendSummary::for_posts(&demo_posts(), &FixedAnalyzer(0.0));
        let keywords = summary.keywords();
        assert!(!keywords.is_empty());
        assert!(keywords.len() <= DEFAULT_KEYWORD_COUNT);
        assert!(keywords.windows(2).all(|pair| pair[0].count >= pair[1].count));
        assert!(keywords.iter().all(|kw| kw.keyword.chars().count() > 2));
    }

    #[test]
    fn it_summarizes_no_posts() {
        do_logging();
        let summary = TrendSummary::for_posts(&[], &NeutralAnalyzer::new());
        assert_eq!(summary.metrics(), Err(AnalysisError::NoPosts));
        assert!(summary.keywords().is_empty());
        assert_eq!(summary.sentiment(), Sentiment::NEUTRAL);
    }

    #[test]
    fn it_serializes_the_error_for_no_posts() {
        do_logging();
        let summary = TrendSummary::for_posts(&[], &NeutralAnalyzer::new());
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["error"], "No posts to analyze");
        assert!(value.get("metrics").is_none());
    }

    #[test]
    fn it_serializes_metrics() {
        let summary = TrendSummary::for_posts(&demo_posts(), &FixedAnalyzer(0.0));
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["metrics"]["total_posts"], 5);
        assert_eq!(value["metrics"]["total_engagement"], 644);
        assert!(value.get("error").is_none());
        assert!(value["keywords"][0]["keyword"].is_string());
    }
}
