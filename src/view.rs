// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Draws viewable objects into a terminal window or log.

use crate::metrics::HasEngagement;
use crate::summary::TrendSummary;
use crate::text::truncate;
use crate::thing::PostRecord;
use indoc::formatdoc;
use itertools::Itertools;

/// Number of characters of a post's title shown in its one-line view.
pub const TITLE_WIDTH: usize = 50;

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self) -> String;
}

impl Viewable for PostRecord {
    fn view(&self) -> String {
        format!(
            "Post: {}... | Score: {} | Comments: {}",
            truncate(self.title(), TITLE_WIDTH),
            self.score(),
            self.comment_count()
        )
    }
}

impl Viewable for TrendSummary {
    fn view(&self) -> String {
        let metrics = match self.metrics() {
            Ok(metrics) => formatdoc! {"
                Posts analyzed: {}
                Average score: {:.2}
                Average comments: {:.2}
                Total engagement: {}",
                metrics.total_posts(),
                metrics.average_score(),
                metrics.average_comments(),
                metrics.total_engagement(),
            },
            Err(err) => err.to_string(),
        };

        let keywords = if self.keywords().is_empty() {
            String::from("  (none)")
        } else {
            self.keywords()
                .iter()
                .map(|kw| format!("  {} ({})", kw.keyword, kw.count))
                .join("\n")
        };

        let sentiment = self.sentiment();
        formatdoc! {"
            {metrics}

            Top keywords:
            {keywords}

            Sentiment: polarity {:.2}, subjectivity {:.2}",
            sentiment.polarity,
            sentiment.subjectivity,
        }
    }
}

#[cfg(test)]
mod tests {
    mod format_post {
        use super::super::*;
        use crate::reddit::demo::demo_posts;

        #[test]
        fn it_formats_a_post() {
            let post = &demo_posts()[3];
            let expected = format!("Post: {}... | Score: 203 | Comments: 76", post.title());
            assert!(post.title().chars().count() <= TITLE_WIDTH);
            assert_eq!(post.view(), expected);
        }

        #[test]
        fn it_truncates_long_titles() {
            let post = &demo_posts()[0];
            assert!(post.title().chars().count() > TITLE_WIDTH);
            let view = post.view();
            let title = view
                .strip_prefix("Post: ")
                .and_then(|rest| rest.split("... | ").next())
                .unwrap();
            assert_eq!(title.chars().count(), TITLE_WIDTH);
            assert!(post.title().starts_with(title));
        }
    }

    mod format_summary {
        use super::super::*;
        use crate::reddit::demo::demo_posts;
        use crate::sentiment::{Sentiment, SentimentAnalyzer};
        use indoc::indoc;

        struct Neutral;

        impl SentimentAnalyzer for Neutral {
            fn analyze(&self, _text: &str) -> Sentiment {
                Sentiment::NEUTRAL
            }
        }

        #[test]
        fn it_formats_metrics() {
            let view = TrendSummary::for_posts(&demo_posts(), &Neutral).view();
            assert!(view.starts_with(indoc! {"
                Posts analyzed: 5
                Average score: 91.00
                Average comments: 37.80
                Total engagement: 644

                Top keywords:
            "}));
            assert!(view.ends_with("Sentiment: polarity 0.00, subjectivity 0.00"));
        }

        #[test]
        fn it_formats_an_empty_summary() {
            let view = TrendSummary::for_posts(&[], &Neutral).view();
            let expected = indoc! {"
                No posts to analyze

                Top keywords:
                  (none)

                Sentiment: polarity 0.00, subjectivity 0.00"};
            assert_eq!(view, expected);
        }
    }
}
