// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Aggregate engagement metrics.

use serde::Serialize;
use thiserror::Error;

/// A thing that collects votes and comments.
pub trait HasEngagement {
    /// Net score (upvotes minus downvotes).
    fn score(&self) -> i64;

    /// Number of comments.
    fn comment_count(&self) -> u64;

    /// Score plus comment count, a coarse popularity proxy.
    ///
    /// Saturates instead of overflowing.
    fn engagement(&self) -> i64 {
        self.score().saturating_add(saturating_i64(self.comment_count()))
    }
}

fn saturating_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Aggregate statistics over a set of posts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendMetrics {
    total_posts: usize,
    average_score: f64,
    average_comments: f64,
    total_engagement: i64,
}

impl TrendMetrics {
    /// Number of posts analyzed.
    pub fn total_posts(&self) -> usize {
        self.total_posts
    }

    /// Mean score per post.
    pub fn average_score(&self) -> f64 {
        self.average_score
    }

    /// Mean number of comments per post.
    pub fn average_comments(&self) -> f64 {
        self.average_comments
    }

    /// Sum of all scores and all comment counts.
    pub fn total_engagement(&self) -> i64 {
        self.total_engagement
    }
}

/// Indicates that metrics could not be computed.
#[derive(Clone, Debug, Error, PartialEq, Serialize)]
pub enum AnalysisError {
    /// There were no posts, so there is nothing to average.
    #[error("No posts to analyze")]
    NoPosts,
}

/// Calculates aggregate trend metrics for `posts`.
///
/// Returns [`AnalysisError::NoPosts`] if `posts` is empty.
///
/// # Examples
///
/// ```
/// use trendwatch::metrics::{AnalysisError, HasEngagement, calculate_trend_metrics};
///
/// struct Post(i64, u64);
///
/// impl HasEngagement for Post {
///     fn score(&self) -> i64 { self.0 }
///     fn comment_count(&self) -> u64 { self.1 }
/// }
///
/// let metrics = calculate_trend_metrics(&[Post(10, 5), Post(20, 15)]).unwrap();
/// assert_eq!(metrics.total_posts(), 2);
/// assert_eq!(metrics.average_score(), 15.0);
/// assert_eq!(metrics.average_comments(), 10.0);
/// assert_eq!(metrics.total_engagement(), 50);
///
/// let empty: [Post; 0] = [];
/// assert_eq!(calculate_trend_metrics(&empty), Err(AnalysisError::NoPosts));
/// ```
pub fn calculate_trend_metrics<T: HasEngagement>(
    posts: &[T],
) -> Result<TrendMetrics, AnalysisError> {
    if posts.is_empty() {
        return Err(AnalysisError::NoPosts);
    }

    let total_posts = posts.len();
    let score_sum: f64 = posts.iter().map(|post| post.score() as f64).sum();
    let comment_sum: f64 = posts.iter().map(|post| post.comment_count() as f64).sum();
    let total_engagement = posts
        .iter()
        .map(HasEngagement::engagement)
        .fold(0i64, i64::saturating_add);

    Ok(TrendMetrics {
        total_posts,
        average_score: score_sum / total_posts as f64,
        average_comments: comment_sum / total_posts as f64,
        total_engagement,
    })
}
