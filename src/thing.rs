// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, comments, etc. This
//! module parses listings of posts ("links", kind `t3`) returned by the
//! Reddit API and reduces each one to an anonymized [`PostRecord`].
//!
//! # Privacy
//!
//! Raw posts are deserialized into [`RawPost`], which only declares the
//! fields needed for trend review. Author names, author IDs, flair and other
//! identifying fields in the JSON response are never read, so they cannot
//! leak into a [`PostRecord`].

use crate::metrics::HasEngagement;
use crate::text::{convert_html_entities, truncate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of characters of a post's body that is kept.
pub const MAX_BODY_LENGTH: usize = 500;

/// An error parsing data returned by the Reddit API.
#[derive(Debug, Error)]
pub enum Error {
    /// The response was not a valid listing.
    #[error("could not parse listing: {0}")]
    Json(#[from] serde_json::Error),
}

/// One page of a Reddit listing.
#[derive(Debug, Deserialize)]
pub struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    after: Option<String>,

    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: RawPost,
}

impl Listing {
    /// Parses a text response from the Reddit API into a listing.
    ///
    /// Specifically, `data` is the result of a call to
    /// `/r/<forum>/<sort>.json` or its OAuth equivalent.
    pub fn parse(data: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(data)?)
    }

    /// Cursor for the next page, or `None` if this is the last page.
    pub fn after(&self) -> Option<&str> {
        self.data.after.as_deref()
    }

    /// Consumes the listing and returns its posts in listing order.
    pub fn into_posts(self) -> impl Iterator<Item = RawPost> {
        self.data.children.into_iter().map(|child| child.data)
    }
}

/// A post as returned by the Reddit API, before normalization.
///
/// Missing fields take their default values (zero, empty), so a malformed
/// post never fails to parse as long as it is a JSON object.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPost {
    id: String,
    created_utc: f64,
    title: String,
    selftext: Option<String>,
    score: i64,
    num_comments: u64,
    upvote_ratio: f64,
    subreddit: String,
}

impl RawPost {
    /// Reduces the post to its anonymized, trend-relevant fields.
    pub fn normalize(self) -> PostRecord {
        PostRecord::from(self)
    }
}

impl HasEngagement for RawPost {
    fn score(&self) -> i64 {
        self.score
    }

    fn comment_count(&self) -> u64 {
        self.num_comments
    }
}

/// An anonymized Reddit post.
///
/// A `PostRecord` has no author or user identifier of any kind.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PostRecord {
    id: String,
    created_at: DateTime<Utc>,
    title: String,
    body: String,
    score: i64,
    comment_count: u64,
    upvote_ratio: f64,
    forum_name: String,
}

impl From<RawPost> for PostRecord {
    fn from(raw: RawPost) -> Self {
        let created_at = timestamp_to_utc(raw.created_utc);
        let body = raw
            .selftext
            .map(|body| truncate(&convert_html_entities(&body), MAX_BODY_LENGTH))
            .unwrap_or_default();
        Self {
            id: raw.id,
            created_at,
            title: convert_html_entities(&raw.title),
            body,
            score: raw.score,
            comment_count: raw.num_comments,
            upvote_ratio: raw.upvote_ratio.clamp(0.0, 1.0),
            forum_name: raw.subreddit,
        }
    }
}

impl PostRecord {
    /// Opaque identifier assigned by Reddit.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The date the post was created, in UTC.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The post's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The post's body, truncated to [`MAX_BODY_LENGTH`] characters.
    ///
    /// Link posts have an empty body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Fraction of votes that were upvotes.
    pub fn upvote_ratio(&self) -> f64 {
        self.upvote_ratio
    }

    /// The forum (subreddit) the post appeared in.
    pub fn forum_name(&self) -> &str {
        &self.forum_name
    }

    /// Title and body joined for text analysis.
    pub fn text(&self) -> String {
        if self.body.is_empty() {
            self.title.clone()
        } else {
            format!("{}\n{}", self.title, self.body)
        }
    }
}

impl HasEngagement for PostRecord {
    fn score(&self) -> i64 {
        self.score
    }

    fn comment_count(&self) -> u64 {
        self.comment_count
    }
}

fn timestamp_to_utc(timestamp: f64) -> DateTime<Utc> {
    let secs = timestamp.trunc() as i64;
    let nanos = (timestamp.fract() * 1e9).round() as u32;
    DateTime::from_timestamp(secs, nanos.min(999_999_999)).unwrap_or_default()
}
