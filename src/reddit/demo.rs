// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Built-in sample data for running without API credentials.
//!
//! [`DemoService`] serves a fixed listing of five posts through the same
//! [`Service`] interface as the live API, so a demo run exercises the full
//! pipeline (pagination, normalization, rate limiting, logging) without
//! network access or credentials.

use crate::http::HTTPResult;
use crate::reddit::service::{PageRequest, Service};
use crate::thing::{Listing, PostRecord, RawPost};
use log::debug;

/// Forum the demo posts come from.
pub const DEMO_FORUM: &str = "Peptides";

const DEMO_LISTING: &str = include_str!("demo.json");

const EMPTY_LISTING: &str = r#"{"kind": "Listing", "data": {"after": null, "children": []}}"#;

/// A service that serves the built-in demo listing, whatever is requested.
#[derive(Debug, Default)]
pub struct DemoService;

impl Service for DemoService {
    async fn get_listing(&self, page: PageRequest<'_>) -> HTTPResult<String> {
        debug!("serving demo listing for {page:?}");
        let listing = if page.after.is_some() {
            EMPTY_LISTING
        } else {
            DEMO_LISTING
        };
        Ok(listing.to_string())
    }
}

/// The demo posts, normalized, without any delay.
pub fn demo_posts() -> Vec<PostRecord> {
    Listing::parse(DEMO_LISTING)
        .expect("built-in demo listing should be valid")
        .into_posts()
        .map(RawPost::normalize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::HasEngagement;
    use crate::reddit::service::SortMode;

    fn first_page() -> PageRequest<'static> {
        PageRequest {
            forum: "anything",
            sort: SortMode::Hot,
            limit: 3,
            after: None,
        }
    }

    #[test]
    fn it_has_five_posts() {
        assert_eq!(demo_posts().len(), 5);
    }

    #[test]
    fn it_has_posts_from_the_demo_forum() {
        assert!(demo_posts().iter().all(|post| post.forum_name() == DEMO_FORUM));
    }

    #[test]
    fn it_normalizes_demo_posts() {
        let posts = demo_posts();
        assert_eq!(
            posts[0].title(),
            "First time reconstituting BPC-157 & TB-500, looking for advice"
        );
        assert_eq!(posts[3].body(), "");
        assert_eq!(posts[4].score(), 15);
        assert_eq!(posts[4].comment_count(), 9);
    }

    #[test]
    fn it_drops_demo_authors() {
        let json = serde_json::to_string(&demo_posts()).unwrap();
        assert!(!json.contains("author"));
        assert!(!json.contains("demo_user"));
    }

    #[tokio::test]
    async fn it_serves_the_same_listing_for_any_forum() {
        let service = DemoService;
        let body = service.get_listing(first_page()).await.unwrap();
        let listing = Listing::parse(&body).unwrap();
        assert_eq!(listing.after(), None);
        assert_eq!(listing.into_posts().count(), 5);
    }

    #[tokio::test]
    async fn it_serves_an_empty_page_after_the_first() {
        let service = DemoService;
        let page = PageRequest {
            after: Some("t3_demo005"),
            ..first_page()
        };
        let body = service.get_listing(page).await.unwrap();
        let listing = Listing::parse(&body).unwrap();
        assert_eq!(listing.into_posts().count(), 0);
    }
}
