// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Clients for reading posts from the Reddit API.

use crate::http::HTTPError;
use crate::reddit::service::{MAX_PAGE_SIZE, PageRequest, Service, SortMode};
use crate::thing::{self, Listing, PostRecord, RawPost};
use log::{debug, info};
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

/// Minimum pause between two posts.
///
/// Reddit allows roughly 60 requests per minute; pausing this long between
/// posts keeps trendwatch well below that ceiling.
pub const REQUEST_DELAY: Duration = Duration::from_secs(2);

/// Number of posts fetched per forum when no limit is given.
pub const DEFAULT_FETCH_LIMIT: usize = 10;

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),
}

/// A lazy, rate-limited sequence of a forum's posts.
///
/// Posts are pulled one at a time with [`Posts::next()`]. A page of the
/// listing is only requested once every post of the previous page has been
/// pulled, and every pull after the first waits [`REQUEST_DELAY`] before
/// producing anything, including the pull that finds the sequence
/// exhausted. The sequence ends after `limit` posts, when the listing runs
/// out, or after the first error, and cannot be restarted.
///
/// Every post is [normalized](RawPost::normalize) before it is returned.
#[derive(Debug)]
pub struct Posts<'a, S: Service> {
    service: &'a S,
    forum: String,
    sort: SortMode,
    remaining: usize,
    after: Option<String>,
    page: VecDeque<RawPost>,
    last_page: bool,
    started: bool,
    done: bool,
}

impl<'a, S: Service> Posts<'a, S> {
    /// Creates a sequence of at most `limit` posts from `forum`, listed
    /// in `sort` order, retrieved from `service`.
    ///
    /// Nothing is requested until the first call to [`Posts::next()`].
    pub fn new(service: &'a S, forum: impl Into<String>, sort: SortMode, limit: usize) -> Self {
        let forum = forum.into();
        info!("Fetching {limit} '{sort}' posts from r/{forum}...");
        Self {
            service,
            forum,
            sort,
            remaining: limit,
            after: None,
            page: VecDeque::new(),
            last_page: false,
            started: false,
            done: limit == 0,
        }
    }

    /// Pulls the next post.
    ///
    /// Returns `None` once the sequence is exhausted. If the service fails,
    /// the error is returned once and the sequence ends.
    pub async fn next(&mut self) -> Option<Result<PostRecord, Error>> {
        if self.started {
            sleep(REQUEST_DELAY).await;
        }
        self.started = true;

        if self.done {
            return None;
        }

        match self.next_raw().await {
            Ok(Some(raw)) => {
                self.remaining -= 1;
                self.done = self.remaining == 0;
                Some(Ok(raw.normalize()))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }

    /// Pulls every remaining post, stopping at the first error.
    pub async fn collect(mut self) -> Result<Vec<PostRecord>, Error> {
        let mut posts = Vec::new();
        while let Some(post) = self.next().await {
            posts.push(post?);
        }
        Ok(posts)
    }

    async fn next_raw(&mut self) -> Result<Option<RawPost>, Error> {
        if self.page.is_empty() && !self.last_page {
            self.fetch_page().await?;
        }
        Ok(self.page.pop_front())
    }

    async fn fetch_page(&mut self) -> Result<(), Error> {
        let request = PageRequest {
            forum: &self.forum,
            sort: self.sort,
            limit: self.remaining.min(MAX_PAGE_SIZE),
            after: self.after.as_deref(),
        };
        debug!("requesting {request:?}");
        let body = self.service.get_listing(request).await?;
        let listing = Listing::parse(&body)?;

        self.after = listing.after().map(String::from);
        self.last_page = self.after.is_none();
        self.page.extend(listing.into_posts());
        if self.page.is_empty() {
            self.last_page = true;
        }
        Ok(())
    }
}
