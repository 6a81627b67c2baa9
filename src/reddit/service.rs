// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for reading forum listings. Only GET requests are ever made
//! against the API itself.

use crate::http::{self, HTTPGet, HTTPResult};
use crate::reddit::auth::{AccessToken, Credentials};
use log::{debug, info, warn};
use regex::Regex;
use reqwest::{Client, IntoUrl, header};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Base URL for authenticated API requests.
pub const API_BASE_URL: &str = "https://oauth.reddit.com";

/// The most posts Reddit returns in a single listing page.
pub const MAX_PAGE_SIZE: usize = 100;

static FORUM_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{1,21}$").expect("forum name pattern should be valid"));

/// True if `name` can be a subreddit name.
///
/// Subreddit names only contain ASCII letters, digits, and underscores, so
/// a valid name can be used as a URI path segment as is.
///
/// # Examples
///
/// ```
/// use trendwatch::reddit::service::is_valid_forum_name;
/// assert!(is_valid_forum_name("Peptides"));
/// assert!(!is_valid_forum_name("Peptides#x"));
/// ```
pub fn is_valid_forum_name(name: &str) -> bool {
    FORUM_NAME_RE.is_match(name)
}

/// The order in which a forum's posts are listed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Newest posts first.
    #[default]
    New,

    /// Currently popular posts.
    Hot,

    /// Highest-scoring posts of the past week.
    Top,

    /// Posts gaining popularity.
    Rising,
}

impl SortMode {
    /// Parses a sort mode, falling back to [`SortMode::New`] with a warning
    /// if `name` is not a known mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use trendwatch::reddit::service::SortMode;
    /// assert_eq!(SortMode::parse_lenient("top"), SortMode::Top);
    /// assert_eq!(SortMode::parse_lenient("controversial"), SortMode::New);
    /// ```
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("Unknown sort '{name}', defaulting to 'new'");
            SortMode::New
        })
    }

    /// Path segment used in listing URIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::New => "new",
            SortMode::Hot => "hot",
            SortMode::Top => "top",
            SortMode::Rising => "rising",
        }
    }

    /// Time window for the listing, if the mode takes one.
    fn time_filter(&self) -> Option<&'static str> {
        match self {
            SortMode::Top => Some("week"),
            _ => None,
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(SortMode::New),
            "hot" => Ok(SortMode::Hot),
            "top" => Ok(SortMode::Top),
            "rising" => Ok(SortMode::Rising),
            other => Err(format!("unknown sort mode: {other}")),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for one page of a forum listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest<'a> {
    /// Name of the forum (subreddit), without the `r/` prefix.
    pub forum: &'a str,

    /// Listing order.
    pub sort: SortMode,

    /// Number of posts to request, at most [`MAX_PAGE_SIZE`].
    pub limit: usize,

    /// Cursor returned by the previous page, if any.
    pub after: Option<&'a str>,
}

impl PageRequest<'_> {
    /// Path and query string for this page, relative to the API base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use trendwatch::reddit::service::{PageRequest, SortMode};
    /// let page = PageRequest { forum: "Peptides", sort: SortMode::Top, limit: 25, after: None };
    /// assert_eq!(page.path(), "/r/Peptides/top?limit=25&t=week");
    /// ```
    pub fn path(&self) -> String {
        let mut path = format!(
            "/r/{}/{}?limit={}",
            self.forum,
            self.sort,
            self.limit.min(MAX_PAGE_SIZE)
        );
        if let Some(t) = self.sort.time_filter() {
            path += &format!("&t={t}");
        }
        if let Some(after) = self.after {
            path += &format!("&after={after}");
        }
        path
    }
}

/// A source of forum listings.
///
/// Using this trait, clients can implement different ways of retrieving
/// listings, such as an actual connector to the Reddit API for production
/// code, and canned listings for demos and tests.
pub trait Service {
    /// Retrieves one page of a forum listing as a raw JSON response.
    fn get_listing(&self, page: PageRequest<'_>) -> impl Future<Output = HTTPResult<String>>;
}

/// A service that contacts the Reddit API directly to retrieve listings.
///
/// The service holds a single HTTP client and a single access token for
/// its whole lifetime.
#[derive(Debug)]
pub struct RedditService {
    client: Client,
    token: AccessToken,
}

impl RedditService {
    /// Connects to the Reddit API with the given `credentials`.
    ///
    /// This requests an access token, so it fails if the credentials are
    /// rejected or Reddit cannot be reached.
    pub async fn connect(credentials: &Credentials) -> HTTPResult<Self> {
        info!("Initializing Reddit client (read-only mode)...");
        let client = http::client(credentials.user_agent())?;
        let token = AccessToken::request(&client, credentials).await?;
        info!("Client initialized with an application-only token; no user context, read-only");
        Ok(Self { client, token })
    }

    fn uri(&self, page: &PageRequest<'_>) -> String {
        format!("{API_BASE_URL}{}", page.path())
    }
}

impl HTTPGet for RedditService {
    /// Sends an authorized GET request to a Reddit API endpoint and
    /// returns the raw body.
    async fn get<U>(&self, uri: U) -> HTTPResult<String>
    where
        U: IntoUrl + Send,
    {
        let resp = self
            .client
            .get(uri)
            .header(header::AUTHORIZATION, self.token.header_value())
            .send()
            .await?;
        http::json_body(resp).await
    }
}

impl Service for RedditService {
    async fn get_listing(&self, page: PageRequest<'_>) -> HTTPResult<String> {
        let uri = self.uri(&page);
        debug!("GET {uri}");
        self.get(&uri).await
    }
}
