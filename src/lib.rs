// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! trendwatch is a read-only command-line tool that collects public posts
//! from Reddit forums for offline trend research. Each post is stripped of
//! every author and user identifier as soon as it is fetched; only the
//! title, body, timestamps, and engagement numbers are kept. trendwatch can
//! then summarize what a set of posts is about: the most frequent keywords,
//! average engagement, and overall sentiment.
//!
//! trendwatch never posts, votes, or comments, and it waits two seconds
//! between posts to stay well within Reddit's rate limits.
//!
//! # Examples
//!
//! Try it out with built-in sample data (no Reddit account needed):
//!
//! ```bash
//! trendwatch --demo --analyze
//! ```
//!
//! Read the 25 newest posts from r/Peptides and append them to the local
//! record log:
//!
//! ```bash
//! trendwatch --subreddit Peptides -n 25 --save
//! ```
//!
//! Show the week's top posts from another forum along with a trend summary:
//!
//! ```bash
//! trendwatch --subreddit Nootropics --sort top --analyze
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! trendwatch --help
//! ```
//!
//! # Reddit API Setup
//!
//! To read live data, trendwatch needs the credentials of a Reddit "script"
//! app:
//!
//! 1. Create an app at <https://www.reddit.com/prefs/apps>, choosing the
//!    "script" type.
//! 2. Copy `config.example.toml` to `config.toml`.
//! 3. Fill in the app's client ID and secret, and a descriptive user agent
//!    such as `python:peptide-trends:v1.0 (by u/your_username)`.
//!
//! The credentials can also be set in the `TRENDWATCH_CLIENT_ID`,
//! `TRENDWATCH_CLIENT_SECRET`, and `TRENDWATCH_USER_AGENT` environment
//! variables. See the [`conf`] module for all settings.
//!
//! # Features
//!
//! Sentiment analysis is provided by the `sentiment` feature, which is
//! enabled by default. Without it, every text scores as neutral.
//!
//! # License
//!
//! trendwatch is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod conf;
pub mod count;
pub mod http;
pub mod metrics;
pub mod reddit;
pub mod sentiment;
pub mod storage;
pub mod summary;
pub mod text;
pub mod thing;
pub mod view;

#[cfg(test)]
mod test_utils;
