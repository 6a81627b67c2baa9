// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Reddit API clients and services for reading forum listings over HTTP.

pub mod auth;
pub mod client;
pub mod demo;
pub mod service;

pub use client::Posts;
pub use demo::DemoService;
pub use service::{RedditService, SortMode};
