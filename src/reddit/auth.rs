// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Authentication for the Reddit API.
//!
//! trendwatch authenticates as a "script" app using Reddit's
//! [application-only OAuth flow][1]: the app's client ID and secret are
//! exchanged for a bearer token. No username or password is ever used, so
//! the token carries no user context and cannot be used to post, vote, or
//! comment.
//!
//! [1]: https://github.com/reddit-archive/reddit/wiki/OAuth2#application-only-oauth

use crate::http::{self, HTTPError, HTTPResult};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;

/// Endpoint that issues access tokens.
pub const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Credentials identifying a registered Reddit app.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    user_agent: String,
}

impl Credentials {
    /// Creates a new set of credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_agent: user_agent.into(),
        }
    }

    /// The app's client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The user agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

/// A bearer token for the Reddit API.
pub struct AccessToken {
    token: String,
}

impl AccessToken {
    /// Requests a new application-only token using `credentials`.
    pub async fn request(client: &Client, credentials: &Credentials) -> HTTPResult<Self> {
        let resp = client
            .post(TOKEN_URL)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;
        let body = http::json_body(resp).await?;
        Self::parse(&body)
    }

    /// Parses a token from the body of a token response.
    ///
    /// Reddit sometimes reports failures with a successful status code and
    /// an `error` field, so a body without a token is an error too.
    fn parse(body: &str) -> HTTPResult<Self> {
        let resp: TokenResponse = serde_json::from_str(body)
            .map_err(|err| HTTPError::Auth(format!("invalid token response: {err}")))?;
        match resp {
            TokenResponse {
                access_token: Some(token),
                ..
            } if !token.is_empty() => Ok(Self { token }),
            TokenResponse {
                error: Some(error), ..
            } => Err(HTTPError::Auth(error)),
            _ => Err(HTTPError::Auth("no access token in response".to_string())),
        }
    }

    /// Value of the `Authorization` header for requests using this token.
    pub fn header_value(&self) -> String {
        format!("bearer {}", self.token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .finish()
    }
}
