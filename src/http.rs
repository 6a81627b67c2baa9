// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Services for communicating with APIs using HTTP.

use reqwest::{Client, ClientBuilder, IntoUrl, Response, header};
use thiserror::Error;

/// Creates an HTTP client that identifies itself with `user_agent`.
///
/// Reddit rejects or heavily throttles requests with generic user agents,
/// so every request trendwatch makes goes through a client created here.
pub fn client(user_agent: &str) -> HTTPResult<Client> {
    Ok(ClientBuilder::new().user_agent(user_agent).build()?)
}

/// A user agent suitable when no better one is configured.
pub fn default_user_agent() -> String {
    format!(
        "rust:{}:v{} (read-only research tool)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// A general service for making HTTP GET calls.
///
/// It might be a bit odd to refer to this trait as a "service", since
/// it appears to be more of a _client_ implementation, but think of
/// this as a proxy for a remote _service_ (even though a _client_ is used
/// to communicate with that remote service).
pub trait HTTPGet {
    /// Sends a GET request to `uri` and returns the raw body.
    fn get<U>(&self, uri: U) -> impl Future<Output = HTTPResult<String>> + Send
    where
        U: IntoUrl + Send;
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// An error that occurred while making an HTTP request or reading
    /// its response.
    #[error("Error while making HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    #[error("Request returned HTTP {0}")]
    Http(reqwest::StatusCode),

    /// A missing Content-Type header in a response.
    #[error("Missing Content-Type header")]
    MissingContentType,

    /// An invalid Content-Type header.
    #[error("Invalid Content-Type header value: {0}")]
    InvalidContentType(#[from] header::ToStrError),

    /// A Content-Type that is not understood by the service.
    #[error("Unexpected content type: {0}")]
    UnexpectedContentType(String),

    /// The service refused to issue an access token.
    #[error("Authentication failed: {0}")]
    Auth(String),
}

/// Returns the body of a successful JSON response.
///
/// Fails if the response has an unsuccessful status code or a content type
/// other than `application/json`.
pub async fn json_body(resp: Response) -> HTTPResult<String> {
    if !resp.status().is_success() {
        return Err(HTTPError::Http(resp.status()));
    }

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .ok_or(HTTPError::MissingContentType)?
        .to_str()?;
    if !content_type.starts_with("application/json") {
        Err(HTTPError::UnexpectedContentType(content_type.to_string()))
    } else {
        Ok(resp.text().await?)
    }
}
