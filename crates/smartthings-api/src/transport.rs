// Transport configuration for building the reqwest::Client.
//
// The SmartThings API needs the same two headers on every call, so they are
// installed as client-wide default headers here instead of per request.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Versioned media type the API expects in `Accept`.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.smartthings+json;v=1";

const USER_AGENT: &str = concat!("smartthings-rs/", env!("CARGO_PKG_VERSION"));

/// Transport settings shared by every request the client makes.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` that sends `Accept` and
    /// `Authorization: Bearer <token>` on every request.
    ///
    /// The authorization header value is marked sensitive so it never
    /// shows up in reqwest's `Debug` output.
    pub fn build_client(&self, token: &SecretString) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .default_headers(default_headers(token)?)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))
    }
}

fn default_headers(token: &SecretString) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));

    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|e| Error::InvalidToken {
            message: format!("invalid header value: {e}"),
        })?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    Ok(headers)
}
