// ── Account configuration ──
//
// Describes *how* to reach the SmartThings API: the bearer token, the
// endpoint, and the request timeout. Hosts either build an `AccountConfig`
// in code or load one from `SMARTTHINGS_*` environment variables.

use std::time::Duration;

use figment::Figment;
use figment::providers::Env;
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use smartthings_api::{DEFAULT_BASE_URL, TransportConfig};

use crate::error::Error;

/// Prefix for environment configuration (`SMARTTHINGS_TOKEN`, ...).
pub const ENV_PREFIX: &str = "SMARTTHINGS_";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for one SmartThings account.
///
/// `Debug` never prints the token.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Bearer token (personal access token or OAuth access token).
    pub token: SecretString,
    /// API endpoint. Defaults to `https://api.smartthings.com`.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl AccountConfig {
    /// Config for `token` against the public cloud endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            base_url: default_base_url(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `SMARTTHINGS_TOKEN`, `SMARTTHINGS_BASE_URL`, and
    /// `SMARTTHINGS_TIMEOUT` (seconds). Only the token is required.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_figment(&Figment::from(Env::prefixed(ENV_PREFIX)))
    }

    /// Load from any figment (lets hosts layer their own providers).
    pub fn from_figment(figment: &Figment) -> Result<Self, Error> {
        let raw: RawConfig = figment.extract()?;
        let base_url = Url::parse(&raw.base_url).map_err(smartthings_api::Error::from)?;

        Ok(Self {
            token: SecretString::from(raw.token),
            base_url,
            timeout: Duration::from_secs(raw.timeout),
        })
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout,
        }
    }
}

#[derive(Deserialize)]
struct RawConfig {
    token: String,
    #[serde(default = "default_base_url_string")]
    base_url: String,
    #[serde(default = "default_timeout")]
    timeout: u64,
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

fn default_base_url_string() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
