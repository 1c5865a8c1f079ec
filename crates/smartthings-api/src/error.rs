use thiserror::Error;

/// Top-level error type for the `smartthings-api` crate.
///
/// Covers every failure mode of a request/response round trip:
/// transport, endpoint configuration, response shape, and remote status.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The `reqwest::Client` could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    // ── Endpoint ────────────────────────────────────────────────────
    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL parses but cannot carry a path (e.g. `mailto:`).
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    // ── Authentication ──────────────────────────────────────────────
    /// The bearer token cannot be sent as an HTTP header value.
    #[error("Invalid bearer token: {message}")]
    InvalidToken { message: String },

    // ── Inventory reads ─────────────────────────────────────────────
    /// Non-success status on a collection read.
    #[error("Unexpected HTTP {status} from SmartThings: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Body was not JSON, or was missing the expected fields.
    #[error("Unexpected response shape: {message}")]
    UnexpectedResponse { message: String, body: String },

    // ── Commands ────────────────────────────────────────────────────
    /// Non-success status on a device command or scene execution.
    #[error("Remote command failed (HTTP {status}): {body}")]
    RemoteCommand { status: u16, body: String },
}

impl Error {
    /// The HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } | Self::RemoteCommand { status, .. } => {
                Some(*status)
            }
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the service rejected the bearer token.
    ///
    /// Token validity is never checked locally, so this is the only
    /// place an expired or revoked token shows up.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Returns `true` if this is a transient error a caller might retry.
    ///
    /// The client itself never retries.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::UnexpectedStatus { status, .. } | Self::RemoteCommand { status, .. } => {
                *status == 429 || *status >= 500
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_command_exposes_status() {
        let err = Error::RemoteCommand {
            status: 401,
            body: "unauthorized".into(),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
        assert!(!err.is_transient());
    }

    #[test]
    fn server_errors_are_transient() {
        let err = Error::UnexpectedStatus {
            status: 503,
            body: String::new(),
        };
        assert!(err.is_transient());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn shape_errors_carry_no_status() {
        let err = Error::UnexpectedResponse {
            message: "missing field `items`".into(),
            body: "{}".into(),
        };
        assert_eq!(err.status(), None);
        assert!(!err.is_transient());
    }
}
