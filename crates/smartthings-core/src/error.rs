// ── Core error types ──
//
// API failures pass through unchanged: a caller matching on
// `smartthings_api::Error` sees the transport error, status code, or shape
// error exactly as the api crate produced it.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A request failed, or a response had the wrong status or shape.
    #[error(transparent)]
    Api(#[from] smartthings_api::Error),

    /// Environment configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(Box<figment::Error>),

    /// The blocking facade could not start its runtime.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl Error {
    /// The API error underneath, if this came from a request.
    pub fn api(&self) -> Option<&smartthings_api::Error> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status code of a failed request, if any.
    pub fn status(&self) -> Option<u16> {
        self.api().and_then(smartthings_api::Error::status)
    }
}
