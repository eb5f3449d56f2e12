//! Error types for scry-pager
//!
//! One [`Error`] enum for the whole crate, grouped by where a failure comes
//! from: configuration, the network, or the payload Scryfall sent back.
//!
//! A card record with missing fields is not an error. Those fields are `None`
//! in [`crate::model::CardRecord`].

use thiserror::Error;

/// The main error type for scry-pager
#[derive(Error, Debug)]
pub enum Error {
    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid YAML config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ------------------------------------------------------------------
    // Network
    // ------------------------------------------------------------------
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited by server, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("No response within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// A retryable failure that outlived the retry budget
    #[error("Gave up after {max_retries} retries: {last}")]
    MaxRetriesExceeded { max_retries: u32, last: Box<Error> },

    // ------------------------------------------------------------------
    // Payload
    // ------------------------------------------------------------------
    /// Scryfall answered with an `{"object": "error"}` body
    #[error("Scryfall error {status} ({code}): {details}")]
    Api {
        status: u16,
        code: String,
        details: String,
    },

    #[error("Malformed page from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    // ------------------------------------------------------------------
    // Local I/O
    // ------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn malformed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Transient failures the HTTP client may retry: transport errors,
    /// timeouts, 429 and the 5xx gateway family
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } | Error::Api { status, .. } => {
                matches!(status, 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }

    /// Failure of the transport rather than of the payload
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::HttpStatus { .. }
                | Error::RateLimited { .. }
                | Error::Timeout { .. }
                | Error::MaxRetriesExceeded { .. }
        )
    }

    /// The failure behind any retry wrapping
    pub fn root(&self) -> &Error {
        match self {
            Error::MaxRetriesExceeded { last, .. } => last.root(),
            other => other,
        }
    }
}

/// Result type alias for scry-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Prefix an error with what was being attempted
pub trait ResultExt<T> {
    fn context(self, message: impl Into<String>) -> Result<T>;

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.with_context(|| message.into())
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Other(format!("{}: {}", f(), e.into())))
    }
}
