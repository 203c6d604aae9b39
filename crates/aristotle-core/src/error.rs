//! Error types and handling for aristotle-core operations.
//!
//! Only a small part of the pipeline can fail in a way the user sees. The
//! stream reader recovers from malformed bytes locally, the formatters fall
//! back to simpler strategies when their patterns miss, and the classifier
//! silently drops lines it cannot interpret. What remains are transport
//! failures and the ambient concerns around them (configuration and
//! serialization).
//!
//! ## Error Categories
//!
//! - **Transport**: network failures reported by the HTTP client
//! - **HTTP status**: the service answered with a non-2xx status
//! - **Configuration**: invalid settings or config files
//! - **Serialization**: JSON/TOML conversion failures
//!
//! Nothing is retried automatically:
//!
//! ```rust
//! use aristotle_core::Error;
//!
//! let error = Error::HttpStatus { status: 502 };
//! assert!(error.is_transport());
//! assert_eq!(error.category(), "http_status");
//! assert!(error.to_string().contains("502"));
//! ```

use thiserror::Error;

/// The main error type for aristotle-core operations.
///
/// All fallible public functions return `Result<T, Error>`. The `Display`
/// text of the transport variants is what ends up in the user-visible error
/// log entry, so it always carries the status code or the underlying message.
#[derive(Error, Debug)]
pub enum Error {
    /// Network or transport failure while talking to the service.
    ///
    /// The underlying `reqwest::Error` is preserved so the message shown to
    /// the user is the one reported by the HTTP stack.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("Request failed with HTTP status {status}")]
    HttpStatus {
        /// Status code returned by the server.
        status: u16,
    },

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - Invalid TOML syntax in the config file
    /// - Non-numeric timeout values in environment overrides
    /// - Config directory cannot be determined on this platform
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured service URL cannot be parsed or joined.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Serialization or deserialization failed.
    ///
    /// Raised when a `/query` or `/health` body is not the expected JSON
    /// shape. Event-stream lines never raise this; they are discarded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl Error {
    /// Whether this error came from talking to the service.
    ///
    /// Transport errors are the only failures surfaced to the user as an
    /// error-styled log entry; everything else is a local setup problem.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    /// Get the error category as a string identifier.
    ///
    /// - `"transport"` - network failures
    /// - `"http_status"` - non-2xx responses
    /// - `"config"` - configuration and settings
    /// - `"invalid_url"` - service URL problems
    /// - `"serialization"` - data format conversion
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::HttpStatus { .. } => "http_status",
            Self::Config(_) => "config",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
