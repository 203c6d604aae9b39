//! CLI error handling with semantic exit codes.
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments or configuration |
//! | 5 | `Network` | The service could not be reached or answered with an error |
//!
//! Errors raised by `aristotle-core` are categorised from their own
//! [`category`](aristotle_core::Error::category); anything else is internal.

use std::fmt;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or configuration (exit code 2).
    Usage = 2,

    /// Transport failure or non-success HTTP status (exit code 5).
    Network = 5,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::Network => "network error",
        }
    }

    /// Category of a core library error.
    #[must_use]
    pub fn from_core(err: &aristotle_core::Error) -> Self {
        if err.is_transport() {
            return Self::Network;
        }
        match err.category() {
            "config" | "invalid_url" => Self::Usage,
            _ => Self::Internal,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
    /// Whether the user has already been shown this error.
    pub reported: bool,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
            reported: false,
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Create a network error.
    pub fn network(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Network, source)
    }

    /// Mark the error as already shown, so `main` only sets the exit code.
    #[must_use]
    pub const fn reported(mut self) -> Self {
        self.reported = true;
        self
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    // Display already shows the wrapped error, so the chain continues below it
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.source()
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// An explicit [`CliError`] wins; otherwise the first core error in the
/// chain decides; otherwise the error is internal.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    category_of(err).exit_code()
}

/// Category of an arbitrary error chain.
#[must_use]
pub fn category_of(err: &anyhow::Error) -> ErrorCategory {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.category;
    }
    err.chain()
        .find_map(|cause| cause.downcast_ref::<aristotle_core::Error>())
        .map_or(ErrorCategory::Internal, ErrorCategory::from_core)
}

/// Whether the error was already shown to the user.
#[must_use]
pub fn already_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<CliError>().is_some_and(|e| e.reported)
}
