//! Shared helpers for the CLI commands.
//!
//! - [`logging`]: tracing subscriber and color control from global flags
//! - [`settings`]: configuration loading with command-line overrides

pub mod logging;
pub mod settings;

pub use logging::initialize_logging;
