//! # Output Formatting
//!
//! Every command produces a [`StructuredDocument`](aristotle_core::StructuredDocument)
//! or a small serialisable payload; this module turns those into what is
//! written to stdout.
//!
//! ## Supported Formats
//!
//! - **Text**: colored terminal rendering of the document
//! - **JSON**: the document blocks plus request metadata, pretty-printed
//! - **HTML**: the document as an HTML fragment, escaped
//!
//! Research progress always goes to stderr through [`progress`], so stdout
//! only ever carries the selected format.

pub mod json;
pub mod progress;
pub mod text;

/// Output format options supported by the CLI.
///
/// ```bash
/// aristotle "/audit 10"                     # Text (default)
/// aristotle "/audit 10" --format json | jq '.blocks'
/// aristotle "/search rag" --format html > results.html
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty text output (default)
    #[default]
    Text,
    /// Single JSON object
    Json,
    /// HTML fragment
    Html,
}
