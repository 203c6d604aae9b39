//! # CLI Structure and Argument Parsing
//!
//! `aristotle` follows the command-subcommand pattern with a default command:
//!
//! ```bash
//! # Default: submit a query (no subcommand)
//! aristotle "/search graph neural networks 5"
//! aristotle what is contrastive learning
//!
//! # Explicit commands
//! aristotle query "/fact sparse attention scales context=longformer"
//! aristotle research "perovskite solar cell stability"
//! aristotle health
//! ```
//!
//! Global options apply to every command: `--verbose`, `--quiet`,
//! `--no-color`, `--api-url` and `--format`.

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Main CLI structure for the `aristotle` command.
///
/// When invoked without a subcommand the positional words are joined and
/// submitted as a query:
///
/// ```bash
/// aristotle /audit 10   # Equivalent to: aristotle query /audit 10
/// ```
#[derive(Parser, Clone, Debug)]
#[command(name = "aristotle")]
#[command(version)]
#[command(about = "aristotle - Terminal client for the Aristotle research assistant", long_about = None)]
#[command(
    override_usage = "aristotle [COMMAND] [COMMAND_ARGS]... [OPTIONS]\n       aristotle [QUERY]... [OPTIONS]"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Positional query words used when no explicit command is provided
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Service base URL (overrides config file and `ARISTOTLE_API_URL`)
    #[arg(long = "api-url", global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Available subcommands.
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Submit a query or slash command and format the reply
    ///
    /// Slash commands: /search, /sum, /fact, /factpaper, /audit, /niche.
    /// Anything else is sent as a plain question.
    Query {
        /// Query text; multiple words are joined with spaces
        #[arg(required = true, value_name = "QUERY")]
        query: Vec<String>,
    },

    /// Run the research pipeline on a topic, streaming its progress
    Research {
        /// Research topic; multiple words are joined with spaces
        #[arg(required = true, value_name = "TOPIC")]
        topic: Vec<String>,
    },

    /// Check whether the service is reachable
    Health,
}

impl Cli {
    /// The joined default query, if one was given.
    pub fn default_query(&self) -> Option<String> {
        let joined = self.query.join(" ");
        let trimmed = joined.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Whether the selected output is for machines rather than people.
    pub const fn machine_output(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}
