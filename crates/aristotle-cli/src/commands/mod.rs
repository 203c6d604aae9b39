//! Command implementations for the CLI.
//!
//! Each command receives a ready [`AristotleClient`](aristotle_core::AristotleClient)
//! and the selected [`OutputFormat`](crate::output::OutputFormat), and
//! writes its result to stdout.

mod health;
mod query;
mod research;

pub use health::check_health;
pub use query::run_query;
pub use research::run_research;
