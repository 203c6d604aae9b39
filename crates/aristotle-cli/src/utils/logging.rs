//! Logging initialization and configuration.
//!
//! This module handles setting up the tracing subscriber and color control
//! based on CLI flags and environment variables.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;

/// Log level selected by the global flags.
///
/// `--verbose` wins over everything. Machine-readable output is kept clean
/// by logging errors only.
pub const fn level_for(cli: &Cli) -> Level {
    if cli.verbose {
        Level::DEBUG
    } else if cli.quiet || cli.machine_output() {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Initialize the logging subsystem based on CLI flags.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(cli))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Color control: disable when requested, NO_COLOR is set, or when emitting machine output
    let env_no_color = std::env::var("NO_COLOR").ok().is_some();
    if cli.no_color || env_no_color || cli.machine_output() {
        color_control::set_override(false);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    fn level(args: &[&str]) -> Level {
        let cli = Cli::try_parse_from(args).unwrap();
        level_for(&cli)
    }

    #[test]
    fn test_levels_follow_flags() {
        assert_eq!(level(&["aristotle", "health"]), Level::WARN);
        assert_eq!(level(&["aristotle", "health", "-q"]), Level::ERROR);
        assert_eq!(level(&["aristotle", "health", "-v"]), Level::DEBUG);
    }

    #[test]
    fn test_json_output_only_logs_errors_unless_verbose() {
        assert_eq!(level(&["aristotle", "health", "-f", "json"]), Level::ERROR);
        assert_eq!(level(&["aristotle", "health", "-f", "json", "-v"]), Level::DEBUG);
    }
}
