//! aristotle CLI - Terminal client for the Aristotle research assistant
//!
//! The binary in `main.rs` only maps the result of [`run`] to an exit code;
//! argument parsing, configuration and command dispatch live here.
use anyhow::{Result, anyhow};
use aristotle_core::AristotleClient;
use clap::{CommandFactory, Parser};

mod cli;
mod commands;
pub mod error;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::utils::{initialize_logging, settings};

/// Execute the aristotle CLI with the currently configured environment.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the service cannot be
/// reached, or no query was given.
pub async fn run() -> Result<()> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();
    initialize_logging(&cli)?;
    execute_command(cli).await
}

async fn execute_command(cli: Cli) -> Result<()> {
    let output = cli.format;
    let default_query = cli.default_query();
    if cli.command.is_none() && default_query.is_none() {
        Cli::command().print_help()?;
        return Err(CliError::usage(anyhow!("no query given")).reported().into());
    }

    let config = settings::resolve(&cli)?;
    let client = AristotleClient::new(&config.api).map_err(CliError::usage)?;

    match cli.command {
        Some(Commands::Query { query }) => {
            commands::run_query(&client, &joined(&query, "query")?, output).await
        },
        Some(Commands::Research { topic }) => {
            commands::run_research(&client, &joined(&topic, "topic")?, output).await
        },
        Some(Commands::Health) => commands::check_health(&client, output).await,
        None => match default_query {
            Some(query) => commands::run_query(&client, &query, output).await,
            None => Ok(()),
        },
    }
}

fn joined(words: &[String], what: &str) -> Result<String, CliError> {
    let text = words.join(" ");
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CliError::usage(anyhow!("the {what} must not be empty")));
    }
    Ok(trimmed.to_string())
}
