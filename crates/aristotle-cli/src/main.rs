//! aristotle CLI - Terminal client for the Aristotle research assistant
//!
//! Exit codes follow [`aristotle_cli::error::ErrorCategory`].

use std::process::ExitCode;

use aristotle_cli::error::{already_reported, exit_code_from_error};
use colored::Colorize;

#[tokio::main]
async fn main() -> ExitCode {
    match aristotle_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !already_reported(&err) {
                eprintln!("{} {err:#}", "error:".red().bold());
            }
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
