//! Health command implementation

use anyhow::{Context, Result, anyhow};
use aristotle_core::AristotleClient;
use colored::Colorize;

use crate::error::CliError;
use crate::output::OutputFormat;
use crate::output::json::{self, HealthOutput};

/// Ask the service whether it is up.
///
/// An unhealthy answer is reported as a network error so scripts can rely
/// on the exit code.
pub async fn check_health(client: &AristotleClient, output: OutputFormat) -> Result<()> {
    let url = client.base_url().as_str();
    let status = client
        .health()
        .await
        .with_context(|| format!("Health check against {url} failed"))?;
    let healthy = status.is_healthy();

    match output {
        OutputFormat::Json => json::print(&HealthOutput {
            url,
            healthy,
            status: &status,
        })?,
        OutputFormat::Text | OutputFormat::Html => {
            let label = if healthy {
                status.status.green()
            } else {
                status.status.red()
            };
            println!("{} {label}", url.bold());
            if !status.message.is_empty() {
                println!("{}", status.message);
            }
        },
    }

    if healthy {
        Ok(())
    } else {
        Err(CliError::network(anyhow!("service reported status '{}'", status.status)).into())
    }
}
