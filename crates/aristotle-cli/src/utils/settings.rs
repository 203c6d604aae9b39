//! Configuration resolution for a single invocation.

use aristotle_core::Config;

use crate::cli::Cli;
use crate::error::CliError;

/// Load the layered configuration and apply command-line overrides.
///
/// Order: defaults, config file, `ARISTOTLE_*` variables, `--api-url`.
pub fn resolve(cli: &Cli) -> Result<Config, CliError> {
    let mut config = Config::load().map_err(CliError::usage)?;
    apply_cli_overrides(&mut config, cli);
    tracing::debug!(base_url = %config.api.base_url, "Configuration resolved");
    Ok(config)
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(url) = cli.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.to_string();
    }
}
