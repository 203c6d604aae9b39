#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| tempfile::tempdir().expect("failed to create config dir for tests"))
        .path()
}

/// Create an `aristotle` command isolated from the user's config and
/// environment.
pub fn aristotle_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aristotle"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("ARISTOTLE_CONFIG", config_dir().join("missing.toml"));
    cmd.env_remove("ARISTOTLE_API_URL");
    cmd.env_remove("ARISTOTLE_TIMEOUT_SECS");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// `aristotle_cmd` pointed at a mock service.
#[allow(dead_code)]
pub fn aristotle_at(uri: &str) -> Command {
    let mut cmd = aristotle_cmd();
    cmd.env("ARISTOTLE_API_URL", uri);
    cmd
}
