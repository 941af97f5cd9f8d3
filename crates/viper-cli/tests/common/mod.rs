//! Shared helpers for the `viper` end-to-end tests.

use assert_cmd::cargo;
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into a run.
const LEAKY_VARS: &[&str] = &[
    "RUST_LOG",
    "NO_COLOR",
    "VIPER_PROFILE__NAME",
    "VIPER_OUTPUT__FORMAT",
    "VIPER_OUTPUT__NO_COLOR",
    "VIPER_WIRING__STRICT",
];

/// A `viper` command isolated from the user's real config and environment.
pub fn viper(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("viper");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    for var in LEAKY_VARS {
        cmd.env_remove(var);
    }
    cmd
}
