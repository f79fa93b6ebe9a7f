//! Shared test fixtures for registry and CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// The widget's original data file, verbatim.
pub const ORIGINAL_MAPDATA_JS: &str = include_str!("mapdata.js");

/// Region codes in shipped declaration order.
pub const SHIPPED_CODES: [&str; 16] = [
    "EE", "EM", "ES", "EW", "GL", "HI", "NE", "NI", "NS", "NW", "SE", "SS", "SW", "WM", "WV",
    "YH",
];

/// Path to the ukmap binary
pub fn ukmap_bin() -> &'static str {
    env!("CARGO_BIN_EXE_ukmap")
}

/// Creates a Command with an isolated, empty config directory.
///
/// The returned `TempDir` must be kept alive for the duration of the command.
pub fn isolated_command(args: &[&str]) -> (Command, TempDir) {
    let config_dir = TempDir::new().expect("Failed to create temp config dir");
    let cmd = command_with_config_dir(args, config_dir.path());
    (cmd, config_dir)
}

/// Creates a Command that uses the given config directory.
pub fn command_with_config_dir(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(ukmap_bin());
    cmd.env("UKMAP_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Writes `content` to `name` inside a new temp directory.
pub fn temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (path, dir)
}

/// Returns the shipped registry as a mutable JSON value for corruption tests.
pub fn shipped_json_value() -> serde_json::Value {
    serde_json::to_value(ukmap::ConfigurationRegistry::load()).expect("serialize registry")
}
