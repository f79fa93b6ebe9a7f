//! CLI command handlers for ukmap.
//!
//! This module provides headless, scriptable access to the map data for
//! inspection, export and validation.

pub mod common;
pub mod config;
pub mod export;
pub mod region;
pub mod settings;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use region::{RegionArgs, RegionsArgs};
pub use settings::SettingsArgs;
pub use validate::ValidateArgs;
