//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the names the map widget expects.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "UK Map Data";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "ukmap";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ukmap";

/// Environment variable that overrides the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "UKMAP_CONFIG_DIR";

/// Global variable the map widget reads its data from.
pub const DEFAULT_VARIABLE_NAME: &str = "simplemaps_ukmap_mapdata";

/// Number of regions in the shipped registry.
pub const REGION_COUNT: usize = 16;
