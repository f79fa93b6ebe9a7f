//! UK Map Data Library
//!
//! This library provides the data contract for an interactive UK statistical
//! region map: typed map-wide settings, a registry of the sixteen UK regions,
//! the per-entity override containers, and the wire formats the map widget
//! reads (JSON and the `var simplemaps_ukmap_mapdata={...};` script).

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod registry;
pub mod wire;

pub use error::RegistryError;
pub use registry::ConfigurationRegistry;
