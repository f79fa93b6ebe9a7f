//! Data models for the map configuration.
//!
//! This module contains the typed shapes of everything the map widget reads:
//! main settings, the region registry and the per-entity override containers.
//! Models are independent of the wire format and the CLI.

pub mod color;
pub mod overrides;
pub mod region;
pub mod settings;

// Re-export all model types
pub use color::{MapColor, RgbColor};
pub use overrides::{
    Attribute, ExtraFields, LabelEntry, Legend, LegendEntry, LocationEntry, RegionOverride, INHERIT,
};
pub use region::{RegionEntry, RegionTable};
pub use settings::{LocationType, MainSettings, MapWidth, PopupMode};
