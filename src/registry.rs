//! The configuration registry handed to the map renderer.
//!
//! [`ConfigurationRegistry::load`] builds the shipped UK map data: main
//! settings, the sixteen UK statistical regions, and empty override
//! containers. The value is immutable once built; pass it to consumers
//! explicitly, or use [`ConfigurationRegistry::global`] where that is not
//! practical.
//!
//! # Usage
//!
//! ```
//! use ukmap::registry::ConfigurationRegistry;
//!
//! let registry = ConfigurationRegistry::load();
//! assert_eq!(registry.get_region("GL").unwrap().name, "Greater London");
//! assert!(registry.get_region("gl").is_err());
//! assert_eq!(registry.list_regions().count(), 16);
//! ```

use crate::error::RegistryError;
use crate::models::{
    LabelEntry, Legend, LocationEntry, LocationType, MainSettings, MapColor, MapWidth, PopupMode,
    RegionEntry, RegionOverride, RegionTable,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// The shipped regions as (code, name, description), in declaration order.
pub const UK_REGIONS: &[(&str, &str, &str)] = &[
    ("EE", "East", " "),
    ("EM", "East Midlands", " "),
    ("ES", "Eastern Scotland", " "),
    ("EW", "East Wales", " "),
    ("GL", "Greater London", " "),
    ("HI", "Highlands and Islands", " "),
    ("NE", "North East", " "),
    ("NI", "Northern Ireland", " "),
    ("NS", "North Eastern Scotland", " "),
    ("NW", "North West", " "),
    ("SE", "South East", " "),
    ("SS", "South Western Scotland", " "),
    ("SW", "South West", " "),
    ("WM", "West Midlands", " "),
    ("WV", "West Wales and the Valleys", " "),
    ("YH", "Yorkshire and the Humber", " "),
];

/// Everything the map widget reads, in its wire shape.
///
/// Deserializing validates, so a value of this type is always well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRegistry")]
pub struct ConfigurationRegistry {
    main_settings: MainSettings,
    state_specific: RegionTable,
    locations: BTreeMap<String, LocationEntry>,
    labels: BTreeMap<String, LabelEntry>,
    legend: Legend,
    regions: BTreeMap<String, RegionOverride>,
}

/// Wire shape before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawRegistry {
    main_settings: MainSettings,
    state_specific: RegionTable,
    #[serde(default)]
    locations: BTreeMap<String, LocationEntry>,
    #[serde(default)]
    labels: BTreeMap<String, LabelEntry>,
    #[serde(default)]
    legend: Legend,
    #[serde(default)]
    regions: BTreeMap<String, RegionOverride>,
}

impl TryFrom<RawRegistry> for ConfigurationRegistry {
    type Error = RegistryError;

    fn try_from(raw: RawRegistry) -> Result<Self, Self::Error> {
        Self::from_parts(
            raw.main_settings,
            raw.state_specific,
            raw.locations,
            raw.labels,
            raw.legend,
            raw.regions,
        )
    }
}

impl ConfigurationRegistry {
    /// Builds the shipped registry.
    ///
    /// Never fails: the data is a literal and a unit test keeps it valid.
    pub fn load() -> Self {
        let registry = Self {
            main_settings: default_main_settings(),
            state_specific: uk_region_table(),
            locations: BTreeMap::new(),
            labels: BTreeMap::new(),
            legend: Legend::default(),
            regions: BTreeMap::new(),
        };
        debug_assert!(registry.validate().is_ok(), "shipped map data is malformed");
        registry
    }

    /// Returns a process-wide shared copy of [`load`](Self::load).
    ///
    /// Built on first use; never mutated.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<ConfigurationRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            tracing::debug!("Building shared map registry");
            Self::load()
        })
    }

    /// Assembles a registry from parts and validates it.
    pub fn from_parts(
        main_settings: MainSettings,
        state_specific: RegionTable,
        locations: BTreeMap<String, LocationEntry>,
        labels: BTreeMap<String, LabelEntry>,
        legend: Legend,
        regions: BTreeMap<String, RegionOverride>,
    ) -> Result<Self, RegistryError> {
        let registry = Self {
            main_settings,
            state_specific,
            locations,
            labels,
            legend,
            regions,
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Returns the map-wide settings.
    pub fn main_settings(&self) -> &MainSettings {
        &self.main_settings
    }

    /// Looks up a region by its short code.
    ///
    /// Matching is exact and case-sensitive: `"ee"` does not find `"EE"`.
    pub fn get_region(&self, code: &str) -> Result<&RegionEntry, RegistryError> {
        self.state_specific
            .get(code)
            .ok_or_else(|| RegistryError::not_found(code))
    }

    /// Iterates every region in declaration order.
    ///
    /// Each call starts a fresh iteration.
    pub fn list_regions(&self) -> impl ExactSizeIterator<Item = &RegionEntry> + '_ {
        self.state_specific.iter()
    }

    /// Returns the whole region table.
    pub fn region_table(&self) -> &RegionTable {
        &self.state_specific
    }

    /// Returns per-location entries keyed by id.
    pub fn locations(&self) -> &BTreeMap<String, LocationEntry> {
        &self.locations
    }

    /// Returns free-standing labels keyed by id.
    pub fn labels(&self) -> &BTreeMap<String, LabelEntry> {
        &self.labels
    }

    /// Returns the legend block.
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Returns region-group style overrides keyed by id.
    pub fn region_overrides(&self) -> &BTreeMap<String, RegionOverride> {
        &self.regions
    }

    /// Checks every field and reports all problems at once.
    ///
    /// Colors must be hex or named, opacities within 0-1, sizes and times
    /// non-negative, region codes non-empty, and region overrides may only
    /// reference known region codes.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut problems = Vec::new();

        self.main_settings.collect_problems(&mut problems);
        self.state_specific.collect_problems(&mut problems);

        for (id, location) in &self.locations {
            location.collect_problems(id, &mut problems);
        }
        for (id, label) in &self.labels {
            label.collect_problems(id, &mut problems);
            if let Some(parent) = &label.parent_id {
                if !self.state_specific.contains(parent) {
                    problems.push(format!("labels.{id}.parent_id: unknown region '{parent}'"));
                }
            }
        }
        self.legend.collect_problems(&mut problems);
        for (id, group) in &self.regions {
            group.collect_problems(id, &mut problems);
            for code in &group.states {
                if !self.state_specific.contains(code) {
                    problems.push(format!("regions.{id}.states: unknown region '{code}'"));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            tracing::warn!(count = problems.len(), "Map configuration failed validation");
            Err(RegistryError::MalformedConfiguration { problems })
        }
    }
}

impl Default for ConfigurationRegistry {
    fn default() -> Self {
        Self::load()
    }
}

fn uk_region_table() -> RegionTable {
    let mut table = RegionTable::new();
    for &(code, name, description) in UK_REGIONS {
        let inserted = table.insert(RegionEntry::new(code, name, description));
        debug_assert!(inserted.is_ok(), "duplicate region code '{code}' in UK_REGIONS");
    }
    table
}

fn default_main_settings() -> MainSettings {
    MainSettings {
        // General
        width: MapWidth::Responsive,
        background_color: MapColor::from("#FFFFFF"),
        background_transparent: true,
        border_color: MapColor::from("#ffffff"),
        popups: PopupMode::Detect,

        // State defaults
        state_description: "State description".to_string(),
        state_color: MapColor::from("#616d57"),
        state_hover_color: MapColor::from("#88a4bc"),
        state_url: "http://simplemaps.com".to_string(),
        border_size: 1.5,
        all_states_inactive: false,
        all_states_zoomable: true,

        // Location defaults
        location_description: "Location description".to_string(),
        location_color: MapColor::from("#FF0067"),
        location_opacity: 0.8,
        location_hover_opacity: 1.0,
        location_url: String::new(),
        location_size: 25,
        location_type: LocationType::Square,
        location_image_source: "frog.png".to_string(),
        location_border_color: MapColor::from("#FFFFFF"),
        location_border: 2.0,
        location_hover_border: 2.5,
        all_locations_inactive: false,
        all_locations_hidden: false,

        // Label defaults
        label_color: MapColor::from("#d5ddec"),
        label_hover_color: MapColor::from("#d5ddec"),
        label_size: 22,
        label_font: "Arial".to_string(),
        hide_labels: false,
        manual_zoom: false,
        back_image: false,
        arrow_color: MapColor::from("#cecece"),
        arrow_color_border: MapColor::from("#808080"),
        initial_back: false,
        initial_zoom: -1,
        initial_zoom_solo: false,
        region_opacity: 1.0,
        region_hover_opacity: 0.6,
        zoom_out_incrementally: true,
        zoom_percentage: 0.99,
        zoom_time: 0.5,

        // Popups
        popup_color: MapColor::from("white"),
        popup_opacity: 0.9,
        popup_shadow: 1.0,
        popup_corners: 5.0,
        popup_font: "12px/1.5 Verdana, Arial, Helvetica, sans-serif".to_string(),
        popup_nocss: false,

        // Advanced
        div: "map".to_string(),
        auto_load: true,
        url_new_tab: false,
        images_directory: "default".to_string(),
        fade_time: 0.1,
        link_text: "View Website".to_string(),
        state_image_url: String::new(),
        state_image_position: String::new(),
        location_image_url: String::new(),
    }
}
