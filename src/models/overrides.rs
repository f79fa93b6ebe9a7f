//! Per-entity containers: locations, labels, legend entries and region overrides.
//!
//! The shipped data leaves all of these empty, so their element schemas are
//! placeholders inferred from the [`MainSettings`](super::MainSettings) defaults
//! they override. They are unverified against the renderer and deliberately
//! permissive: every known attribute is optional, values of an unexpected
//! type are kept as written in [`Attribute::Raw`], and unrecognized keys are
//! kept in `extra`. Everything is written back unchanged.
//!
//! Only values that clearly have the expected type are validated. The
//! renderer's inherit marker `"default"` is never a problem.

use crate::models::color::MapColor;
use crate::models::settings::LocationType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keys not covered by a placeholder schema, kept verbatim.
pub type ExtraFields = BTreeMap<String, serde_json::Value>;

/// Value that tells the renderer to use the matching `main_settings` default.
pub const INHERIT: &str = "default";

/// An override attribute: the expected type, or whatever else was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attribute<T> {
    /// Value of the expected type
    Typed(T),
    /// Any other value, e.g. `"default"` or a number written as a string
    Raw(serde_json::Value),
}

impl<T> Attribute<T> {
    /// Returns the typed value, if the attribute has one.
    pub fn typed(&self) -> Option<&T> {
        match self {
            Self::Typed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns true for the `"default"` inherit marker.
    pub fn is_inherit(&self) -> bool {
        matches!(self, Self::Raw(serde_json::Value::String(s)) if s == INHERIT)
    }
}

impl Attribute<f64> {
    /// Reads the attribute as a number, accepting numeric strings like `"53.8"`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Typed(value) => Some(*value),
            Self::Raw(serde_json::Value::String(s)) => s.trim().parse().ok(),
            Self::Raw(_) => None,
        }
    }
}

impl<T> From<T> for Attribute<T> {
    fn from(value: T) -> Self {
        Self::Typed(value)
    }
}

/// A point marker on the map (`locations`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Latitude in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<Attribute<f64>>,
    /// Longitude in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<Attribute<f64>>,
    /// Popup text (overrides `location_description`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Marker color (overrides `location_color`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<MapColor>,
    /// Marker opacity (overrides `location_opacity`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Attribute<f64>>,
    /// Link (overrides `location_url`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Marker size (overrides `location_size`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Attribute<f64>>,
    /// Marker shape (overrides `location_type`)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub location_type: Option<Attribute<LocationType>>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A free-standing text label (`labels`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelEntry {
    /// Label text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Region code the label belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Horizontal position in map coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Attribute<f64>>,
    /// Vertical position in map coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Attribute<f64>>,
    /// Text color (overrides `label_color`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<MapColor>,
    /// Hover text color (overrides `label_hover_color`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_color: Option<MapColor>,
    /// Font size (overrides `label_size`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Attribute<f64>>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One legend row mapping a color to a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Row text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Swatch color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<MapColor>,
    /// Swatch shape
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub shape: Option<Attribute<LocationType>>,
    /// Comma-separated ids highlighted by this row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// The legend block; `entries` is always present on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    /// Rows in display order
    #[serde(default)]
    pub entries: Vec<LegendEntry>,
}

/// Style overrides for a group of regions (`regions` on the wire).
///
/// Not to be confused with [`RegionEntry`](super::RegionEntry), which names a
/// single region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionOverride {
    /// Group name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Region codes in the group
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<String>,
    /// Fill color (overrides `state_color`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<MapColor>,
    /// Hover fill color (overrides `state_hover_color`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_color: Option<MapColor>,
    /// Link (overrides `state_url`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Popup text (overrides `state_description`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtraFields,
}

fn check_color(path: &str, color: Option<&MapColor>, problems: &mut Vec<String>) {
    if let Some(color) = color {
        if color.as_str() == INHERIT {
            return;
        }
        if let Err(e) = color.to_rgb() {
            problems.push(format!("{path}: {e}"));
        }
    }
}

fn check_range(
    path: &str,
    value: Option<&Attribute<f64>>,
    min: f64,
    max: f64,
    problems: &mut Vec<String>,
) {
    if let Some(value) = value.and_then(Attribute::as_number) {
        if !(min..=max).contains(&value) {
            problems.push(format!("{path}: {value} is outside {min}..{max}"));
        }
    }
}

impl LocationEntry {
    pub(crate) fn collect_problems(&self, id: &str, problems: &mut Vec<String>) {
        check_color(&format!("locations.{id}.color"), self.color.as_ref(), problems);
        check_range(
            &format!("locations.{id}.opacity"),
            self.opacity.as_ref(),
            0.0,
            1.0,
            problems,
        );
        check_range(&format!("locations.{id}.lat"), self.lat.as_ref(), -90.0, 90.0, problems);
        check_range(&format!("locations.{id}.lng"), self.lng.as_ref(), -180.0, 180.0, problems);
    }
}

impl LabelEntry {
    pub(crate) fn collect_problems(&self, id: &str, problems: &mut Vec<String>) {
        check_color(&format!("labels.{id}.color"), self.color.as_ref(), problems);
        check_color(
            &format!("labels.{id}.hover_color"),
            self.hover_color.as_ref(),
            problems,
        );
    }
}

impl Legend {
    pub(crate) fn collect_problems(&self, problems: &mut Vec<String>) {
        for (index, entry) in self.entries.iter().enumerate() {
            check_color(
                &format!("legend.entries[{index}].color"),
                entry.color.as_ref(),
                problems,
            );
        }
    }
}

impl RegionOverride {
    pub(crate) fn collect_problems(&self, id: &str, problems: &mut Vec<String>) {
        check_color(&format!("regions.{id}.color"), self.color.as_ref(), problems);
        check_color(
            &format!("regions.{id}.hover_color"),
            self.hover_color.as_ref(),
            problems,
        );
    }
}
