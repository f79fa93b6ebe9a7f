//! Map-wide display and behavior settings.
//!
//! [`MainSettings`] is the flat record the widget reads as `main_settings`.
//! Field names match the wire keys exactly and the set is closed: unknown keys
//! are rejected when parsing.

use crate::models::color::MapColor;
use crate::wire::yes_no;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Map width: fill the container, or a fixed pixel width.
///
/// Serialized as a string, `"responsive"` or the pixel count (`"700"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MapWidth {
    /// Scale with the containing element
    #[default]
    Responsive,
    /// Fixed width in pixels
    Fixed(u32),
}

impl TryFrom<String> for MapWidth {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "responsive" {
            return Ok(Self::Responsive);
        }
        // Canonical digits only: no sign, padding or leading zero
        let canonical = !value.starts_with(['+', '0']);
        match value.parse::<u32>() {
            Ok(px) if px > 0 && canonical => Ok(Self::Fixed(px)),
            _ => Err(format!(
                "invalid width '{value}': expected \"responsive\" or a pixel count"
            )),
        }
    }
}

impl From<MapWidth> for String {
    fn from(width: MapWidth) -> Self {
        width.to_string()
    }
}

impl fmt::Display for MapWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Responsive => f.write_str("responsive"),
            Self::Fixed(px) => write!(f, "{px}"),
        }
    }
}

/// When popups open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopupMode {
    /// Hover on pointer devices, click on touch devices
    #[default]
    Detect,
    /// Always on click
    OnClick,
    /// Always on hover
    OnHover,
}

/// Marker shape used for locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// Filled square
    #[default]
    Square,
    /// Filled circle
    Circle,
    /// Custom image (see `location_image_source`)
    Image,
    /// Filled triangle
    Triangle,
    /// Filled diamond
    Diamond,
    /// Five-point star
    Star,
    /// Heart
    Heart,
    /// Map pin
    Marker,
}

/// Default visual and behavioral options applied to the whole map.
///
/// Flags are native booleans here; they become `"yes"`/`"no"` only on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MainSettings {
    // General
    /// Map width
    pub width: MapWidth,
    /// Background color behind the map
    pub background_color: MapColor,
    /// Ignore `background_color` and draw no background
    #[serde(with = "yes_no")]
    pub background_transparent: bool,
    /// Color of region borders
    pub border_color: MapColor,
    /// Popup trigger mode
    pub popups: PopupMode,

    // State (region) defaults
    /// Popup text for regions without their own description
    pub state_description: String,
    /// Fill color of regions
    pub state_color: MapColor,
    /// Fill color of a hovered region
    pub state_hover_color: MapColor,
    /// Link opened when a region is clicked
    pub state_url: String,
    /// Border width in pixels
    pub border_size: f64,
    /// Disable interaction with every region
    #[serde(with = "yes_no")]
    pub all_states_inactive: bool,
    /// Allow zooming into every region
    #[serde(with = "yes_no")]
    pub all_states_zoomable: bool,

    // Location defaults
    /// Popup text for locations without their own description
    pub location_description: String,
    /// Marker color
    pub location_color: MapColor,
    /// Marker opacity (0-1)
    pub location_opacity: f64,
    /// Marker opacity while hovered (0-1)
    pub location_hover_opacity: f64,
    /// Link opened when a marker is clicked
    pub location_url: String,
    /// Marker size in pixels
    pub location_size: u32,
    /// Marker shape
    pub location_type: LocationType,
    /// Image file for `image` markers
    pub location_image_source: String,
    /// Marker border color
    pub location_border_color: MapColor,
    /// Marker border width
    pub location_border: f64,
    /// Marker border width while hovered
    pub location_hover_border: f64,
    /// Disable interaction with every location
    #[serde(with = "yes_no")]
    pub all_locations_inactive: bool,
    /// Hide every location
    #[serde(with = "yes_no")]
    pub all_locations_hidden: bool,

    // Label defaults
    /// Label text color
    pub label_color: MapColor,
    /// Label text color while hovered
    pub label_hover_color: MapColor,
    /// Label font size in pixels
    pub label_size: u32,
    /// Label font family
    pub label_font: String,
    /// Hide every label
    #[serde(with = "yes_no")]
    pub hide_labels: bool,
    /// Show manual zoom controls
    #[serde(with = "yes_no")]
    pub manual_zoom: bool,
    /// Use an image for the zoom-out button
    #[serde(with = "yes_no")]
    pub back_image: bool,
    /// Zoom-out arrow fill color
    pub arrow_color: MapColor,
    /// Zoom-out arrow border color
    pub arrow_color_border: MapColor,
    /// Show the zoom-out button on initial load
    #[serde(with = "yes_no")]
    pub initial_back: bool,
    /// Region or group to zoom to on load; -1 for the whole map
    pub initial_zoom: i32,
    /// Show only the initially zoomed region
    #[serde(with = "yes_no")]
    pub initial_zoom_solo: bool,
    /// Region group opacity (0-1)
    pub region_opacity: f64,
    /// Region group opacity while hovered (0-1)
    pub region_hover_opacity: f64,
    /// Zoom out one level at a time instead of to the full map
    #[serde(with = "yes_no")]
    pub zoom_out_incrementally: bool,
    /// Fraction of the view a zoomed region fills
    pub zoom_percentage: f64,
    /// Zoom animation time in seconds
    pub zoom_time: f64,

    // Popups
    /// Popup background color
    pub popup_color: MapColor,
    /// Popup opacity (0-1)
    pub popup_opacity: f64,
    /// Popup shadow strength
    pub popup_shadow: f64,
    /// Popup corner radius in pixels
    pub popup_corners: f64,
    /// Popup CSS font shorthand
    pub popup_font: String,
    /// Leave popup styling to page CSS
    #[serde(with = "yes_no")]
    pub popup_nocss: bool,

    // Advanced
    /// Id of the element the map is drawn into
    pub div: String,
    /// Draw the map as soon as the page loads
    #[serde(with = "yes_no")]
    pub auto_load: bool,
    /// Open links in a new tab
    #[serde(with = "yes_no")]
    pub url_new_tab: bool,
    /// Where marker and button images are loaded from
    pub images_directory: String,
    /// Fade animation time in seconds
    pub fade_time: f64,
    /// Text of the link shown in popups
    pub link_text: String,
    /// Background image for regions
    pub state_image_url: String,
    /// Placement of `state_image_url`
    pub state_image_position: String,
    /// Image used for `image` markers when set
    pub location_image_url: String,
}

impl MainSettings {
    /// Returns every color field with its wire name.
    pub fn colors(&self) -> [(&'static str, &MapColor); 11] {
        [
            ("background_color", &self.background_color),
            ("border_color", &self.border_color),
            ("state_color", &self.state_color),
            ("state_hover_color", &self.state_hover_color),
            ("location_color", &self.location_color),
            ("location_border_color", &self.location_border_color),
            ("label_color", &self.label_color),
            ("label_hover_color", &self.label_hover_color),
            ("arrow_color", &self.arrow_color),
            ("arrow_color_border", &self.arrow_color_border),
            ("popup_color", &self.popup_color),
        ]
    }

    /// Returns every opacity field with its wire name.
    pub fn opacities(&self) -> [(&'static str, f64); 5] {
        [
            ("location_opacity", self.location_opacity),
            ("location_hover_opacity", self.location_hover_opacity),
            ("region_opacity", self.region_opacity),
            ("region_hover_opacity", self.region_hover_opacity),
            ("popup_opacity", self.popup_opacity),
        ]
    }

    /// Returns every non-negative numeric field (sizes, widths, times) with its wire name.
    pub fn measures(&self) -> [(&'static str, f64); 9] {
        [
            ("border_size", self.border_size),
            ("location_border", self.location_border),
            ("location_hover_border", self.location_hover_border),
            ("zoom_time", self.zoom_time),
            ("popup_shadow", self.popup_shadow),
            ("popup_corners", self.popup_corners),
            ("fade_time", self.fade_time),
            ("zoom_percentage", self.zoom_percentage),
            ("location_size", f64::from(self.location_size)),
        ]
    }

    /// Checks colors, opacities and measures, appending one line per problem.
    pub fn collect_problems(&self, problems: &mut Vec<String>) {
        for (name, color) in self.colors() {
            if let Err(e) = color.to_rgb() {
                problems.push(format!("main_settings.{name}: {e}"));
            }
        }

        for (name, value) in self.opacities() {
            if !(0.0..=1.0).contains(&value) {
                problems.push(format!(
                    "main_settings.{name}: opacity {value} is outside 0-1"
                ));
            }
        }

        for (name, value) in self.measures() {
            if !value.is_finite() || value < 0.0 {
                problems.push(format!(
                    "main_settings.{name}: {value} must be a non-negative number"
                ));
            }
        }

        if self.label_size == 0 {
            problems.push("main_settings.label_size: must be greater than 0".to_string());
        }
        if self.initial_zoom < -1 {
            problems.push(format!(
                "main_settings.initial_zoom: {} must be -1 or a region index",
                self.initial_zoom
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ConfigurationRegistry;

    fn shipped() -> MainSettings {
        ConfigurationRegistry::load().main_settings().clone()
    }

    #[test]
    fn test_width_parsing() {
        assert_eq!(
            MapWidth::try_from("responsive".to_string()),
            Ok(MapWidth::Responsive)
        );
        assert_eq!(MapWidth::try_from("700".to_string()), Ok(MapWidth::Fixed(700)));
        assert!(MapWidth::try_from("0".to_string()).is_err());
        assert!(MapWidth::try_from("wide".to_string()).is_err());
        assert!(MapWidth::try_from(" 700".to_string()).is_err());
        assert!(MapWidth::try_from("0700".to_string()).is_err());
        assert!(MapWidth::try_from("+700".to_string()).is_err());
        assert_eq!(MapWidth::Fixed(700).to_string(), "700");
    }

    #[test]
    fn test_enums_use_wire_names() {
        assert_eq!(
            serde_json::to_string(&PopupMode::OnClick).unwrap(),
            "\"on_click\""
        );
        assert_eq!(
            serde_json::to_string(&LocationType::Square).unwrap(),
            "\"square\""
        );
        assert_eq!(
            serde_json::to_string(&MapWidth::Responsive).unwrap(),
            "\"responsive\""
        );
    }

    #[test]
    fn test_flags_serialize_as_yes_no() {
        let value = serde_json::to_value(shipped()).unwrap();
        assert_eq!(value["background_transparent"], "yes");
        assert_eq!(value["all_states_inactive"], "no");
        assert_eq!(value["auto_load"], "yes");
        assert_eq!(value["popup_nocss"], "no");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut value = serde_json::to_value(shipped()).unwrap();
        value["not_a_setting"] = serde_json::json!("x");
        assert!(serde_json::from_value::<MainSettings>(value).is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut value = serde_json::to_value(shipped()).unwrap();
        value.as_object_mut().unwrap().remove("label_size");
        assert!(serde_json::from_value::<MainSettings>(value).is_err());
    }

    #[test]
    fn test_shipped_settings_have_no_problems() {
        let mut problems = Vec::new();
        shipped().collect_problems(&mut problems);
        assert!(problems.is_empty(), "unexpected problems: {problems:?}");
    }

    #[test]
    fn test_problems_reported_per_field() {
        let mut settings = shipped();
        settings.popup_opacity = 1.5;
        settings.state_color = MapColor::new("#12");
        settings.fade_time = -0.1;

        let mut problems = Vec::new();
        settings.collect_problems(&mut problems);

        assert_eq!(problems.len(), 3, "{problems:?}");
        assert!(problems.iter().any(|p| p.starts_with("main_settings.popup_opacity")));
        assert!(problems.iter().any(|p| p.starts_with("main_settings.state_color")));
        assert!(problems.iter().any(|p| p.starts_with("main_settings.fade_time")));
    }
}
