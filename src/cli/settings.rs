//! `ukmap settings` - show map-wide settings.

use crate::cli::common::{load_registry, print_json, CliResult};
use crate::models::MainSettings;
use crate::wire::flag_to_wire;
use clap::Args;
use std::path::PathBuf;

/// Show map-wide settings
#[derive(Debug, Clone, Args)]
pub struct SettingsArgs {
    /// Read map data from this file instead of the built-in data
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output as JSON (wire field names, yes/no flags)
    #[arg(long)]
    pub json: bool,
}

impl SettingsArgs {
    /// Execute the settings command
    pub fn execute(&self) -> CliResult<()> {
        let registry = load_registry(self.data.as_deref())?;
        let settings = registry.main_settings();

        if self.json {
            return print_json(settings);
        }

        for (title, rows) in grouped_rows(settings) {
            println!("{title}:");
            let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            for (name, value) in rows {
                println!("  {name:<width$}  {value}");
            }
            println!();
        }
        Ok(())
    }
}

type Rows = Vec<(&'static str, String)>;

fn flag(value: bool) -> String {
    flag_to_wire(value).to_string()
}

/// Enum value as spelled on the wire (`on_click`, not `OnClick`).
fn wire_name<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn quoted(value: &str) -> String {
    format!("{value:?}")
}

/// Settings in display groups, in declaration order.
pub fn grouped_rows(s: &MainSettings) -> Vec<(&'static str, Rows)> {
    vec![
        (
            "General",
            vec![
                ("width", s.width.to_string()),
                ("background_color", s.background_color.to_string()),
                ("background_transparent", flag(s.background_transparent)),
                ("border_color", s.border_color.to_string()),
                ("popups", wire_name(&s.popups)),
            ],
        ),
        (
            "States",
            vec![
                ("state_description", quoted(&s.state_description)),
                ("state_color", s.state_color.to_string()),
                ("state_hover_color", s.state_hover_color.to_string()),
                ("state_url", quoted(&s.state_url)),
                ("border_size", s.border_size.to_string()),
                ("all_states_inactive", flag(s.all_states_inactive)),
                ("all_states_zoomable", flag(s.all_states_zoomable)),
            ],
        ),
        (
            "Locations",
            vec![
                ("location_description", quoted(&s.location_description)),
                ("location_color", s.location_color.to_string()),
                ("location_opacity", s.location_opacity.to_string()),
                ("location_hover_opacity", s.location_hover_opacity.to_string()),
                ("location_url", quoted(&s.location_url)),
                ("location_size", s.location_size.to_string()),
                ("location_type", wire_name(&s.location_type)),
                ("location_image_source", quoted(&s.location_image_source)),
                ("location_border_color", s.location_border_color.to_string()),
                ("location_border", s.location_border.to_string()),
                ("location_hover_border", s.location_hover_border.to_string()),
                ("all_locations_inactive", flag(s.all_locations_inactive)),
                ("all_locations_hidden", flag(s.all_locations_hidden)),
            ],
        ),
        (
            "Labels and zoom",
            vec![
                ("label_color", s.label_color.to_string()),
                ("label_hover_color", s.label_hover_color.to_string()),
                ("label_size", s.label_size.to_string()),
                ("label_font", quoted(&s.label_font)),
                ("hide_labels", flag(s.hide_labels)),
                ("manual_zoom", flag(s.manual_zoom)),
                ("back_image", flag(s.back_image)),
                ("arrow_color", s.arrow_color.to_string()),
                ("arrow_color_border", s.arrow_color_border.to_string()),
                ("initial_back", flag(s.initial_back)),
                ("initial_zoom", s.initial_zoom.to_string()),
                ("initial_zoom_solo", flag(s.initial_zoom_solo)),
                ("region_opacity", s.region_opacity.to_string()),
                ("region_hover_opacity", s.region_hover_opacity.to_string()),
                ("zoom_out_incrementally", flag(s.zoom_out_incrementally)),
                ("zoom_percentage", s.zoom_percentage.to_string()),
                ("zoom_time", s.zoom_time.to_string()),
            ],
        ),
        (
            "Popups",
            vec![
                ("popup_color", s.popup_color.to_string()),
                ("popup_opacity", s.popup_opacity.to_string()),
                ("popup_shadow", s.popup_shadow.to_string()),
                ("popup_corners", s.popup_corners.to_string()),
                ("popup_font", quoted(&s.popup_font)),
                ("popup_nocss", flag(s.popup_nocss)),
            ],
        ),
        (
            "Advanced",
            vec![
                ("div", quoted(&s.div)),
                ("auto_load", flag(s.auto_load)),
                ("url_new_tab", flag(s.url_new_tab)),
                ("images_directory", quoted(&s.images_directory)),
                ("fade_time", s.fade_time.to_string()),
                ("link_text", quoted(&s.link_text)),
                ("state_image_url", quoted(&s.state_image_url)),
                ("state_image_position", quoted(&s.state_image_position)),
                ("location_image_url", quoted(&s.location_image_url)),
            ],
        ),
    ]
}
