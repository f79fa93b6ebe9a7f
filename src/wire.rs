//! External serialization of the registry.
//!
//! Two forms are supported:
//!
//! - **JSON**: the registry object alone, as in [`ConfigurationRegistry`]'s
//!   serde shape (`main_settings`, `state_specific`, `locations`, `labels`,
//!   `legend`, `regions`).
//! - **JS**: the script the widget loads, `var simplemaps_ukmap_mapdata={...};`.
//!   Parsing is JSON5-tolerant, so hand-edited data files with unquoted keys,
//!   comments and trailing commas are accepted.
//!
//! Yes/no flags are native booleans in the models and become `"yes"`/`"no"`
//! only here, through [`flag_to_wire`] and [`flag_from_wire`].

use crate::constants::DEFAULT_VARIABLE_NAME;
use crate::error::RegistryError;
use crate::registry::{ConfigurationRegistry, RawRegistry};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Converts a flag to its wire string.
pub const fn flag_to_wire(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Converts a wire string to a flag. Only `"yes"` and `"no"` are accepted.
pub fn flag_from_wire(text: &str) -> Option<bool> {
    match text {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Serde adapter for `bool` fields stored as `"yes"`/`"no"`.
///
/// Use with `#[serde(with = "crate::wire::yes_no")]`.
pub mod yes_no {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Writes the flag as `"yes"` or `"no"`.
    #[allow(clippy::trivially_copy_pass_by_ref)] // signature fixed by serde
    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::flag_to_wire(*flag))
    }

    /// Reads `"yes"` or `"no"`; anything else is an error.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::flag_from_wire(&text)
            .ok_or_else(|| D::Error::custom(format!("expected \"yes\" or \"no\", found \"{text}\"")))
    }
}

/// Output format for exported map data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    /// Bare JSON document
    Json,
    /// JavaScript assignment the widget loads directly
    #[default]
    Js,
}

impl WireFormat {
    /// Picks a format from a file extension; anything but `.js` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("js") => Self::Js,
            _ => Self::Json,
        }
    }

    /// Lowercase name used in messages and config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Js => "js",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to render exported data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Output format
    pub format: WireFormat,
    /// Global variable assigned in JS output
    pub variable_name: String,
    /// Indent the output
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: WireFormat::default(),
            variable_name: DEFAULT_VARIABLE_NAME.to_string(),
            pretty: true,
        }
    }
}

impl ConfigurationRegistry {
    /// Serializes to a JSON document.
    pub fn to_wire_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("Failed to serialize map data to JSON")
    }

    /// Serializes to the `var <name>=<object>;` script the widget loads.
    pub fn to_mapdata_js(&self, variable_name: &str, pretty: bool) -> Result<String> {
        if !is_js_identifier(variable_name) {
            anyhow::bail!("'{variable_name}' is not a valid JavaScript variable name");
        }
        Ok(format!(
            "var {variable_name}={};\n",
            self.to_wire_json(pretty)?
        ))
    }

    /// Renders the registry with the given options.
    pub fn render(&self, options: &ExportOptions) -> Result<String> {
        match options.format {
            WireFormat::Json => {
                let mut json = self.to_wire_json(options.pretty)?;
                json.push('\n');
                Ok(json)
            }
            WireFormat::Js => self.to_mapdata_js(&options.variable_name, options.pretty),
        }
    }

    /// Parses and validates a JSON document.
    pub fn from_wire_json(text: &str) -> Result<Self, RegistryError> {
        let raw: RawRegistry = serde_json::from_str(text).map_err(|e| RegistryError::Parse {
            format: "json",
            message: e.to_string(),
        })?;
        Self::try_from(raw)
    }

    /// Parses and validates a mapdata script (`var name = {...};`) or a bare object literal.
    pub fn from_mapdata_js(text: &str) -> Result<Self, RegistryError> {
        let object = strip_js_assignment(text).ok_or_else(|| RegistryError::Parse {
            format: "js",
            message: "expected `var <name> = { ... };` or an object literal".to_string(),
        })?;
        let raw: RawRegistry = json5::from_str(object).map_err(|e| RegistryError::Parse {
            format: "js",
            message: e.to_string(),
        })?;
        Self::try_from(raw)
    }

    /// Parses text in the given format.
    pub fn from_wire(text: &str, format: WireFormat) -> Result<Self, RegistryError> {
        match format {
            WireFormat::Json => Self::from_wire_json(text),
            WireFormat::Js => Self::from_mapdata_js(text),
        }
    }

    /// Reads a map data file, choosing the format from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let format = WireFormat::from_path(path);
        tracing::debug!(path = %path.display(), %format, "Reading map data");

        let text = fs::read_to_string(path)
            .context(format!("Failed to read map data file: {}", path.display()))?;

        let registry = Self::from_wire(&text, format)
            .context(format!("Invalid map data in {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            regions = registry.region_table().len(),
            "Loaded map data"
        );
        Ok(registry)
    }
}

/// Returns the object literal from `var name = {...};`, or the text itself if it is bare.
fn strip_js_assignment(text: &str) -> Option<&str> {
    let text = text.trim_start_matches('\u{feff}').trim();
    let brace = text.find('{')?;

    let start = match text.find('=') {
        Some(eq) if eq < brace => eq + 1,
        _ => 0,
    };

    // Anything after the closing brace (`;`, trailing comments) is dropped
    let end = text.rfind('}')?;
    Some(text[start..=end].trim())
}

/// Returns true if `name` is a plain JavaScript identifier.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_mapping() {
        assert_eq!(flag_to_wire(true), "yes");
        assert_eq!(flag_to_wire(false), "no");
        assert_eq!(flag_from_wire("yes"), Some(true));
        assert_eq!(flag_from_wire("no"), Some(false));
        assert_eq!(flag_from_wire("YES"), None);
        assert_eq!(flag_from_wire("true"), None);
        assert_eq!(flag_from_wire(""), None);
    }

    #[test]
    fn test_yes_no_rejects_booleans() {
        #[derive(Debug, Deserialize)]
        struct Flag {
            #[serde(with = "yes_no")]
            #[allow(dead_code)]
            on: bool,
        }
        assert!(serde_json::from_str::<Flag>(r#"{"on": true}"#).is_err());
        assert!(serde_json::from_str::<Flag>(r#"{"on": "maybe"}"#).is_err());
        assert!(serde_json::from_str::<Flag>(r#"{"on": "yes"}"#).is_ok());
    }

    #[test]
    fn test_strip_js_assignment() {
        assert_eq!(strip_js_assignment("var a={\"x\":1};"), Some("{\"x\":1}"));
        assert_eq!(strip_js_assignment("  var a = { x: 1 } ;\n"), Some("{ x: 1 }"));
        assert_eq!(strip_js_assignment("{ x: 1 }"), Some("{ x: 1 }"));
        assert_eq!(strip_js_assignment("var a = 5;"), None);
        assert_eq!(
            strip_js_assignment("var a = { x: 1 }; // end of data\n"),
            Some("{ x: 1 }")
        );
        assert_eq!(
            strip_js_assignment("var a = { x: 1 }\n/* generated */\n"),
            Some("{ x: 1 }")
        );
    }

    #[test]
    fn test_js_identifier() {
        assert!(is_js_identifier("simplemaps_ukmap_mapdata"));
        assert!(is_js_identifier("$data2"));
        assert!(!is_js_identifier("2data"));
        assert!(!is_js_identifier("my-data"));
        assert!(!is_js_identifier(""));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(WireFormat::from_path(Path::new("mapdata.js")), WireFormat::Js);
        assert_eq!(WireFormat::from_path(Path::new("mapdata.JS")), WireFormat::Js);
        assert_eq!(WireFormat::from_path(Path::new("mapdata.json")), WireFormat::Json);
        assert_eq!(WireFormat::from_path(Path::new("mapdata")), WireFormat::Json);
    }

    #[test]
    fn test_json_round_trip() {
        let registry = ConfigurationRegistry::load();
        for pretty in [true, false] {
            let json = registry.to_wire_json(pretty).unwrap();
            let back = ConfigurationRegistry::from_wire_json(&json).unwrap();
            assert_eq!(back, registry);
        }
    }

    #[test]
    fn test_js_round_trip() {
        let registry = ConfigurationRegistry::load();
        let js = registry
            .to_mapdata_js(DEFAULT_VARIABLE_NAME, true)
            .unwrap();
        assert!(js.starts_with("var simplemaps_ukmap_mapdata={"));
        assert!(js.trim_end().ends_with("};"));

        let back = ConfigurationRegistry::from_mapdata_js(&js).unwrap();
        assert_eq!(back, registry);
    }

    #[test]
    fn test_js_rejects_bad_variable_name() {
        let registry = ConfigurationRegistry::load();
        assert!(registry.to_mapdata_js("not valid", true).is_err());
    }

    #[test]
    fn test_render_uses_options() {
        let registry = ConfigurationRegistry::load();
        let options = ExportOptions {
            format: WireFormat::Js,
            variable_name: "ukdata".to_string(),
            pretty: false,
        };
        let js = registry.render(&options).unwrap();
        assert!(js.starts_with("var ukdata={\"main_settings\":{"));

        let json = registry
            .render(&ExportOptions {
                format: WireFormat::Json,
                ..options
            })
            .unwrap();
        assert!(json.starts_with("{\"main_settings\""));
    }

    #[test]
    fn test_parse_error_reports_format() {
        let err = ConfigurationRegistry::from_wire_json("{ not json").unwrap_err();
        assert!(matches!(err, RegistryError::Parse { format: "json", .. }));

        let err = ConfigurationRegistry::from_mapdata_js("var x = 3;").unwrap_err();
        assert!(matches!(err, RegistryError::Parse { format: "js", .. }));
    }

    #[test]
    fn test_malformed_values_fail_validation() {
        let mut value = serde_json::to_value(ConfigurationRegistry::load()).unwrap();
        value["main_settings"]["location_opacity"] = serde_json::json!(1.8);
        value["main_settings"]["popup_color"] = serde_json::json!("#zzzzzz");

        let err = ConfigurationRegistry::from_wire_json(&value.to_string()).unwrap_err();
        match err {
            RegistryError::MalformedConfiguration { problems } => {
                assert_eq!(problems.len(), 2, "{problems:?}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_yes_no_flag_is_parse_error() {
        let mut value = serde_json::to_value(ConfigurationRegistry::load()).unwrap();
        value["main_settings"]["auto_load"] = serde_json::json!(true);

        let err = ConfigurationRegistry::from_wire_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }
}
