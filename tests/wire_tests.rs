//! Tests for the JSON and mapdata-script wire formats.

use ukmap::wire::WireFormat;
use ukmap::{ConfigurationRegistry, RegistryError};

mod fixtures;
use fixtures::*;

#[test]
fn test_original_mapdata_matches_built_in_registry() {
    let parsed = ConfigurationRegistry::from_mapdata_js(ORIGINAL_MAPDATA_JS)
        .expect("original mapdata.js should parse");
    assert_eq!(parsed, ConfigurationRegistry::load());
}

#[test]
fn test_original_mapdata_keeps_region_order() {
    let parsed = ConfigurationRegistry::from_mapdata_js(ORIGINAL_MAPDATA_JS).unwrap();
    let codes: Vec<&str> = parsed.list_regions().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, SHIPPED_CODES);
}

#[test]
fn test_json_round_trip_is_lossless() {
    let registry = ConfigurationRegistry::load();
    let json = registry.to_wire_json(false).unwrap();
    assert_eq!(ConfigurationRegistry::from_wire_json(&json).unwrap(), registry);

    // Serializing again yields identical text
    let again = ConfigurationRegistry::from_wire_json(&json)
        .unwrap()
        .to_wire_json(false)
        .unwrap();
    assert_eq!(json, again);
}

#[test]
fn test_wire_shape_preserves_names_and_flags() {
    let value = shipped_json_value();

    for key in ["main_settings", "state_specific", "locations", "labels", "legend", "regions"] {
        assert!(value.get(key).is_some(), "missing top-level key {key}");
    }
    assert_eq!(value["legend"]["entries"], serde_json::json!([]));
    assert_eq!(value["locations"], serde_json::json!({}));
    assert_eq!(value["regions"], serde_json::json!({}));

    let settings = &value["main_settings"];
    assert_eq!(settings["background_transparent"], "yes");
    assert_eq!(settings["all_states_inactive"], "no");
    assert_eq!(settings["zoom_out_incrementally"], "yes");
    assert_eq!(settings["width"], "responsive");
    assert_eq!(settings["popups"], "detect");
    assert_eq!(settings["label_size"], 22);
    assert_eq!(settings["initial_zoom"], -1);

    assert_eq!(
        value["state_specific"]["GL"],
        serde_json::json!({"name": "Greater London", "description": " "})
    );
}

#[test]
fn test_js_output_keeps_region_declaration_order() {
    let js = ConfigurationRegistry::load()
        .to_mapdata_js("simplemaps_ukmap_mapdata", true)
        .unwrap();

    let positions: Vec<usize> = SHIPPED_CODES
        .iter()
        .map(|code| js.find(&format!("\"{code}\": {{")).expect("code present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_hand_edited_js_is_accepted() {
    let edited = ORIGINAL_MAPDATA_JS.replacen(
        "locations: {},",
        "locations: {\n    leeds: { name: \"Leeds\", lat: 53.8, lng: -1.55, color: \"#0000ff\", },\n  },",
        1,
    );
    let registry = ConfigurationRegistry::from_mapdata_js(&edited).unwrap();
    let leeds = &registry.locations()["leeds"];
    assert_eq!(leeds.name.as_deref(), Some("Leeds"));
    assert_eq!(leeds.color.as_ref().unwrap().as_str(), "#0000ff");
}

#[test]
fn test_bad_opacity_in_js_is_malformed() {
    let edited = ORIGINAL_MAPDATA_JS.replacen("popup_opacity: 0.9", "popup_opacity: 9", 1);
    let err = ConfigurationRegistry::from_mapdata_js(&edited).unwrap_err();
    match err {
        RegistryError::MalformedConfiguration { problems } => {
            assert_eq!(problems.len(), 1);
            assert!(problems[0].contains("popup_opacity"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_color_is_malformed() {
    let mut value = shipped_json_value();
    value["main_settings"]["state_hover_color"] = serde_json::json!("#88a4b");

    let err = ConfigurationRegistry::from_wire_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, RegistryError::MalformedConfiguration { .. }));
    assert!(err.to_string().contains("state_hover_color"));
}

#[test]
fn test_unknown_setting_is_rejected() {
    let mut value = shipped_json_value();
    value["main_settings"]["sparkles"] = serde_json::json!("yes");

    let err = ConfigurationRegistry::from_wire_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, RegistryError::Parse { format: "json", .. }));
}

#[test]
fn test_duplicate_region_code_is_rejected() {
    let edited = ORIGINAL_MAPDATA_JS.replacen("EM: {", "EE: {", 1);
    let err = ConfigurationRegistry::from_mapdata_js(&edited).unwrap_err();
    assert!(err.to_string().contains("duplicate region code 'EE'"), "{err}");
}

#[test]
fn test_from_path_picks_format_by_extension() {
    let (js_path, _js_dir) = temp_file("mapdata.js", ORIGINAL_MAPDATA_JS);
    let from_js = ConfigurationRegistry::from_path(&js_path).unwrap();

    let json = from_js.to_wire_json(true).unwrap();
    let (json_path, _json_dir) = temp_file("mapdata.json", &json);
    let from_json = ConfigurationRegistry::from_path(&json_path).unwrap();

    assert_eq!(from_js, from_json);
    assert_eq!(WireFormat::from_path(&js_path), WireFormat::Js);
}

#[test]
fn test_from_path_missing_file_errors() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = ConfigurationRegistry::from_path(&dir.path().join("missing.js"));
    assert!(result.is_err());
}

#[test]
fn test_signed_hex_color_is_malformed() {
    let mut value = shipped_json_value();
    value["main_settings"]["state_color"] = serde_json::json!("#+1+2+3");

    let err = ConfigurationRegistry::from_wire_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, RegistryError::MalformedConfiguration { .. }));
    assert!(err.to_string().contains("state_color"), "{err}");
}

#[test]
fn test_inherit_marker_in_locations_is_accepted() {
    let edited = ORIGINAL_MAPDATA_JS.replacen(
        "locations: {},",
        "locations: {\n    leeds: { name: \"Leeds\", lat: \"53.8\", lng: -1.55, color: \"default\", size: \"default\", type: \"default\" },\n  },",
        1,
    );
    let registry = ConfigurationRegistry::from_mapdata_js(&edited).unwrap();
    let leeds = &registry.locations()["leeds"];
    assert!(leeds.size.as_ref().unwrap().is_inherit());
    assert!(leeds.location_type.as_ref().unwrap().is_inherit());

    // Written back exactly as given
    let value: serde_json::Value =
        serde_json::from_str(&registry.to_wire_json(false).unwrap()).unwrap();
    assert_eq!(value["locations"]["leeds"]["lat"], "53.8");
    assert_eq!(value["locations"]["leeds"]["type"], "default");
}

#[test]
fn test_trailing_comment_after_mapdata_is_accepted() {
    let with_comment = format!("{ORIGINAL_MAPDATA_JS} // end of data\n");
    let parsed = ConfigurationRegistry::from_mapdata_js(&with_comment).unwrap();
    assert_eq!(parsed, ConfigurationRegistry::load());
}
