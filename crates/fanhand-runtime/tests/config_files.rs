//! `HandConfig` file loaders (feature `config-files`).

use fanhand_runtime::{HandConfig, HandConfigError};
use pretty_assertions::assert_eq;

#[test]
fn toml_file_overrides_selected_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hand.toml");
    std::fs::write(
        &path,
        r#"
template = "improved"
arc_angle = 12.5
equipped_only = false

[labels]
no_items = "Nothing to play"

[labels.ranges]
melee = "Nahkampf"
"#,
    )
    .unwrap();

    let config = HandConfig::from_toml_file(&path).unwrap();
    assert_eq!(config.template, "improved");
    assert_eq!(config.arc_angle, 12.5);
    assert!(!config.equipped_only);
    assert_eq!(config.scale, 1.0);
    assert_eq!(config.labels.no_items, "Nothing to play");
    assert_eq!(config.labels.ranges.get("melee").map(String::as_str), Some("Nahkampf"));
    assert!(config.validate().is_empty());
}

#[test]
fn json_file_round_trips_through_serde() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hand.json");
    let original = HandConfig {
        width_px: 1400.0,
        bottom_px: 12.0,
        ..HandConfig::default()
    };
    std::fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();
    assert_eq!(HandConfig::from_json_file(&path).unwrap(), original);
}

#[test]
fn invalid_values_load_but_fail_validation() {
    let config = HandConfig::from_toml_str("scale = 4.0\nwidth_px = 300.0").unwrap();
    let err = config.validated().unwrap_err();
    let HandConfigError::Validation(problems) = err else {
        panic!("expected validation error");
    };
    assert_eq!(problems.len(), 2, "{problems:?}");
}

#[test]
fn parse_and_io_errors_are_distinguished() {
    assert!(matches!(
        HandConfig::from_toml_str("arc_angle = \"wide\""),
        Err(HandConfigError::Toml(_))
    ));
    assert!(matches!(
        HandConfig::from_json_str("{ not json"),
        Err(HandConfigError::Json(_))
    ));
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        HandConfig::from_toml_file(dir.path().join("missing.toml")),
        Err(HandConfigError::Io(_))
    ));
}
