use crate::common::fixtures::TestFixture;
use crate::common::harness::MenuHarness;
use menu_positioner::config::{Config, ConfigError};
use menu_positioner::types::{EdgeValue, Vert};
use menu_positioner::view::scene::SceneSpec;

#[test]
fn test_scenario_and_config_from_files() {
    let scenario = TestFixture::new(
        "corner.json",
        r#"{
            "activator": { "left": 800, "top": 900, "width": 100, "height": 40 },
            "rows": 5,
            "labels": ["Cut", "Copy", "Paste"]
        }"#,
    )
    .unwrap();
    let config = TestFixture::new(
        "config.json",
        r#"{ "menu": { "bottom": true, "origin": "bottom left" } }"#,
    )
    .unwrap();

    let spec = SceneSpec::load_from_file(&scenario.path).unwrap();
    let config = Config::load_from_file(&config.path).unwrap();
    config.validate().unwrap();

    assert_eq!(spec.label(1), "Copy");
    assert_eq!(spec.label(4), "Item 5");

    let mut harness = MenuHarness::new(spec, config.menu);
    harness.open();
    assert_eq!(harness.menu.direction().vert, Vert::Top);
    assert_eq!(harness.position().bottom, EdgeValue::Px(0.0));
    assert_eq!(harness.menu.transition_origin(), "bottom left");
}

#[test]
fn test_scenario_with_bad_selection_is_rejected() {
    let scenario = TestFixture::new("bad.json", r#"{ "rows": 2, "selected": 5 }"#).unwrap();
    let err = SceneSpec::load_from_file(&scenario.path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn test_malformed_scenario_is_a_parse_error() {
    let scenario = TestFixture::new("broken.json", "{ rows: ").unwrap();
    let err = SceneSpec::load_from_file(&scenario.path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
    assert!(err.to_string().starts_with("Parse error"));
}

#[test]
fn test_saved_config_drives_same_placement() {
    let mut config = Config::default();
    config.menu.auto = true;
    config.menu.nudge_x_auto = 5.0;
    config.menu.nudge_y_auto = 7.0;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();

    let mut original = MenuHarness::new(SceneSpec::default(), config.menu);
    let mut reloaded = MenuHarness::new(SceneSpec::default(), loaded.menu);
    original.open();
    reloaded.open();
    assert_eq!(original.position(), reloaded.position());
    assert_eq!(reloaded.position().left, EdgeValue::Px(5.0));
}

#[test]
fn test_spec_round_trips_through_fixture() {
    let spec = SceneSpec {
        rows: 3,
        selected: Some(2),
        ..SceneSpec::default()
    };
    let fixture = TestFixture::json("spec.json", &spec).unwrap();
    assert_eq!(SceneSpec::load_from_file(&fixture.path).unwrap(), spec);
}
