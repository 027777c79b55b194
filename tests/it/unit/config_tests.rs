//! Unit tests for config loading.

use snapsheet::config::EdgePolicy;
use snapsheet::{SheetConfig, SheetError, SnapState};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sheet.json");
    fs::write(
        &path,
        r#"{
            "initial_state": "collapsed",
            "fling_velocity": 500.0,
            "edge_policy": "rubber_band",
            "collapsed_peek": 120.0
        }"#,
    )
    .unwrap();

    let config = SheetConfig::load(&path).unwrap();
    assert_eq!(config.initial_state, SnapState::Collapsed);
    assert_eq!(config.fling_velocity, 500.0);
    assert_eq!(config.edge_policy, EdgePolicy::RubberBand);
    assert_eq!(config.collapsed_peek, 120.0);
    assert_eq!(config.velocity_window_ms, SheetConfig::default().velocity_window_ms);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = SheetConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SheetError::Io(_)));
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sheet.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(SheetConfig::load(&path).unwrap_err(), SheetError::Json(_)));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sheet.json");
    fs::write(&path, r#"{"velocity_window_ms": 0}"#).unwrap();
    assert!(matches!(
        SheetConfig::load(&path).unwrap_err(),
        SheetError::InvalidConfig(_)
    ));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = SheetConfig {
        initial_state: SnapState::Full,
        edge_policy: EdgePolicy::RubberBand,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(SheetConfig::from_json_str(&json).unwrap(), config);
}
