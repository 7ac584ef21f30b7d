//! Tests for scenario loading.

use std::fs;
use tempfile::TempDir;

use occupancy_grid::{Board, Coordinate, DebugMode, GridErrorKind, Scenario};

const SCENARIO: &str = r#"rows = 5
columns = 5

[[occupants]]
name = "Edwin"
position = { x = 1, y = 1 }

[[occupants]]
name = "Minino"
position = { x = 4, y = 5 }

[[occupants]]
name = "Michi"
position = { x = 1, y = 1 }
"#;

#[test]
fn test_from_file_builds_board() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("grid.toml");
    fs::write(&path, SCENARIO).expect("Failed to write TOML");

    let scenario = Scenario::from_file(&path).expect("Load failed");
    assert_eq!(scenario, Scenario::sample());

    let settings = scenario.into_settings(DebugMode::Off).unwrap();
    let board = Board::construct_with(settings).unwrap();
    assert_eq!(board.board().count_at(Coordinate::new(1, 1)), 2);
    assert!(board.debug_view().is_none());
}

#[test]
fn test_missing_file_is_configuration_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = Scenario::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err.kind(), GridErrorKind::Configuration { .. }));
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let err = Scenario::from_toml_str("rows = \"five\"\ncolumns = 5\n").unwrap_err();
    assert!(matches!(err.kind(), GridErrorKind::Configuration { .. }));
}

#[test]
fn test_occupants_default_to_empty() {
    let scenario = Scenario::from_toml_str("rows = 2\ncolumns = 3\n").unwrap();
    assert!(scenario.occupants().is_empty());
    assert_eq!(*scenario.columns(), 3);
}

#[test]
fn test_scenario_debug_overrides_environment() {
    let scenario = Scenario::from_toml_str("rows = 1\ncolumns = 1\ndebug = \"1\"\n").unwrap();
    let settings = scenario.into_settings(DebugMode::Off).unwrap();
    assert_eq!(*settings.debug(), DebugMode::On);

    let scenario = Scenario::from_toml_str("rows = 1\ncolumns = 1\ndebug = \"0\"\n").unwrap();
    let settings = scenario.into_settings(DebugMode::On).unwrap();
    assert_eq!(*settings.debug(), DebugMode::Off);
}

#[test]
fn test_environment_used_without_scenario_debug() {
    let settings = Scenario::sample().into_settings(DebugMode::On).unwrap();
    assert_eq!(*settings.debug(), DebugMode::On);
}

#[test]
fn test_invalid_scenario_debug_names_field() {
    let scenario = Scenario::from_toml_str("rows = 1\ncolumns = 1\ndebug = \"yes\"\n").unwrap();
    let err = scenario.into_settings(DebugMode::Off).unwrap_err();
    assert_eq!(
        err.kind(),
        &GridErrorKind::Configuration {
            source_name: "debug".to_string(),
            value: "yes".to_string(),
        }
    );
}

#[test]
fn test_negative_scenario_dimension_fails_construction() {
    let scenario = Scenario::from_toml_str("rows = -2\ncolumns = 1\n").unwrap();
    let settings = scenario.into_settings(DebugMode::Off).unwrap();
    let err = Board::construct_with(settings).unwrap_err();
    assert!(matches!(
        err.kind(),
        GridErrorKind::InvalidDimension { field: "rows", value: -2 }
    ));
}

#[test]
fn test_load_or_sample_without_path() {
    let scenario = Scenario::load_or_sample(None).unwrap();
    assert_eq!(*scenario.rows(), 5);
    assert_eq!(scenario.occupants().len(), 3);
}
