//! Tests for debug toggle resolution.

use occupancy_grid::{DEBUG_ENV_VAR, DebugMode, GridErrorKind};

#[test]
fn test_absent_toggle_is_off() {
    assert_eq!(
        DebugMode::from_toggle(DEBUG_ENV_VAR, None).unwrap(),
        DebugMode::Off
    );
}

#[test]
fn test_zero_toggle_is_off() {
    assert_eq!(
        DebugMode::from_toggle(DEBUG_ENV_VAR, Some("0")).unwrap(),
        DebugMode::Off
    );
}

#[test]
fn test_one_toggle_is_on() {
    let mode = DebugMode::from_toggle(DEBUG_ENV_VAR, Some("1")).unwrap();
    assert_eq!(mode, DebugMode::On);
    assert!(mode.is_on());
}

#[test]
fn test_unknown_toggle_is_configuration_error() {
    let err = DebugMode::from_toggle(DEBUG_ENV_VAR, Some("yes")).unwrap_err();
    assert_eq!(
        err.kind(),
        &GridErrorKind::Configuration {
            source_name: "DEBUG_APP".to_string(),
            value: "yes".to_string(),
        }
    );

    let message = err.to_string();
    assert!(message.contains("DEBUG_APP"));
    assert!(message.contains("yes"));
}

#[test]
fn test_toggle_is_not_trimmed() {
    assert!(DebugMode::from_toggle(DEBUG_ENV_VAR, Some(" 1")).is_err());
    assert!(DebugMode::from_toggle(DEBUG_ENV_VAR, Some("")).is_err());
}

#[test]
fn test_default_is_off() {
    assert_eq!(DebugMode::default(), DebugMode::Off);
}
