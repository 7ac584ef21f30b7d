//! Board scenarios loaded from TOML.

use crate::debug_mode::DebugMode;
use crate::error::GridError;
use crate::grid::{BoardSettings, Coordinate, Occupant};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Scenario field that overrides the `DEBUG_APP` toggle.
const DEBUG_FIELD: &str = "debug";

/// Dimensions and occupants for a board.
///
/// ```toml
/// rows = 5
/// columns = 5
/// debug = "1"
///
/// [[occupants]]
/// name = "Edwin"
/// position = { x = 1, y = 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scenario {
    /// Requested rows.
    rows: i32,
    /// Requested columns.
    columns: i32,
    /// Optional debug toggle; same values as `DEBUG_APP`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    debug: Option<String>,
    /// Initial occupants.
    #[serde(default)]
    occupants: Vec<Occupant>,
}

impl Scenario {
    /// The built-in sample: a 5x5 board with two occupants sharing (1, 1).
    #[instrument]
    pub fn sample() -> Self {
        Self {
            rows: 5,
            columns: 5,
            debug: None,
            occupants: vec![
                Occupant::new("Edwin", Coordinate::new(1, 1)),
                Occupant::new("Minino", Coordinate::new(4, 5)),
                Occupant::new("Michi", Coordinate::new(1, 1)),
            ],
        }
    }

    /// Parses a scenario from TOML text.
    #[instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> Result<Self, GridError> {
        toml::from_str(text).map_err(|e| GridError::configuration("scenario", e.to_string()))
    }

    /// Loads a scenario from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        debug!("Loading scenario from file");

        let content = std::fs::read_to_string(path).map_err(|e| {
            GridError::configuration(
                path.display().to_string(),
                format!("failed to read scenario: {}", e),
            )
        })?;

        let scenario: Self = toml::from_str(&content).map_err(|e| {
            GridError::configuration(
                path.display().to_string(),
                format!("failed to parse scenario: {}", e),
            )
        })?;

        info!(
            rows = scenario.rows,
            columns = scenario.columns,
            occupants = scenario.occupants.len(),
            "Scenario loaded successfully"
        );
        Ok(scenario)
    }

    /// Loads `path` if given, otherwise the built-in sample.
    #[instrument]
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self, GridError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                info!("No scenario file given, using sample");
                Ok(Self::sample())
            }
        }
    }

    /// Converts into board settings.
    ///
    /// The scenario's own `debug` field, when present, takes precedence over
    /// `env_debug`.
    #[instrument(skip(self))]
    pub fn into_settings(self, env_debug: DebugMode) -> Result<BoardSettings, GridError> {
        let debug = match self.debug.as_deref() {
            Some(raw) => DebugMode::from_toggle(DEBUG_FIELD, Some(raw))?,
            None => env_debug,
        };
        Ok(BoardSettings::new(
            self.rows,
            self.columns,
            self.occupants,
            debug,
        ))
    }
}
