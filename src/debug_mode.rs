//! Debug toggle resolution.

use crate::error::GridError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Environment variable that enables the debug view.
pub const DEBUG_ENV_VAR: &str = "DEBUG_APP";

/// Whether a board renders its debug view at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DebugMode {
    /// No debug view.
    #[default]
    Off,
    /// Render the debug view once at construction.
    On,
}

impl DebugMode {
    /// Resolves a raw toggle value.
    ///
    /// Absent and `"0"` disable debugging, `"1"` enables it. Any other value
    /// is a configuration error naming `source_name` and the value.
    #[instrument]
    pub fn from_toggle(source_name: &str, raw: Option<&str>) -> Result<Self, GridError> {
        match raw {
            None | Some("0") => Ok(DebugMode::Off),
            Some("1") => Ok(DebugMode::On),
            Some(other) => Err(GridError::configuration(source_name, other)),
        }
    }

    /// Resolves the toggle from the `DEBUG_APP` process variable.
    #[instrument]
    pub fn from_env() -> Result<Self, GridError> {
        let mode = match std::env::var(DEBUG_ENV_VAR) {
            Ok(value) => Self::from_toggle(DEBUG_ENV_VAR, Some(&value))?,
            Err(std::env::VarError::NotPresent) => DebugMode::Off,
            Err(std::env::VarError::NotUnicode(value)) => {
                return Err(GridError::configuration(
                    DEBUG_ENV_VAR,
                    value.to_string_lossy(),
                ));
            }
        };
        debug!(?mode, "Resolved debug toggle");
        Ok(mode)
    }

    /// Returns true when the debug view should be rendered.
    pub fn is_on(self) -> bool {
        self == DebugMode::On
    }
}
