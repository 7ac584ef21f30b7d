//! Error types for board construction and configuration.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while building a board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GridErrorKind {
    /// A board dimension was negative.
    #[display("Invalid dimension: {} = {}", field, value)]
    InvalidDimension {
        /// Dimension name (`rows` or `columns`).
        field: &'static str,
        /// Offending value.
        value: i32,
    },
    /// A configuration value was outside its recognized set, or a
    /// configuration source could not be read.
    #[display("Invalid value for {}: {}", source_name, value)]
    Configuration {
        /// Variable, field or file that produced the value.
        source_name: String,
        /// Offending value or failure detail.
        value: String,
    },
    /// An occupant had an empty name.
    #[display("Occupant {} has an empty name", index)]
    InvalidOccupant {
        /// Position of the occupant in the supplied sequence.
        index: usize,
    },
}

/// Board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Grid error: {} at {}:{}", kind, file, line)]
pub struct GridError {
    /// Error kind.
    pub kind: GridErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GridError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GridErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates a configuration error naming its source and value.
    #[track_caller]
    pub fn configuration(source_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(GridErrorKind::Configuration {
            source_name: source_name.into(),
            value: value.into(),
        })
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GridErrorKind {
        &self.kind
    }
}

impl From<GridErrorKind> for GridError {
    #[track_caller]
    fn from(kind: GridErrorKind) -> Self {
        Self::new(kind)
    }
}
