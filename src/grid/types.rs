//! Core domain types for the occupancy grid.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A cell coordinate.
///
/// No bounds are enforced; a coordinate may lie outside any board.
/// Ordering is row-major (by `x`, then `y`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_new::new,
)]
pub struct Coordinate {
    /// Row component.
    x: i32,
    /// Column component.
    y: i32,
}

impl Coordinate {
    /// Returns the row component.
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the column component.
    pub fn y(self) -> i32 {
        self.y
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A named entity placed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Occupant {
    /// Display name; must be non-empty for the occupant to join a board.
    #[new(into)]
    name: String,
    /// Where the occupant stands.
    position: Coordinate,
}

impl Occupant {
    /// Returns true if this occupant stands at `position`.
    pub fn is_at(&self, position: Coordinate) -> bool {
        self.position == position
    }
}
