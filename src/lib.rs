//! Occupancy grid library - fixed-size boards of named occupants
//!
//! A [`Board`] owns its dimensions and occupants from construction onward and
//! answers read-only queries about who stands where.
//!
//! # Architecture
//!
//! - **Grid**: coordinates, occupants, and the board with its queries
//! - **Debug mode**: resolution of the `DEBUG_APP` toggle
//! - **Scenario**: TOML descriptions of a board
//!
//! # Example
//!
//! ```
//! use occupancy_grid::{Board, Coordinate, Occupant};
//!
//! # fn example() -> Result<(), occupancy_grid::GridError> {
//! let board = Board::new(
//!     5,
//!     5,
//!     vec![
//!         Occupant::new("Edwin", Coordinate::new(1, 1)),
//!         Occupant::new("Michi", Coordinate::new(1, 1)),
//!     ],
//! )?;
//! assert_eq!(board.count_at(Coordinate::new(1, 1)), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod debug_mode;
mod error;
mod grid;
mod scenario;

// Crate-level exports - Errors
pub use error::{GridError, GridErrorKind};

// Crate-level exports - Debug toggle
pub use debug_mode::{DEBUG_ENV_VAR, DebugMode};

// Crate-level exports - Grid types
pub use grid::{Board, BoardSettings, Construction, Coordinate, Occupant};

// Crate-level exports - Scenario loading
pub use scenario::Scenario;
