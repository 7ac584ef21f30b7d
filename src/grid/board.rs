//! The board: fixed dimensions, an occupant roster, and occupancy queries.

use super::types::{Coordinate, Occupant};
use crate::debug_mode::DebugMode;
use crate::error::{GridError, GridErrorKind};
use derive_getters::{Dissolve, Getters};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info, instrument};

/// Fixed-size board of named occupants.
///
/// Dimensions and occupants are fixed at construction. The board only
/// answers queries, so a shared reference may be read from any thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u32,
    columns: u32,
    occupants: Vec<Occupant>,
}

impl Board {
    /// Creates a board, rejecting negative dimensions and unnamed occupants.
    ///
    /// Occupant positions are not checked against the board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`GridErrorKind::InvalidDimension`] if `rows` or `columns` is
    /// negative and [`GridErrorKind::InvalidOccupant`] if an occupant name is
    /// empty.
    #[instrument(skip(occupants), fields(occupant_count = occupants.len()))]
    pub fn new(rows: i32, columns: i32, occupants: Vec<Occupant>) -> Result<Self, GridError> {
        let rows = dimension("rows", rows)?;
        let columns = dimension("columns", columns)?;

        if let Some(index) = occupants.iter().position(|o| o.name().is_empty()) {
            return Err(GridError::new(GridErrorKind::InvalidOccupant { index }));
        }

        debug!(rows, columns, "Board created");
        Ok(Self {
            rows,
            columns,
            occupants,
        })
    }

    /// Creates a board from settings, rendering the debug view once if
    /// debugging is on.
    #[instrument(skip(settings), fields(debug = ?settings.debug))]
    pub fn construct_with(settings: BoardSettings) -> Result<Construction, GridError> {
        let BoardSettings {
            rows,
            columns,
            occupants,
            debug,
        } = settings;

        let board = Self::new(rows, columns, occupants)?;
        let debug_view = if debug.is_on() {
            info!(rows = board.rows, columns = board.columns, "Rendering debug view");
            Some(board.render_debug_view())
        } else {
            None
        };

        Ok(Construction { board, debug_view })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Returns the occupants in insertion order.
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    /// Counts the occupants standing at `position`.
    #[instrument(skip(self))]
    pub fn count_at(&self, position: Coordinate) -> usize {
        self.occupants.iter().filter(|o| o.is_at(position)).count()
    }

    /// Iterates over the occupants standing at `position`, in insertion order.
    pub fn occupants_at(&self, position: Coordinate) -> impl Iterator<Item = &Occupant> + '_ {
        self.occupants.iter().filter(move |o| o.is_at(position))
    }

    /// Occupancy count of every occupied coordinate, in coordinate order.
    #[instrument(skip(self))]
    pub fn census(&self) -> BTreeMap<Coordinate, usize> {
        let mut counts = BTreeMap::new();
        for occupant in &self.occupants {
            *counts.entry(*occupant.position()).or_insert(0) += 1;
        }
        counts
    }

    /// Banner printed ahead of the debug view.
    pub fn title(&self) -> String {
        format!("Grid: {}x{}.", self.rows, self.columns)
    }

    /// Renders per-cell occupancy counts as text.
    ///
    /// Row and column labels run from 0 through `rows` and `columns`
    /// inclusive, so the view is one cell larger than the board in each
    /// direction.
    #[instrument(skip(self))]
    pub fn render_debug_view(&self) -> String {
        DebugView { board: self }.to_string()
    }
}

/// Validates a dimension.
fn dimension(field: &'static str, value: i32) -> Result<u32, GridError> {
    u32::try_from(value)
        .map_err(|_| GridError::new(GridErrorKind::InvalidDimension { field, value }))
}

/// Formatter for [`Board::render_debug_view`].
struct DebugView<'a> {
    board: &'a Board,
}

impl fmt::Display for DebugView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // rows and columns never exceed i32::MAX
        let rows = self.board.rows as i32;
        let columns = self.board.columns as i32;

        f.write_str("  ")?;
        for j in 0..=columns {
            write!(f, "{} ", j)?;
        }
        f.write_str("\n  ")?;
        for _ in 0..=columns {
            f.write_str("- ")?;
        }
        f.write_str("\n")?;

        for i in 0..=rows {
            write!(f, "{}|", i)?;
            for j in 0..=columns {
                match self.board.count_at(Coordinate::new(i, j)) {
                    0 => f.write_str(" |")?,
                    count => write!(f, "{}|", count)?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Everything needed to construct a board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct BoardSettings {
    /// Requested rows; negative is rejected.
    rows: i32,
    /// Requested columns; negative is rejected.
    columns: i32,
    /// Initial occupants.
    occupants: Vec<Occupant>,
    /// Resolved debug toggle.
    debug: DebugMode,
}

/// A freshly built board and the debug view rendered while building it.
#[derive(Debug, Clone, Getters, Dissolve)]
pub struct Construction {
    /// The board.
    board: Board,
    /// Debug view, present only when debugging was on.
    debug_view: Option<String>,
}
