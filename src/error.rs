//! Errors reported when a request cannot be computed.

use crate::geometry::Cell;
use thiserror::Error;

/// Errors reported by [`Locator`](crate::Locator) before any placement is
/// enumerated.
///
/// An empty result is never an error: a request whose constraints rule out
/// every placement returns an all-zero coverage grid and a count of 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    /// The requested shape identifier is not part of the catalogue.
    #[error("unknown shape [{0}]")]
    UnknownShape(String),

    /// A constraint cell lies outside the grid.
    #[error("cell {cell} is outside of the {grid_size}x{grid_size} grid")]
    InvalidCell {
        /// The offending cell.
        cell: Cell,
        /// The side length of the grid the cell was checked against.
        grid_size: usize,
    },

    /// No shapes were requested.
    #[error("at least one shape must be requested")]
    NoShapes,

    /// The locator was configured with a grid that has no cells, or more
    /// rows than [`MAX_GRID_SIZE`](crate::MAX_GRID_SIZE).
    #[error("grid size must be between 1 and {max}, got [{0}]", max = crate::MAX_GRID_SIZE)]
    InvalidGridSize(usize),
}
