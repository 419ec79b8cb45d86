#![deny(missing_docs)]

//! Locate a hidden shape on a small square grid.
//!
//! Every placement of the candidate shapes is enumerated, through all four
//! rotations, and checked against the cells already known to hold (or not
//! hold) part of the target. The placements that survive are summed into a
//! [`CoverageGrid`]: the higher a cell's count, the more consistent
//! hypotheses put the target there.
//!
//! ```
//! use treasure_heatmap::{Cell, Locator};
//!
//! let locator = Locator::default();
//! let estimate = locator.compute(&["L"], &[Cell::new(0, 0)], &[]).unwrap();
//!
//! assert_eq!(estimate.count, 3);
//! assert_eq!(estimate.coverage.get(Cell::new(0, 0)), Some(3));
//! ```

pub mod constraint;
pub mod coverage;
pub mod double_segment;
pub mod error;
pub mod geometry;
pub mod locator;
pub mod placement;
pub mod shape;

pub use constraint::ConstraintSet;
pub use coverage::CoverageGrid;
pub use error::LocateError;
pub use geometry::{Cell, Pattern, Rotation};
pub use locator::{Estimate, Locator};
pub use placement::Placement;
pub use shape::Shape;

/// Side length of the grid used when no other size is configured.
pub const DEFAULT_GRID_SIZE: usize = 5;

/// Largest side length a [`Locator`] accepts.
pub const MAX_GRID_SIZE: usize = 64;

/// Something that can be positioned on a square grid in a number of ways.
pub trait PlacementGenerator {
    /// Return every placement that fits inside a `grid_size` × `grid_size`
    /// grid, in a deterministic order.
    ///
    /// Placements are not deduplicated: an arrangement reachable in several
    /// ways is returned once for each of them.
    fn placements(&self, grid_size: usize) -> Vec<Placement>;
}
