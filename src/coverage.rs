//! Per-cell coverage counts for a set of placements.
//!
//! The grid is small and dense, so it is stored as a flat row-major vector.

use crate::{geometry::Cell, placement::Placement};
use std::fmt;

/// Coverage values at or above this level are shaded the same.
pub const MAX_HEAT_LEVEL: usize = 10;

/// A `size` × `size` matrix counting, for every cell, how many placements
/// cover it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoverageGrid {
    size: usize,
    counts: Vec<usize>,
}

impl CoverageGrid {
    #[inline]
    fn to_index(cell: Cell, size: usize) -> usize {
        cell.row * size + cell.col
    }

    /// Create a grid of the given side length with every count at 0.
    pub fn zeroed(size: usize) -> Self {
        Self {
            size,
            counts: vec![0; size * size],
        }
    }

    /// Count, for every cell, how many of `placements` cover it.
    ///
    /// # Panics
    ///
    /// Panics if a placement covers a cell outside of the grid.
    pub fn aggregate<'p>(
        placements: impl IntoIterator<Item = &'p Placement>,
        size: usize,
    ) -> Self {
        let mut grid = Self::zeroed(size);

        for placement in placements {
            for &cell in placement.cells() {
                assert!(
                    cell.is_within(size),
                    "Placement cell {cell} is outside of the {size}x{size} grid"
                );
                grid.counts[Self::to_index(cell, size)] += 1;
            }
        }

        grid
    }

    /// Return the side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the coverage of `cell`, or `None` if it lies outside the grid.
    pub fn get(&self, cell: Cell) -> Option<usize> {
        if cell.is_within(self.size) {
            Some(self.counts[Self::to_index(cell, self.size)])
        } else {
            None
        }
    }

    /// Return an iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        // `chunks` panics on a chunk size of 0.
        self.counts.chunks(self.size.max(1))
    }

    /// Return the grid as nested vectors, one per row.
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.rows().map(<[usize]>::to_vec).collect()
    }

    /// Return the sum of all counts, which equals the total number of cells
    /// across the aggregated placements.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Return the largest count in the grid, or 0 for an empty grid.
    pub fn max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Return true if no cell is covered by any placement.
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Return the shading level of `cell`: its count, capped at
    /// [`MAX_HEAT_LEVEL`].
    pub fn heat_level(&self, cell: Cell) -> Option<usize> {
        self.get(cell).map(|count| count.min(MAX_HEAT_LEVEL))
    }

    /// Return the cells with the highest non-zero coverage, in row-major
    /// order.
    pub fn hottest_cells(&self) -> Vec<Cell> {
        let max = self.max();
        if max == 0 {
            return vec![];
        }

        Cell::all(self.size)
            .filter(|&cell| self.counts[Self::to_index(cell, self.size)] == max)
            .collect()
    }
}

impl fmt::Display for CoverageGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max().to_string().len();

        for row in self.rows() {
            let line: Vec<_> = row
                .iter()
                .map(|count| format!("{count:>width$}"))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }

        Ok(())
    }
}
