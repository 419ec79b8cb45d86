//! Concrete placements of a shape on the grid, and the generator for ordinary
//! (single pattern) shapes.

use crate::{
    geometry::{Cell, Pattern},
    PlacementGenerator,
};

/// One concrete positioning of a shape on the grid.
///
/// Cells are kept in generation order. A placement never repeats a cell and
/// every cell lies inside the grid it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    cells: Vec<Cell>,
}

impl Placement {
    /// Create a placement from a list of distinct cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        debug_assert!(
            cells
                .iter()
                .enumerate()
                .all(|(idx, cell)| !cells[..idx].contains(cell)),
            "Placement cells should be distinct"
        );

        Self { cells }
    }

    /// Return the cells covered by this placement.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Return the number of cells covered by this placement.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return true if this placement covers no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return true if this placement covers `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

impl PlacementGenerator for Pattern {
    /// Rotate the pattern through all four orientations and translate each one
    /// to every origin where it fits inside the grid.
    ///
    /// Orientations that coincide because of rotational symmetry are not
    /// merged, so their placements are emitted once per orientation.
    fn placements(&self, grid_size: usize) -> Vec<Placement> {
        self.orientations()
            .flat_map(|orientation| {
                let (max_row, max_col) = orientation.extent();
                // If the orientation is larger than the grid, skip it.
                if max_row >= grid_size || max_col >= grid_size {
                    return vec![];
                }

                (0..grid_size - max_row)
                    .flat_map(|row_offset| {
                        (0..grid_size - max_col).map(move |col_offset| (row_offset, col_offset))
                    })
                    .map(|(row_offset, col_offset)| {
                        Placement::new(
                            orientation
                                .cells()
                                .iter()
                                .map(|cell| cell.offset(row_offset, col_offset))
                                .collect(),
                        )
                    })
                    .collect()
            })
            .collect()
    }
}
