//! Known information about the hidden target, used to discard placements
//! that contradict it.

use crate::{error::LocateError, geometry::Cell, placement::Placement};
#[cfg(fuzzing)]
use arbitrary::Arbitrary;

/// Cells known to contain part of the target and cells known not to.
///
/// The two lists are not required to be disjoint. A cell listed in both
/// simply rules out every placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(fuzzing, derive(Arbitrary))]
pub struct ConstraintSet {
    /// Cells every surviving placement must cover.
    pub required_present: Vec<Cell>,
    /// Cells no surviving placement may cover.
    pub required_absent: Vec<Cell>,
}

impl ConstraintSet {
    /// Create a new constraint set from the given lists of cells.
    pub fn new(
        required_present: impl IntoIterator<Item = Cell>,
        required_absent: impl IntoIterator<Item = Cell>,
    ) -> Self {
        Self {
            required_present: required_present.into_iter().collect(),
            required_absent: required_absent.into_iter().collect(),
        }
    }

    /// Return true if neither list holds any cell.
    pub fn is_empty(&self) -> bool {
        self.required_present.is_empty() && self.required_absent.is_empty()
    }

    /// Check that every cell lies inside a `grid_size` × `grid_size` grid.
    pub fn validate(&self, grid_size: usize) -> Result<(), LocateError> {
        match self
            .required_present
            .iter()
            .chain(&self.required_absent)
            .find(|cell| !cell.is_within(grid_size))
        {
            Some(&cell) => Err(LocateError::InvalidCell { cell, grid_size }),
            None => Ok(()),
        }
    }

    /// Return true if `placement` covers every required cell and none of the
    /// excluded ones.
    pub fn admits(&self, placement: &Placement) -> bool {
        self.required_present
            .iter()
            .all(|&cell| placement.contains(cell))
            && !self
                .required_absent
                .iter()
                .any(|&cell| placement.contains(cell))
    }

    /// Keep only the placements admitted by this constraint set, preserving
    /// their order.
    pub fn filter(&self, placements: Vec<Placement>) -> Vec<Placement> {
        if self.is_empty() {
            return placements;
        }

        placements
            .into_iter()
            .filter(|placement| self.admits(placement))
            .collect()
    }

    /// Toggle `cell` as known to hold part of the target.
    ///
    /// Marking a cell that is already marked present unmarks it. Otherwise the
    /// cell is added to the present list and removed from the absent list.
    pub fn mark_present(&mut self, cell: Cell) {
        Self::toggle(&mut self.required_present, &mut self.required_absent, cell);
    }

    /// Toggle `cell` as known to be empty.
    ///
    /// Marking a cell that is already marked absent unmarks it. Otherwise the
    /// cell is added to the absent list and removed from the present list.
    pub fn mark_absent(&mut self, cell: Cell) {
        Self::toggle(&mut self.required_absent, &mut self.required_present, cell);
    }

    /// Forget every marked cell.
    pub fn clear(&mut self) {
        self.required_present.clear();
        self.required_absent.clear();
    }

    fn toggle(target: &mut Vec<Cell>, opposite: &mut Vec<Cell>, cell: Cell) {
        if target.contains(&cell) {
            target.retain(|&c| c != cell);
        } else {
            target.push(cell);
            opposite.retain(|&c| c != cell);
        }
    }
}
