//! The enumerate, filter and aggregate pipeline behind every request.

use crate::{
    constraint::ConstraintSet, coverage::CoverageGrid, error::LocateError, geometry::Cell,
    placement::Placement, shape::Shape, PlacementGenerator, DEFAULT_GRID_SIZE, MAX_GRID_SIZE,
};

/// The outcome of one computation: how often each cell is covered by a
/// placement consistent with the constraints, and how many such placements
/// exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    /// Per-cell coverage counts over the surviving placements.
    pub coverage: CoverageGrid,
    /// The number of surviving placements.
    pub count: usize,
}

/// Computes coverage estimates for a fixed grid size.
///
/// A locator holds no state besides its configuration, so one instance can
/// serve any number of concurrent calls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Locator {
    grid_size: usize,
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl Locator {
    /// Create a locator for a `grid_size` × `grid_size` grid.
    ///
    /// Fails with [`LocateError::InvalidGridSize`] unless `grid_size` lies in
    /// `1..=MAX_GRID_SIZE`.
    pub fn new(grid_size: usize) -> Result<Self, LocateError> {
        if !(1..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(LocateError::InvalidGridSize(grid_size));
        }

        Ok(Self { grid_size })
    }

    /// Return the side length of the grid.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Return every placement of the given shapes, concatenated in the order
    /// the shapes are listed, without applying any constraint.
    pub fn placements(&self, shapes: &[Shape]) -> Vec<Placement> {
        shapes
            .iter()
            .flat_map(|shape| {
                let placements = shape.placements(self.grid_size);
                log::debug!(
                    "Generated [{}] placements for shape [{}] on a [{}x{}] grid.",
                    placements.len(),
                    shape,
                    self.grid_size,
                    self.grid_size
                );
                placements
            })
            .collect()
    }

    /// Parse shape identifiers and compute the coverage estimate for them.
    ///
    /// Fails with [`LocateError::UnknownShape`] on the first identifier that
    /// is not part of the catalogue, before anything is enumerated.
    pub fn compute<S: AsRef<str>>(
        &self,
        shapes: &[S],
        required_present: &[Cell],
        required_absent: &[Cell],
    ) -> Result<Estimate, LocateError> {
        let shapes = shapes
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Shape>, _>>()?;

        let constraints = ConstraintSet::new(
            required_present.iter().copied(),
            required_absent.iter().copied(),
        );

        self.compute_shapes(&shapes, &constraints)
    }

    /// Compute the coverage estimate for already parsed shapes.
    ///
    /// Shapes listed more than once contribute their placements once per
    /// listing. Zero surviving placements is a valid outcome and yields an
    /// all-zero grid.
    pub fn compute_shapes(
        &self,
        shapes: &[Shape],
        constraints: &ConstraintSet,
    ) -> Result<Estimate, LocateError> {
        if shapes.is_empty() {
            return Err(LocateError::NoShapes);
        }
        constraints.validate(self.grid_size)?;

        let placements = self.placements(shapes);
        let total = placements.len();
        let survivors = constraints.filter(placements);

        log::debug!(
            "Kept [{}] of [{}] placements for shapes {:?} with [{}] present and [{}] absent cells.",
            survivors.len(),
            total,
            shapes,
            constraints.required_present.len(),
            constraints.required_absent.len()
        );

        Ok(Estimate {
            coverage: CoverageGrid::aggregate(&survivors, self.grid_size),
            count: survivors.len(),
        })
    }
}
