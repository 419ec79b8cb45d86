//! Grid cells, quarter-turn rotations and normalized cell patterns.
//!
//! Patterns are always stored normalized: the smallest row and the smallest
//! column across the pattern are both `0`. Rotation happens on signed
//! coordinates and is followed by re-normalization, so a rotated pattern is
//! again anchored at `(0, 0)` and only becomes bounded by a grid once it is
//! translated into a placement.

#[cfg(fuzzing)]
use arbitrary::Arbitrary;
use std::fmt;

/// A single square of the grid, addressed by row and column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(fuzzing, derive(Arbitrary))]
pub struct Cell {
    /// The row index, ranging from 0 to `grid_size - 1`.
    pub row: usize,
    /// The column index, ranging from 0 to `grid_size - 1`.
    pub col: usize,
}

impl Cell {
    /// Create a new cell at the given row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Return true if this cell lies inside a `grid_size` × `grid_size` grid.
    pub fn is_within(self, grid_size: usize) -> bool {
        self.row < grid_size && self.col < grid_size
    }

    /// Return this cell shifted down by `rows` and right by `cols`.
    pub fn offset(self, rows: usize, cols: usize) -> Self {
        Cell::new(self.row + rows, self.col + cols)
    }

    /// Return an iterator over every cell of a `grid_size` × `grid_size` grid
    /// in row-major order.
    pub fn all(grid_size: usize) -> impl Iterator<Item = Cell> {
        (0..grid_size).flat_map(move |row| (0..grid_size).map(move |col| Cell::new(row, col)))
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl From<[usize; 2]> for Cell {
    fn from([row, col]: [usize; 2]) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rotation by a whole number of quarter turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rotation {
    /// No rotation.
    Identity,
    /// Rotation by 90°, mapping `(row, col)` to `(-col, row)`.
    Quarter,
    /// Rotation by 180°, mapping `(row, col)` to `(-row, -col)`.
    Half,
    /// Rotation by 270°, mapping `(row, col)` to `(col, -row)`.
    ThreeQuarter,
}

impl Rotation {
    /// All four rotations, in order of increasing angle.
    pub const ALL: [Rotation; 4] = [
        Rotation::Identity,
        Rotation::Quarter,
        Rotation::Half,
        Rotation::ThreeQuarter,
    ];

    /// Return the rotation by `k` quarter turns, wrapping around after four.
    pub fn from_quarter_turns(k: usize) -> Self {
        Self::ALL[k % 4]
    }

    /// Return the number of quarter turns this rotation represents.
    pub fn quarter_turns(self) -> usize {
        match self {
            Rotation::Identity => 0,
            Rotation::Quarter => 1,
            Rotation::Half => 2,
            Rotation::ThreeQuarter => 3,
        }
    }

    fn apply(self, (row, col): (isize, isize)) -> (isize, isize) {
        match self {
            Rotation::Identity => (row, col),
            Rotation::Quarter => (-col, row),
            Rotation::Half => (-row, -col),
            Rotation::ThreeQuarter => (col, -row),
        }
    }
}

/// A shape footprint, normalized so its minimum row and column are both 0.
///
/// The order of cells is kept as given, which makes the cell order of every
/// placement derived from this pattern deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Cell>,
}

impl Pattern {
    /// Create a new pattern from signed offsets, translating them so the
    /// minimum row and minimum column are 0.
    ///
    /// # Panics
    ///
    /// Panics if `offsets` is empty.
    pub fn new(offsets: impl IntoIterator<Item = (isize, isize)>) -> Self {
        let offsets: Vec<_> = offsets.into_iter().collect();
        assert!(!offsets.is_empty(), "Pattern cannot be empty.");

        let min_row = offsets.iter().map(|&(row, _)| row).min().unwrap_or(0);
        let min_col = offsets.iter().map(|&(_, col)| col).min().unwrap_or(0);

        let cells = offsets
            .into_iter()
            .map(|(row, col)| {
                Cell::new(
                    (row - min_row).unsigned_abs(),
                    (col - min_col).unsigned_abs(),
                )
            })
            .collect();

        Self { cells }
    }

    /// Return the cells of this pattern.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Return the number of cells in this pattern.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Patterns are never empty, this always returns false.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return the largest row and largest column occupied by this pattern.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(max_row, max_col), cell| {
            (max_row.max(cell.row), max_col.max(cell.col))
        })
    }

    /// Return this pattern rotated by `rotation` and normalized again.
    pub fn rotate(&self, rotation: Rotation) -> Pattern {
        if rotation == Rotation::Identity {
            return self.clone();
        }

        Pattern::new(
            self.cells
                .iter()
                .map(|cell| rotation.apply((cell.row as isize, cell.col as isize))),
        )
    }

    /// Return an iterator over the pattern in all four orientations, including
    /// duplicates when the pattern is rotationally symmetric.
    pub fn orientations(&self) -> impl Iterator<Item = Pattern> + '_ {
        Rotation::ALL.into_iter().map(move |rotation| self.rotate(rotation))
    }
}
