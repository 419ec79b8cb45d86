//! Placements of the compound shape made of two independent straight
//! segments, one three cells long and one two cells long.
//!
//! The two segments are positioned separately: any horizontal or vertical
//! three cell line may be combined with any horizontal or vertical two cell
//! line, as long as they do not share a cell. Checking every pair is
//! quadratic in the number of lines, which is cheap at the grid sizes this
//! crate targets.

use crate::{geometry::Cell, placement::Placement, PlacementGenerator};

/// Length of the longer of the two segments.
pub const LONG_SEGMENT: usize = 3;
/// Length of the shorter of the two segments.
pub const SHORT_SEGMENT: usize = 2;

/// Direction a straight segment extends in from its start cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// The segment extends to the right along a row.
    Horizontal,
    /// The segment extends downwards along a column.
    Vertical,
}

/// A straight run of cells inside the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment {
    /// The top-left cell of the segment.
    pub start: Cell,
    /// The direction the segment extends in.
    pub orientation: Orientation,
    /// The number of cells in the segment.
    pub len: usize,
}

impl Segment {
    /// Return an iterator over the cells of this segment, starting from
    /// `start`.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.len).map(move |step| match self.orientation {
            Orientation::Horizontal => self.start.offset(0, step),
            Orientation::Vertical => self.start.offset(step, 0),
        })
    }

    /// Return true if this segment and `other` share at least one cell.
    pub fn overlaps(self, other: Segment) -> bool {
        self.cells().any(|cell| other.cells().any(|o| o == cell))
    }

    /// Return every segment of length `len` that fits in a `grid_size` ×
    /// `grid_size` grid.
    ///
    /// All horizontal segments come first, row by row, followed by all
    /// vertical segments, column by column.
    pub fn all(len: usize, grid_size: usize) -> Vec<Segment> {
        if len == 0 || len > grid_size {
            return vec![];
        }

        let starts = grid_size - len + 1;
        let horizontal = (0..grid_size).flat_map(move |row| {
            (0..starts).map(move |col| Segment {
                start: Cell::new(row, col),
                orientation: Orientation::Horizontal,
                len,
            })
        });
        let vertical = (0..grid_size).flat_map(move |col| {
            (0..starts).map(move |row| Segment {
                start: Cell::new(row, col),
                orientation: Orientation::Vertical,
                len,
            })
        });

        horizontal.chain(vertical).collect()
    }
}

/// Generator for the two segment compound shape.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DoubleSegment;

impl DoubleSegment {
    /// Return every pair of a long and a short segment that fit in the grid
    /// without sharing a cell.
    ///
    /// Pairs are ordered with the long segments in the outer loop and the
    /// short segments in the inner loop.
    pub fn segment_pairs(self, grid_size: usize) -> Vec<(Segment, Segment)> {
        let long_segments = Segment::all(LONG_SEGMENT, grid_size);
        let short_segments = Segment::all(SHORT_SEGMENT, grid_size);

        let pairs: Vec<_> = long_segments
            .iter()
            .flat_map(|&long| {
                short_segments
                    .iter()
                    .filter(move |&&short| !long.overlaps(short))
                    .map(move |&short| (long, short))
            })
            .collect();

        log::trace!(
            "Combined [{}] long and [{}] short segments into [{}] disjoint pairs.",
            long_segments.len(),
            short_segments.len(),
            pairs.len()
        );

        pairs
    }
}

impl PlacementGenerator for DoubleSegment {
    fn placements(&self, grid_size: usize) -> Vec<Placement> {
        self.segment_pairs(grid_size)
            .into_iter()
            .map(|(long, short)| Placement::new(long.cells().chain(short.cells()).collect()))
            .collect()
    }
}
