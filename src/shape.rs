//! The fixed catalogue of hidden shapes.
//!
//! Every shape except [`Shape::DoubleSegment`] has one canonical pattern,
//! rotated through all four orientations during placement generation. The
//! double segment is a pair of independent straight lines and is enumerated
//! by [`DoubleSegment`](crate::double_segment::DoubleSegment) instead.

use crate::{
    double_segment::DoubleSegment, error::LocateError, geometry::Pattern, placement::Placement,
    PlacementGenerator,
};
#[cfg(fuzzing)]
use arbitrary::Arbitrary;
use std::{fmt, str::FromStr, sync::OnceLock};

/// A named shape from the catalogue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(fuzzing, derive(Arbitrary))]
pub enum Shape {
    /// Four cells in a column with one cell sticking out at the bottom.
    L,
    /// Three cells in a row with a two cell stem hanging from the middle.
    T,
    /// A two cell bar next to a three cell zig-zag.
    Iv,
    /// Three cells in a column with a diagonal arm through the middle.
    Angle,
    /// Two arms of three cells meeting at a right angle.
    RightAngle,
    /// A column of three cells with a two cell bump.
    P,
    /// Three cells in a row with both ends extended downwards.
    Notch,
    /// Two independent straight segments of three and two cells.
    DoubleSegment,
}

const L_CELLS: &[(isize, isize)] = &[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)];
const T_CELLS: &[(isize, isize)] = &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)];
const IV_CELLS: &[(isize, isize)] = &[(0, 0), (1, 0), (1, 1), (0, 2), (1, 3)];
const ANGLE_CELLS: &[(isize, isize)] = &[(0, 0), (1, 0), (2, 0), (1, 1), (0, 2)];
const RIGHT_ANGLE_CELLS: &[(isize, isize)] = &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)];
const P_CELLS: &[(isize, isize)] = &[(0, 0), (1, 0), (2, 0), (1, 1), (2, 1)];
const NOTCH_CELLS: &[(isize, isize)] = &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2)];
// Only used to draw the double segment, placements come from `DoubleSegment`.
const DOUBLE_SEGMENT_PREVIEW: &[(isize, isize)] = &[(0, 0), (1, 0), (2, 0), (3, 3), (4, 3)];

/// Canonical patterns, indexed in the same order as `Shape::ALL`.
fn catalogue() -> &'static [Pattern; 8] {
    static CATALOGUE: OnceLock<[Pattern; 8]> = OnceLock::new();

    CATALOGUE.get_or_init(|| {
        [
            L_CELLS,
            T_CELLS,
            IV_CELLS,
            ANGLE_CELLS,
            RIGHT_ANGLE_CELLS,
            P_CELLS,
            NOTCH_CELLS,
            DOUBLE_SEGMENT_PREVIEW,
        ]
        .map(|cells| Pattern::new(cells.iter().copied()))
    })
}

impl Shape {
    /// Every shape of the catalogue, in display order.
    pub const ALL: [Shape; 8] = [
        Shape::L,
        Shape::T,
        Shape::Iv,
        Shape::Angle,
        Shape::RightAngle,
        Shape::P,
        Shape::Notch,
        Shape::DoubleSegment,
    ];

    fn index(self) -> usize {
        match self {
            Shape::L => 0,
            Shape::T => 1,
            Shape::Iv => 2,
            Shape::Angle => 3,
            Shape::RightAngle => 4,
            Shape::P => 5,
            Shape::Notch => 6,
            Shape::DoubleSegment => 7,
        }
    }

    /// Return the identifier clients use to request this shape.
    pub fn name(self) -> &'static str {
        match self {
            Shape::L => "L",
            Shape::T => "T",
            Shape::Iv => "IV",
            Shape::Angle => "∠",
            Shape::RightAngle => "∟",
            Shape::P => "p",
            Shape::Notch => "凹",
            Shape::DoubleSegment => "独立双线段",
        }
    }

    /// Return a short human readable description of the shape.
    pub fn description(self) -> &'static str {
        match self {
            Shape::L => "Four vertically stacked cells with one cell extending sideways at the end.",
            Shape::T => "Three cells in a row with a two cell stem below the middle one.",
            Shape::Iv => "An upright pair of cells packed next to a three cell zig-zag.",
            Shape::Angle => "A three cell column with one cell beside its middle and one at its top corner, forming an acute angle.",
            Shape::RightAngle => "Two equal arms of three cells meeting at a right angle.",
            Shape::P => "A three cell column with two cells attached to its lower half, like the letter p.",
            Shape::Notch => "Five cells forming a cup, with the middle of the second row left empty.",
            Shape::DoubleSegment => "Two fully independent straight segments, one of three cells and one of two, anywhere on the grid.",
        }
    }

    /// Return the canonical pattern of this shape, or `None` for the compound
    /// double segment.
    pub fn pattern(self) -> Option<&'static Pattern> {
        match self {
            Shape::DoubleSegment => None,
            shape => Some(&catalogue()[shape.index()]),
        }
    }

    /// Return a pattern suitable for drawing this shape.
    ///
    /// For the double segment this is one arbitrary arrangement of its two
    /// lines, it does not constrain where the lines can be placed.
    pub fn preview(self) -> &'static Pattern {
        &catalogue()[self.index()]
    }

    /// Return true if this is the compound two segment shape.
    pub fn is_compound(self) -> bool {
        self == Shape::DoubleSegment
    }
}

impl PlacementGenerator for Shape {
    fn placements(&self, grid_size: usize) -> Vec<Placement> {
        match self.pattern() {
            Some(pattern) => pattern.placements(grid_size),
            None => DoubleSegment.placements(grid_size),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = LocateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(shape) = Shape::ALL.into_iter().find(|shape| shape.name() == s) {
            return Ok(shape);
        }

        match s.to_ascii_lowercase().as_str() {
            "l" => Ok(Shape::L),
            "t" => Ok(Shape::T),
            "iv" => Ok(Shape::Iv),
            "angle" => Ok(Shape::Angle),
            "right-angle" => Ok(Shape::RightAngle),
            "p" => Ok(Shape::P),
            "notch" => Ok(Shape::Notch),
            "double-segment" => Ok(Shape::DoubleSegment),
            _ => Err(LocateError::UnknownShape(s.to_owned())),
        }
    }
}
