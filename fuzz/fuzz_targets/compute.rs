#![no_main]

use libfuzzer_sys::fuzz_target;
use treasure_heatmap::{Cell, ConstraintSet, LocateError, Locator, Shape};

#[derive(Debug)]
struct Request {
    shapes: Vec<Shape>,
    constraints: ConstraintSet,
}

impl<'a> arbitrary::Arbitrary<'a> for Request {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let shapes = u.arbitrary::<Vec<Shape>>()?.into_iter().take(3).collect();

        // Mostly in bounds, with the occasional cell just outside the grid.
        let cell = |u: &mut arbitrary::Unstructured<'a>| -> arbitrary::Result<Cell> {
            Ok(Cell::new(
                usize::from(u.arbitrary::<u8>()? % 6),
                usize::from(u.arbitrary::<u8>()? % 6),
            ))
        };
        let cells = |u: &mut arbitrary::Unstructured<'a>| -> arbitrary::Result<Vec<Cell>> {
            let len = u.int_in_range(0..=4)?;
            (0..len).map(|_| cell(u)).collect()
        };

        let required_present = cells(u)?;
        let required_absent = cells(u)?;

        Ok(Request {
            shapes,
            constraints: ConstraintSet::new(required_present, required_absent),
        })
    }
}

fuzz_target!(|request: Request| {
    let locator = Locator::default();

    match locator.compute_shapes(&request.shapes, &request.constraints) {
        Ok(estimate) => {
            let survivors = request
                .constraints
                .filter(locator.placements(&request.shapes));
            assert_eq!(estimate.count, survivors.len());
            assert_eq!(
                estimate.coverage.total(),
                survivors.iter().map(|placement| placement.len()).sum::<usize>()
            );
        }
        Err(LocateError::NoShapes) => assert!(request.shapes.is_empty()),
        Err(LocateError::InvalidCell { cell, grid_size }) => assert!(!cell.is_within(grid_size)),
        Err(err) => panic!("unexpected error [{err}]"),
    }
});
