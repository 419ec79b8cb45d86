mod common;

use common::{assert_empty, cells, expected_double_segment_count, expected_pattern_count};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use treasure_heatmap::{
    double_segment::DoubleSegment, Cell, ConstraintSet, LocateError, Locator, Shape,
};

#[test]
fn l_shape_unconstrained() {
    common::init_logging();

    let locator = Locator::default();
    let estimate = locator.compute(&["L"], &[], &[]).unwrap();

    let pattern = Shape::L.pattern().unwrap();
    assert_eq!(estimate.count, expected_pattern_count(pattern, 5));
    assert_eq!(estimate.count, 32);
    assert_eq!(estimate.coverage.total(), estimate.count * 5);
}

#[test]
fn l_shape_with_known_treasure() {
    let locator = Locator::default();
    let unconstrained = locator.compute(&["L"], &[], &[]).unwrap();
    let present = locator.compute(&["L"], &cells(&[(0, 0)]), &[]).unwrap();

    assert!(present.count <= unconstrained.count);
    assert_eq!(present.count, 3);
    // Every survivor covers the known cell.
    assert_eq!(present.coverage.get(Cell::new(0, 0)), Some(present.count));

    let constraints = ConstraintSet::new(cells(&[(0, 0)]), []);
    for placement in constraints.filter(locator.placements(&[Shape::L])) {
        assert!(placement.contains(Cell::new(0, 0)));
    }
}

#[test]
fn present_and_absent_partition_placements() {
    let locator = Locator::default();
    let unconstrained = locator.compute(&["L"], &[], &[]).unwrap();

    for cell in Cell::all(5) {
        let present = locator.compute(&["L"], &[cell], &[]).unwrap();
        let absent = locator.compute(&["L"], &[], &[cell]).unwrap();

        assert_eq!(present.count + absent.count, unconstrained.count, "{cell}");
        assert_eq!(unconstrained.coverage.get(cell), Some(present.count));
    }

    let absent = locator.compute(&["L"], &[], &cells(&[(0, 0)])).unwrap();
    assert_eq!(absent.count, 29);
}

#[test]
fn double_segment_unconstrained() {
    let locator = Locator::default();
    let estimate = locator.compute(&[Shape::DoubleSegment.name()], &[], &[]).unwrap();

    assert_eq!(estimate.count, expected_double_segment_count(5));
    assert_eq!(estimate.count, 956);
    assert_eq!(estimate.coverage.total(), 5 * estimate.count);
}

#[test]
fn double_segment_lines_never_overlap() {
    for grid_size in 3..=6 {
        let pairs = DoubleSegment.segment_pairs(grid_size);
        assert_eq!(pairs.len(), expected_double_segment_count(grid_size));

        for (long, short) in pairs {
            let long_cells: Vec<_> = long.cells().collect();
            assert_eq!(
                short.cells().filter(|cell| long_cells.contains(cell)).count(),
                0
            );
        }
    }
}

#[test]
fn contradictory_constraints_yield_nothing() {
    let locator = Locator::default();
    let estimate = locator
        .compute(&["L", "T"], &cells(&[(2, 2), (0, 4)]), &cells(&[(2, 2)]))
        .unwrap();

    assert_empty(&estimate);
}

#[test]
fn impossible_constraints_are_not_errors() {
    let locator = Locator::default();
    // An L never spans opposite corners of the grid.
    let estimate = locator
        .compute(&["L"], &cells(&[(0, 0), (4, 4)]), &[])
        .unwrap();

    assert_empty(&estimate);
}

#[test]
fn adding_constraints_never_increases_count() {
    let locator = Locator::default();
    let shapes = [Shape::L, Shape::T, Shape::DoubleSegment];
    let base = ConstraintSet::new(cells(&[(2, 2)]), cells(&[(0, 0)]));
    let base_count = locator.compute_shapes(&shapes, &base).unwrap().count;

    for cell in Cell::all(5) {
        let mut more_present = base.clone();
        more_present.required_present.push(cell);
        let mut more_absent = base.clone();
        more_absent.required_absent.push(cell);

        let present_count = locator.compute_shapes(&shapes, &more_present).unwrap().count;
        let absent_count = locator.compute_shapes(&shapes, &more_absent).unwrap().count;

        assert!(present_count <= base_count, "{cell}");
        assert!(absent_count <= base_count, "{cell}");
    }
}

#[test]
fn compute_is_idempotent() {
    let locator = Locator::default();
    let present = cells(&[(1, 2)]);
    let absent = cells(&[(3, 3), (0, 1)]);

    let first = locator.compute(&["T", "凹", "独立双线段"], &present, &absent).unwrap();
    let second = locator.compute(&["T", "凹", "独立双线段"], &present, &absent).unwrap();

    assert_eq!(first, second);
}

#[test]
fn coverage_sums_placement_sizes() {
    let locator = Locator::default();
    let shapes = Shape::ALL;
    let constraints = ConstraintSet::new(cells(&[(1, 1)]), cells(&[(3, 0)]));

    let survivors = constraints.filter(locator.placements(&shapes));
    let estimate = locator.compute_shapes(&shapes, &constraints).unwrap();

    assert_eq!(estimate.count, survivors.len());
    assert_eq!(
        estimate.coverage.total(),
        survivors.iter().map(|placement| placement.len()).sum::<usize>()
    );
    for cell in Cell::all(5) {
        let covering = survivors
            .iter()
            .filter(|placement| placement.contains(cell))
            .count();
        assert_eq!(estimate.coverage.get(cell), Some(covering));
    }
}

#[test]
fn unconstrained_coverage_is_rotation_invariant() {
    let locator = Locator::default();

    for shape in Shape::ALL {
        let estimate = locator.compute_shapes(&[shape], &ConstraintSet::default()).unwrap();

        assert_eq!(
            common::rotate_rows(&estimate.coverage),
            estimate.coverage.to_rows(),
            "{shape}"
        );
    }
}

#[test]
fn errors_are_distinct_from_empty_results() {
    let locator = Locator::default();

    assert_eq!(
        locator.compute(&["L", "hexagon"], &[], &[]),
        Err(LocateError::UnknownShape("hexagon".to_owned()))
    );
    assert_eq!(
        locator.compute(&["L"], &cells(&[(5, 5)]), &[]),
        Err(LocateError::InvalidCell {
            cell: Cell::new(5, 5),
            grid_size: 5
        })
    );
    assert_eq!(
        locator.compute::<String>(&[], &[], &[]),
        Err(LocateError::NoShapes)
    );
}

#[test]
fn concurrent_calls_agree() {
    let locator = Locator::default();
    let present = cells(&[(2, 1)]);
    let absent = cells(&[(2, 3)]);
    let shapes = ["L", "p", "独立双线段"];

    let expected = locator.compute(&shapes, &present, &absent).unwrap();
    let results: Vec<_> = (0..16)
        .into_par_iter()
        .map(|_| locator.compute(&shapes, &present, &absent))
        .collect();

    for result in results {
        assert_eq!(result.as_ref(), Ok(&expected));
    }
}
