use treasure_heatmap::{Cell, CoverageGrid, Estimate, Pattern};

/// Install `env_logger` for the test binary, ignoring repeated calls.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a list of cells from `(row, column)` pairs.
#[allow(dead_code)]
pub fn cells(coordinates: &[(usize, usize)]) -> Vec<Cell> {
    coordinates.iter().copied().map(Cell::from).collect()
}

/// Count placements of a pattern directly from the bounding box of each of its
/// four orientations: `(n - max_row) * (n - max_col)` translations apiece.
#[allow(dead_code)]
pub fn expected_pattern_count(pattern: &Pattern, grid_size: usize) -> usize {
    pattern
        .orientations()
        .map(|orientation| {
            let (max_row, max_col) = orientation.extent();
            grid_size.saturating_sub(max_row) * grid_size.saturating_sub(max_col)
        })
        .sum()
}

/// Count pairs of a 3 cell line and a 2 cell line that do not overlap, using
/// plain coordinate tuples.
#[allow(dead_code)]
pub fn expected_double_segment_count(grid_size: usize) -> usize {
    fn lines(len: usize, grid_size: usize) -> Vec<Vec<(usize, usize)>> {
        let mut lines = Vec::new();
        if len > grid_size {
            return lines;
        }

        for fixed in 0..grid_size {
            for start in 0..=(grid_size - len) {
                lines.push((start..start + len).map(|moving| (fixed, moving)).collect());
                lines.push((start..start + len).map(|moving| (moving, fixed)).collect());
            }
        }

        lines
    }

    let long_lines = lines(3, grid_size);
    let short_lines = lines(2, grid_size);

    long_lines
        .iter()
        .map(|long| {
            short_lines
                .iter()
                .filter(|short| short.iter().all(|cell| !long.contains(cell)))
                .count()
        })
        .sum()
}

/// Return the grid rotated a quarter turn, so that the value at `(row, col)`
/// moves to `(col, n - 1 - row)`.
#[allow(dead_code)]
pub fn rotate_rows(grid: &CoverageGrid) -> Vec<Vec<usize>> {
    let n = grid.size();
    let rows = grid.to_rows();
    let mut rotated = vec![vec![0; n]; n];

    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            rotated[col][n - 1 - row] = *value;
        }
    }

    rotated
}

/// Assert that an estimate has no surviving placements.
#[allow(dead_code)]
pub fn assert_empty(estimate: &Estimate) {
    assert_eq!(estimate.count, 0);
    assert!(estimate.coverage.is_zero());
    assert_eq!(
        estimate.coverage.to_rows(),
        vec![vec![0; estimate.coverage.size()]; estimate.coverage.size()]
    );
}
