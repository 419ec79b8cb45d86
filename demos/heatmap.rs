//! Print the coverage heat-map for a set of shapes and known cells.
//! Usage:
//!
//! ```bash
//! cargo run --example heatmap L,T +1,1 -0,0 -4,4
//! ```
//!
//! The first argument is a comma separated list of shape names. Every other
//! argument is a `row,col` cell prefixed with `+` if it is known to hold part
//! of the target, or `-` if it is known to be empty.

use treasure_heatmap::{Cell, ConstraintSet, Locator, Shape};

fn parse_cell(coordinates: &str) -> Option<Cell> {
    let (row, col) = coordinates.split_once(',')?;
    Some(Cell::new(row.trim().parse().ok()?, col.trim().parse().ok()?))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("shape list needed, one of:");
        for shape in Shape::ALL {
            eprintln!("  {:<6} {}", shape.name(), shape.description());
        }
        std::process::exit(1);
    }

    let shapes = match args[1]
        .split(',')
        .map(str::parse::<Shape>)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(shapes) => shapes,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut constraints = ConstraintSet::default();
    for arg in &args[2..] {
        let cell = arg.get(1..).and_then(parse_cell);
        match (arg.chars().next(), cell) {
            (Some('+'), Some(cell)) => constraints.mark_present(cell),
            (Some('-'), Some(cell)) => constraints.mark_absent(cell),
            _ => {
                eprintln!("invalid cell [{arg}], expected +row,col or -row,col");
                std::process::exit(1);
            }
        }
    }

    let locator = Locator::default();
    match locator.compute_shapes(&shapes, &constraints) {
        Ok(estimate) => {
            let names: Vec<_> = shapes.iter().map(|shape| shape.name()).collect();
            println!(
                "{} placements consistent with [{}]",
                estimate.count,
                names.join(", ")
            );
            print!("{}", estimate.coverage);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
