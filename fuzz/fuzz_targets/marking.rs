#![no_main]

use libfuzzer_sys::fuzz_target;
use treasure_heatmap::{Cell, ConstraintSet};

fuzz_target!(|marks: Vec<(bool, u8, u8)>| {
    let mut constraints = ConstraintSet::default();

    for (present, row, col) in marks {
        let cell = Cell::new(usize::from(row % 5), usize::from(col % 5));
        if present {
            constraints.mark_present(cell);
        } else {
            constraints.mark_absent(cell);
        }
    }

    // Marking keeps the two lists disjoint and free of duplicates.
    for cell in &constraints.required_present {
        assert!(!constraints.required_absent.contains(cell));
        assert_eq!(
            constraints.required_present.iter().filter(|c| *c == cell).count(),
            1
        );
    }
    for cell in &constraints.required_absent {
        assert_eq!(
            constraints.required_absent.iter().filter(|c| *c == cell).count(),
            1
        );
    }
});
