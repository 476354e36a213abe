#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use torus_life::utils::generate_config;
    use torus_life::{Grid, Mode};

    const SEED: u64 = 42;
    const FILL_RATE: f64 = 0.3;

    fn randomly_filled(height: usize, width: usize, seed: u64) -> Grid {
        let lines = generate_config(height, width, FILL_RATE, Some(seed)).unwrap();
        Grid::from_lines(&lines).unwrap()
    }

    fn assert_fields_equal(expected: &Grid, actual: &Grid, label: &str) {
        if expected.snapshot() == actual.snapshot() {
            return;
        }
        let (expected, actual) = (expected.snapshot(), actual.snapshot());
        for (r, (row_e, row_a)) in expected.iter().zip(actual.iter()).enumerate() {
            if let Some(c) = row_e.iter().zip(row_a).position(|(e, a)| e != a) {
                panic!("{label}: mismatch at ({r}, {c})");
            }
        }
        panic!("{label}: fields differ in shape");
    }

    #[test]
    fn test_consistency() {
        for (height, width) in [(64, 64), (37, 91), (1, 50), (50, 1), (2, 2)] {
            let initial = randomly_filled(height, width, SEED);
            let mut sequential = initial.clone();
            sequential.advance(32);
            for workers in 1..=8 {
                let mut concurrent = initial.clone();
                concurrent.advance_concurrent(32, workers).unwrap();
                assert_fields_equal(
                    &sequential,
                    &concurrent,
                    &format!("{height}x{width}, {workers} workers"),
                );
            }
        }
    }

    #[test]
    fn test_repetitive_updates() {
        let mut sequential = randomly_filled(48, 40, SEED);
        let mut concurrent = sequential.clone();
        for steps in 0..10 {
            sequential.advance(steps);
            concurrent.advance_concurrent(steps, 3).unwrap();
            assert_fields_equal(&sequential, &concurrent, &format!("after +{steps}"));
        }
    }

    #[test]
    fn test_construction_is_idempotent() {
        let lines = generate_config(30, 20, FILL_RATE, Some(SEED)).unwrap();
        let mut a = Grid::from_lines(&lines).unwrap();
        let mut b = Grid::from_lines(&lines).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
        a.evolve(17, Mode::Concurrent(4)).unwrap();
        b.evolve(17, Mode::Concurrent(4)).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_lines_round_trip_preserves_state() {
        let mut grid = randomly_filled(20, 25, SEED);
        grid.advance(5);
        let copy = Grid::from_lines(&grid.to_lines()).unwrap();
        assert_eq!(copy.snapshot(), grid.snapshot());
    }

    proptest! {
        #[test]
        fn proptest_modes_are_equivalent(
            height in 1usize..12,
            width in 1usize..12,
            steps in 0u64..12,
            workers in 1usize..10,
            seed in any::<u64>(),
        ) {
            let initial = randomly_filled(height, width, seed);
            let mut sequential = initial.clone();
            sequential.advance(steps);
            let mut concurrent = initial;
            concurrent.advance_concurrent(steps, workers).unwrap();
            prop_assert_eq!(sequential.snapshot(), concurrent.snapshot());
        }
    }
}
