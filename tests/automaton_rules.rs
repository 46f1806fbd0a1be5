use lifeboard_core::{Automaton, EngineError, Grid, Pattern};
use proptest::prelude::*;

fn automaton(width: u32, height: u32, alive: &[(u32, u32)]) -> Automaton {
    let mut a = Automaton::new(width, height, None).unwrap();
    for &(x, y) in alive {
        a.set_cell(y * width + x, 1).unwrap();
    }
    a
}

/// Straightforward bounded-edge step used as the oracle.
fn reference_step(grid: &Grid) -> Vec<u8> {
    let (w, h) = (grid.width() as i64, grid.height() as i64);
    let cells = grid.cells();
    let mut next = vec![0u8; cells.len()];
    for y in 0..h {
        for x in 0..w {
            let mut n = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let (nx, ny) = (x + dx, y + dy);
                    if (dx, dy) != (0, 0) && nx >= 0 && ny >= 0 && nx < w && ny < h {
                        n += cells[(ny * w + nx) as usize];
                    }
                }
            }
            let alive = cells[(y * w + x) as usize] == 1;
            let born_or_kept = matches!((alive, n), (true, 2) | (true, 3) | (false, 3));
            next[(y * w + x) as usize] = u8::from(born_or_kept);
        }
    }
    next
}

#[test]
fn test_block_is_stable_for_many_generations() {
    let mut a = automaton(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
    let before = a.cells().to_vec();
    for _ in 0..50 {
        a.tick();
        assert_eq!(a.cells(), before.as_slice());
    }
    assert_eq!(a.generation(), 50);
}

#[test]
fn test_blinker_has_period_two() {
    let mut a = automaton(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let start = a.cells().to_vec();

    a.tick();
    assert_ne!(a.cells(), start.as_slice());
    assert_eq!(a.population(), 3);
    assert_eq!(a.get(7), Ok(1));
    assert_eq!(a.get(12), Ok(1));
    assert_eq!(a.get(17), Ok(1));

    a.tick();
    assert_eq!(a.cells(), start.as_slice());
}

#[test]
fn test_blinker_on_minimum_board_touching_edges() {
    // On a 3x3 board the blinker's arms touch the border; wrapping would
    // fill the board, bounded edges keep it oscillating.
    let mut a = automaton(3, 3, &[(0, 1), (1, 1), (2, 1)]);
    let start = a.cells().to_vec();
    a.tick();
    assert_eq!(a.cells(), &[0, 1, 0, 0, 1, 0, 0, 1, 0]);
    a.tick();
    assert_eq!(a.cells(), start.as_slice());
}

#[test]
fn test_glider_travels_four_generations() {
    let mut a = Automaton::new(8, 8, Some(&Pattern::Glider.seed_cells(8, 8, None))).unwrap();
    let start: Vec<u32> = live(&a);
    for _ in 0..4 {
        a.tick();
    }
    // One cell down and to the right.
    let moved: Vec<u32> = start.iter().map(|i| i + 8 + 1).collect();
    assert_eq!(live(&a), moved);
}

#[test]
fn test_set_cell_bounds() {
    let mut a = Automaton::new(4, 3, None).unwrap();
    a.set_cell(11, 1).unwrap();
    assert_eq!(a.get(11), Ok(1));
    assert_eq!(
        a.set_cell(12, 1),
        Err(EngineError::IndexOutOfRange { index: 12, len: 12 })
    );
    assert_eq!(
        a.get(12),
        Err(EngineError::IndexOutOfRange { index: 12, len: 12 })
    );
    assert_eq!(a.generation(), 0);
}

fn live(a: &Automaton) -> Vec<u32> {
    a.cells()
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == 1)
        .map(|(i, _)| i as u32)
        .collect()
}

prop_compose! {
    fn arb_board()(width in 3u32..12, height in 3u32..12)(
        cells in proptest::collection::vec(0u8..=1, (width * height) as usize),
        width in Just(width),
        height in Just(height)
    ) -> Grid {
        Grid::create(width, height, Some(&cells)).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_dead_board_is_fixed_point(width in 3u32..40, height in 3u32..40) {
        let mut a = Automaton::new(width, height, None).unwrap();
        a.tick();
        prop_assert!(!a.is_alive());
        prop_assert_eq!(a.cells().len(), (width * height) as usize);
    }

    #[test]
    fn test_tick_matches_reference(grid in arb_board()) {
        let expected = reference_step(&grid);
        let mut a = Automaton::from_grid(grid);
        a.tick();
        prop_assert_eq!(a.cells(), expected.as_slice());
        prop_assert_eq!(a.generation(), 1);
    }
}
