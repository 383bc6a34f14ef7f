//! Behavioral tests for the life engine.

use life_engine::{Grid, LifeEngine};

/// Parses `*`/`-` rows into a boolean matrix.
fn pattern(rows: &[&str]) -> Vec<Vec<bool>> {
    rows.iter()
        .map(|row| row.chars().map(|ch| ch == '*').collect())
        .collect()
}

fn assert_grid(grid: &Grid, expected: &[&str], step: usize) {
    assert_eq!(
        grid.to_string(),
        expected.join("\n"),
        "step {step} grid state:\n{grid}"
    );
}

#[test]
fn test_glider_on_bounded_grid() {
    let generations: [[&str; 4]; 5] = [
        ["-*--", "--*-", "***-", "----"],
        ["----", "*-*-", "-**-", "-*--"],
        ["----", "--*-", "*-*-", "-**-"],
        ["----", "-*--", "--**", "-**-"],
        ["----", "--*-", "---*", "-***"],
    ];

    let mut engine = LifeEngine::new(4, 4);
    engine.start(&pattern(&generations[0]));
    assert_grid(engine.grid(), &generations[0], 0);

    for (step, expected) in generations.iter().enumerate().skip(1) {
        engine.next_step();
        assert_grid(engine.grid(), expected, step);
    }
}

#[test]
fn test_glider_seeded_with_integers() {
    let begin = [[0, 1, 0, 0], [0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0]];
    let mut engine = LifeEngine::new(4, 4);
    engine.start_with(&begin, &1);
    engine.next_step();
    assert_grid(engine.grid(), &["----", "*-*-", "-**-", "-*--"], 1);
}

#[test]
fn test_block_is_still_life() {
    let block = pattern(&["----", "-**-", "-**-", "----"]);
    let mut engine = LifeEngine::new(4, 4);
    engine.start(&block);
    let before = engine.grid().clone();
    for _ in 0..5 {
        engine.next_step();
        assert_eq!(engine.grid(), &before);
    }
}

#[test]
fn test_corner_block_is_still_life() {
    // Each cell has exactly three in-bounds neighbors.
    let mut engine = LifeEngine::new(3, 3);
    engine.start(&pattern(&["**", "**"]));
    engine.next_step();
    assert_grid(engine.grid(), &["**-", "**-", "---"], 1);
}

#[test]
fn test_corner_cell_survives_with_two_neighbors() {
    let mut engine = LifeEngine::new(3, 3);
    engine.start(&pattern(&["**-", "*--", "---"]));
    engine.next_step();
    assert!(engine.grid().is_alive(0, 0));
}

#[test]
fn test_corner_cell_dies_with_one_neighbor() {
    let mut engine = LifeEngine::new(3, 3);
    engine.start(&pattern(&["**-", "---", "---"]));
    engine.next_step();
    assert!(!engine.grid().is_alive(0, 0));
    assert_eq!(engine.grid().population(), 0);
}

#[test]
fn test_opposite_edges_do_not_interact() {
    // Would be a blinker on a torus; on a bounded grid both cells just die.
    let mut engine = LifeEngine::new(3, 3);
    engine.start(&pattern(&["*-*", "---", "---"]));
    engine.next_step();
    assert_eq!(engine.grid().population(), 0);
}

#[test]
fn test_birth_with_any_three_neighbors() {
    let offsets = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
    ];
    for a in 0..offsets.len() {
        for b in (a + 1)..offsets.len() {
            for c in (b + 1)..offsets.len() {
                let mut seed = vec![vec![false; 3]; 3];
                for &(r, col) in [offsets[a], offsets[b], offsets[c]].iter() {
                    seed[r][col] = true;
                }
                let mut engine = LifeEngine::new(3, 3);
                engine.start(&seed);
                engine.next_step();
                assert!(
                    engine.grid().is_alive(1, 1),
                    "center not born with neighbors {:?}",
                    [offsets[a], offsets[b], offsets[c]]
                );
            }
        }
    }
}

#[test]
fn test_step_is_deterministic() {
    let seed = pattern(&["-**--", "**---", "-*---", "-----", "---**"]);
    let mut first = LifeEngine::new(5, 5);
    first.start(&seed);
    let mut second = LifeEngine::new(5, 5);
    second.start(&seed);

    // A different history that lands on the same grid.
    second.next_step();
    second.restart(&seed);

    for _ in 0..10 {
        first.next_step();
        second.next_step();
        assert_eq!(first.grid(), second.grid());
    }
}

#[test]
fn test_dimensions_never_change() {
    let mut engine = LifeEngine::new(6, 9);
    engine.start(&pattern(&["***********", "*", "**"]));
    for _ in 0..8 {
        assert_eq!(engine.grid().rows(), 6);
        assert!(engine.grid().rows_iter().all(|row| row.len() == 9));
        engine.next_step();
    }
    engine.stop();
    assert_eq!((engine.grid().rows(), engine.grid().cols()), (6, 9));
}

#[test]
fn test_stop_clears_every_cell() {
    let mut engine = LifeEngine::new(4, 4);
    engine.start(&pattern(&["****", "****", "****", "****"]));
    engine.stop();
    assert_eq!(engine.grid().population(), 0);
    assert_eq!((engine.grid().rows(), engine.grid().cols()), (4, 4));
}

#[test]
fn test_restart_replaces_state() {
    let mut engine = LifeEngine::new(2, 2);
    engine.start(&pattern(&["**", "**"]));
    engine.restart(&pattern(&["-*"]));
    assert_grid(engine.grid(), &["-*", "--"], 0);
}
