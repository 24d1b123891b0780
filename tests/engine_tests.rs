//! Engine tests - moves, spawns and loss detection through the public API

use rand::RngCore;

use tui_2048::core::{Engine, EngineError, Grid, SpawnPolicy};
use tui_2048::types::{Coord, Direction, Tile};

fn grid<const N: usize>(rows: [[Tile; N]; N]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

/// Random source whose every draw is zero, so a uniform pick always lands on
/// the first candidate.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        dest.fill(0);
        Ok(())
    }
}

/// True if, walking each line from the edge `direction` points at, no empty
/// cell is followed by a tile.
fn is_packed(g: &Grid, direction: Direction) -> bool {
    let n = g.size();
    (0..n).all(|k| {
        let line: Vec<Tile> = (0..n)
            .map(|step| {
                let (row, col) = match direction {
                    Direction::Left => (k, step),
                    Direction::Right => (k, n - 1 - step),
                    Direction::Up => (step, k),
                    Direction::Down => (n - 1 - step, k),
                };
                g.get(row, col).unwrap()
            })
            .collect();
        let first_gap = line.iter().position(|&v| v == 0).unwrap_or(n);
        line[first_gap..].iter().all(|&v| v == 0)
    })
}

fn without(g: &Grid, cell: Coord) -> Grid {
    let mut rows = g.to_rows();
    rows[cell.row][cell.col] = 0;
    Grid::from_rows(rows).unwrap()
}

fn sample_grids() -> Vec<Grid> {
    vec![
        grid([[0, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        grid([[2, 0, 2, 4], [0, 4, 4, 4], [8, 0, 0, 8], [0, 2, 0, 2]]),
        grid([[2, 2, 2, 2], [4, 0, 4, 0], [0, 0, 0, 16], [32, 0, 32, 2]]),
        grid([[0, 8, 0, 8], [16, 16, 0, 0], [2, 0, 0, 2], [4, 4, 8, 8]]),
        grid([[2, 4, 0], [0, 4, 2], [2, 0, 2]]),
    ]
}

#[test]
fn test_single_tile_slides_right_and_spawns_first_blank() {
    let start = grid([[0, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let mut engine = Engine::with_rng(start, ZeroRng);

    let spawned = engine.next(Direction::Right).unwrap();

    assert_eq!(spawned, Coord::new(0, 0));
    assert_eq!(
        engine.grid(),
        &grid([[2, 0, 0, 0], [0, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0]])
    );
}

#[test]
fn test_single_tile_slides_right_with_seeded_random_spawn() {
    let start = grid([[0, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let mut engine = Engine::with_seed(start, 1);

    let spawned = engine.next(Direction::Right).unwrap();

    // Seed 1 drops the new tile into the cell the old one just left.
    assert_eq!(spawned, Coord::new(1, 0));
    assert_eq!(
        engine.grid(),
        &grid([[0, 0, 0, 0], [2, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0]])
    );
}

#[test]
fn test_seeded_random_spawn_lands_on_a_blank() {
    let start = grid([[0, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    for seed in [2, 3, 4, 5] {
        let mut engine = Engine::with_seed(start.clone(), seed);
        let spawned = engine.next(Direction::Right).unwrap();

        assert_eq!(engine.grid().get(1, 3), Some(2));
        assert_ne!(spawned, Coord::new(1, 3));
        assert_eq!(engine.grid().get(spawned.row, spawned.col), Some(2));
        assert_eq!(engine.grid().tile_count(), 2);
    }
}

#[test]
fn test_corner_tile_travels_down() {
    let start = grid([[0, 0, 0, 4], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let mut engine = Engine::with_seed(start, 11);

    let spawned = engine.next(Direction::Down).unwrap();

    assert_eq!(engine.grid().get(3, 3), Some(4));
    assert_ne!(spawned, Coord::new(3, 3));
    assert_eq!(engine.grid().tile_count(), 2);
}

#[test]
fn test_last_blank_is_filled() {
    let start = grid([[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 0]]);
    let mut engine = Engine::with_seed(start, 5);

    assert_eq!(engine.next(Direction::Left), Ok(Coord::new(3, 3)));
    assert!(engine.grid().is_full());
    assert!(engine.grid().blanks().is_empty());
}

#[test]
fn test_full_grid_reports_lost_in_every_direction() {
    let full = grid([[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]]);
    for direction in Direction::ALL {
        let mut engine = Engine::with_seed(full.clone(), 0);
        let result = engine.next(direction);
        assert_eq!(result, Err(EngineError::Lost));
        assert!(result.unwrap_err().is_lost());
        assert_eq!(engine.grid().tile_count(), full.tile_count());
        assert_eq!(engine.grid(), &full);
    }
}

#[test]
fn test_lost_leaves_post_slide_state() {
    // Rows hold distinct values, so only a vertical move can merge the 2s.
    let start = grid([[2, 4], [2, 8]]);
    let mut engine = Engine::with_seed(start.clone(), 0);
    assert_eq!(engine.next(Direction::Left), Err(EngineError::Lost));
    assert_eq!(engine.grid(), &start);

    let mut engine = Engine::with_seed(start, 0).with_spawn_policy(SpawnPolicy::FirstBlank);
    assert_eq!(engine.next(Direction::Up), Ok(Coord::new(1, 0)));
    assert_eq!(engine.grid(), &grid([[4, 4], [2, 8]]));
}

#[test]
fn test_four_in_a_row_merges_pairwise() {
    let start = grid([[2, 2, 2, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let mut engine = Engine::with_seed(start, 4).with_spawn_policy(SpawnPolicy::FirstBlank);

    engine.next(Direction::Left).unwrap();

    assert_eq!(
        engine.grid(),
        &grid([[4, 4, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
    );
}

#[test]
fn test_lines_are_packed_after_every_move() {
    for start in sample_grids() {
        for direction in Direction::ALL {
            let mut engine = Engine::with_seed(start.clone(), 99);
            let spawned = engine.next(direction).unwrap();
            let slid = without(engine.grid(), spawned);
            assert!(
                is_packed(&slid, direction),
                "{direction} left a gap:\n{slid}"
            );
        }
    }
}

#[test]
fn test_sum_grows_by_exactly_the_spawned_tile() {
    for start in sample_grids() {
        for direction in Direction::ALL {
            let mut engine = Engine::with_seed(start.clone(), 7);
            engine.next(direction).unwrap();
            assert_eq!(engine.grid().tile_sum(), start.tile_sum() + 2);
        }
    }
}

#[test]
fn test_tile_count_without_merges_grows_by_one() {
    let start = grid([[0, 2, 0, 4], [8, 0, 16, 0], [0, 0, 0, 2], [4, 0, 2, 0]]);
    let mut engine = Engine::with_seed(start.clone(), 21);
    let report = engine.step(Direction::Left).unwrap();
    assert_eq!(report.slide.merges, 0);
    assert_eq!(engine.grid().tile_count(), start.tile_count() + 1);
}

#[test]
fn test_same_seed_same_game() {
    let moves = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Left,
        Direction::Up,
    ];
    for start in sample_grids() {
        let mut a = Engine::with_seed(start.clone(), 2024);
        let mut b = Engine::with_seed(start, 2024);
        for direction in moves {
            assert_eq!(a.next(direction), b.next(direction));
            assert_eq!(a.grid(), b.grid());
        }
    }
}

#[test]
fn test_game_eventually_ends() {
    let mut engine = Engine::with_seed(Grid::default(), 314);
    let mut outcome = Ok(Coord::new(0, 0));
    for i in 0..100_000 {
        outcome = engine.next(Direction::ALL[i % 4]);
        if outcome.is_err() {
            break;
        }
    }
    assert_eq!(outcome, Err(EngineError::Lost));
    assert!(engine.grid().is_full());
}
