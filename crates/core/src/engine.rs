//! Engine module - the 2048 state machine
//!
//! An [`Engine`] owns one [`Grid`] and one random source. Each call to
//! [`Engine::next`] slides and merges every tile toward the chosen edge, then
//! spawns a new tile in a blank cell. When the slide leaves no blank cell the
//! move reports [`EngineError::Lost`] and the grid keeps its post-slide state.
//!
//! The random source is a type parameter so tests can inject a seeded
//! generator; everything else about the engine is deterministic.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::grid::{Grid, GridError};
use crate::slide::{slide, SlideOutcome};
use crate::types::{Coord, Direction, SPAWN_VALUE};

/// Terminal outcome of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The board was full after sliding; no tile could be spawned.
    #[error("player lost the game")]
    Lost,
}

impl EngineError {
    pub fn is_lost(&self) -> bool {
        matches!(self, EngineError::Lost)
    }
}

/// How the cell for a new tile is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpawnPolicy {
    /// Uniformly among all blank cells, using the engine's random source.
    #[default]
    Random,
    /// The first blank cell in row-major order. Never touches the random source.
    FirstBlank,
}

impl SpawnPolicy {
    /// Parse a policy name (`"random"` or `"first"`, case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "random" => Some(SpawnPolicy::Random),
            "first" | "first-blank" | "firstblank" => Some(SpawnPolicy::FirstBlank),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnPolicy::Random => "random",
            SpawnPolicy::FirstBlank => "first",
        }
    }
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Where the new tile was placed.
    pub spawned: Coord,
    /// Slide statistics for the move.
    pub slide: SlideOutcome,
}

/// Game engine: one grid, one random source.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    grid: Grid,
    rng: R,
    policy: SpawnPolicy,
}

impl Engine<StdRng> {
    /// Empty 4x4 grid seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_grid(Grid::default())
    }

    /// Empty grid of the given side length seeded from OS entropy.
    pub fn with_size(size: usize) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(size)?))
    }

    /// Start from a literal grid, seeded from OS entropy.
    pub fn from_grid(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Start from a literal grid with a reproducible seed.
    ///
    /// ```
    /// use tui_2048_core::{Engine, Grid};
    /// use tui_2048_core::types::Direction;
    ///
    /// let start = Grid::default();
    /// let mut a = Engine::with_seed(start.clone(), 7);
    /// let mut b = Engine::with_seed(start, 7);
    /// a.next(Direction::Left).unwrap();
    /// b.next(Direction::Left).unwrap();
    /// assert_eq!(a.grid(), b.grid());
    /// ```
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Engine<R> {
    /// Start from a literal grid with an injected random source.
    pub fn with_rng(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            rng,
            policy: SpawnPolicy::default(),
        }
    }

    pub fn with_spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn spawn_policy(&self) -> SpawnPolicy {
        self.policy
    }

    /// Apply one move: slide and merge toward `direction`, then spawn a tile.
    ///
    /// Returns where the new tile landed, or [`EngineError::Lost`] when the
    /// board was full after sliding. After `Lost` the game is over; further
    /// calls keep reporting `Lost` as long as the board stays full.
    pub fn next(&mut self, direction: Direction) -> Result<Coord, EngineError> {
        self.step(direction).map(|report| report.spawned)
    }

    /// Like [`Engine::next`], but also reports slide statistics.
    pub fn step(&mut self, direction: Direction) -> Result<MoveReport, EngineError> {
        let outcome = slide(&mut self.grid, direction);

        let Some(spawned) = self.find_blank() else {
            debug!(
                "{} slid (moved={}, merges={}), board full",
                direction, outcome.moved, outcome.merges
            );
            return Err(EngineError::Lost);
        };

        self.grid.set(spawned, SPAWN_VALUE);
        debug!(
            "{} slid (moved={}, merges={}), spawned {} at {}",
            direction, outcome.moved, outcome.merges, SPAWN_VALUE, spawned
        );

        Ok(MoveReport {
            spawned,
            slide: outcome,
        })
    }

    fn find_blank(&mut self) -> Option<Coord> {
        match self.policy {
            SpawnPolicy::FirstBlank => self.grid.first_blank(),
            SpawnPolicy::Random => {
                let blanks = self.grid.blanks();
                if blanks.is_empty() {
                    return None;
                }
                let pick = self.rng.gen_range(0..blanks.len());
                Some(blanks[pick])
            }
        }
    }
}
