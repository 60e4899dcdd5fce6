//! Board state transition engine.
//!
//! Owns the grid and the seeded generator of one session. The only ways to
//! mutate the grid are [`BoardEngine::apply_move`] and [`BoardEngine::spawn_tile`].

use log::{debug, warn};

use crate::game::error::GameError;
use crate::game::grid::Grid;
use crate::game::rng::SeededRandom;
use crate::game::systems::{apply_move, spawn_tile};
use crate::game::types::{Direction, MoveResult, Position, Tile, TileValue};

#[derive(Debug, Clone)]
pub struct BoardEngine {
    grid: Grid,
    rng: SeededRandom,
}

impl BoardEngine {
    /// Create an engine with an empty `size` x `size` grid.
    pub fn new(size: usize, seed: &str) -> Result<Self, GameError> {
        Ok(BoardEngine {
            grid: Grid::new(size)?,
            rng: SeededRandom::new(seed),
        })
    }

    /// Create an engine over an existing grid, e.g. a position under test.
    pub fn with_grid(grid: Grid, seed: &str) -> Self {
        BoardEngine {
            grid,
            rng: SeededRandom::new(seed),
        }
    }

    /// Slide and merge all tiles in `direction`.
    /// Returns `true` iff at least one tile moved or merged.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        self.apply_move_detailed(direction).moved
    }

    /// Same as [`BoardEngine::apply_move`] but also reports the merge count.
    pub fn apply_move_detailed(&mut self, direction: Direction) -> MoveResult {
        let result = apply_move(&mut self.grid, direction);
        debug!(
            "[BoardEngine] Move {:?}: moved={} merges={}",
            direction, result.moved, result.merges
        );
        result
    }

    /// Place a 2 (or, one draw in ten, a 4) on a random empty cell.
    /// On a full grid nothing happens and `None` is returned.
    pub fn spawn_tile(&mut self) -> Option<Tile> {
        let tile = spawn_tile(&mut self.grid, &mut self.rng);
        match tile {
            Some(t) => debug!(
                "[BoardEngine] Spawned {} at ({}, {})",
                t.value, t.pos.row, t.pos.col
            ),
            None => warn!("[BoardEngine] Spawn requested on a full grid"),
        }
        tile
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Value at `(row, col)`, `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<TileValue> {
        self.grid.get(Position { row, col })
    }

    pub fn max_tile(&self) -> TileValue {
        self.grid.max_tile()
    }
}
