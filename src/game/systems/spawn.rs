//! Tile spawning system.
//!
//! This module places one new tile on a random empty cell using the session's
//! seeded generator.

use log::error;

use crate::config::game::{FOUR_TILE, FOUR_TILE_DRAW, SPAWN_DRAW_RANGE, TWO_TILE};
use crate::game::grid::Grid;
use crate::game::rng::SeededRandom;
use crate::game::types::{Tile, TileValue};

/// Value of a new tile: a 4 when the draw hits `FOUR_TILE_DRAW`, a 2 otherwise.
pub fn spawn_value(rng: &mut SeededRandom) -> TileValue {
    let (low, high) = SPAWN_DRAW_RANGE;
    if rng.between(low, high) == FOUR_TILE_DRAW {
        FOUR_TILE
    } else {
        TWO_TILE
    }
}

/// Spawn a tile on an empty cell.
/// Returns `None` and leaves the grid untouched when it is full.
///
/// The cell is drawn first, then the value, so the draw order stays fixed for
/// a given seed.
pub fn spawn_tile(grid: &mut Grid, rng: &mut SeededRandom) -> Option<Tile> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }
    let pos = match rng.pick(&empty) {
        Ok(pos) => *pos,
        Err(err) => {
            error!("[Spawn] {}", err);
            return None;
        }
    };
    let value = spawn_value(rng);
    grid.set(pos, value);
    Some(Tile { pos, value })
}
