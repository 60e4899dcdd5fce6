/// Game configuration constants.
/// 
/// This module defines the main gameplay parameters such as grid dimensions,
/// the fallback seed, and the odds used when spawning new tiles.
pub const GRID_SIZE: usize = 4; // Number of rows (and columns) of the square grid.

/// Seed used when the player submits an empty seed.
pub const DEFAULT_SEED: &str = "default";

/// Number of tiles spawned when a new session starts.
pub const INITIAL_TILES: usize = 2;

/// Inclusive range of the draw deciding a spawned tile's value.
pub const SPAWN_DRAW_RANGE: (i32, i32) = (1, 10);

/// Draw (within `SPAWN_DRAW_RANGE`) that spawns a 4 instead of a 2.
pub const FOUR_TILE_DRAW: i32 = 1;

/// Value of a regular spawned tile.
pub const TWO_TILE: u32 = 2;

/// Value of the rare spawned tile.
pub const FOUR_TILE: u32 = 4;
