use serde::{Serialize, Deserialize};
use log::info;

use crate::config::game::{DEFAULT_SEED, INITIAL_TILES};
use crate::game::engine::BoardEngine;
use crate::game::error::GameError;
use crate::game::types::{Direction, Tile, TileValue};

/// Turn the raw text of the seed prompt into the seed actually used.
/// The line terminator is dropped; an empty seed falls back to `DEFAULT_SEED`.
pub fn normalize_seed(input: &str) -> String {
    let seed = input.trim_end_matches(['\r', '\n']);
    if seed.is_empty() {
        DEFAULT_SEED.to_string()
    } else {
        seed.to_string()
    }
}

/// What happened during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub moved: bool,
    pub merges: usize,
    /// Tile spawned after an effective move.
    pub spawned: Option<Tile>,
}

/// Read-only view of a session handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub seed: String,
    pub size: usize,
    pub turn: u32,
    pub rows: Vec<Vec<TileValue>>,
    pub max_tile: TileValue,
    pub game_over: bool,
}

impl BoardSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// One game from seed entry to game over.
///
/// Starting a new seed means building a new session; nothing carries over.
#[derive(Debug, Clone)]
pub struct GameSession {
    seed: String,
    engine: BoardEngine,
    turn: u32,
}

impl GameSession {
    // Crée une nouvelle partie avec les tuiles de départ
    pub fn new(seed_input: &str, grid_size: usize) -> Result<Self, GameError> {
        let seed = normalize_seed(seed_input);
        let mut engine = BoardEngine::new(grid_size, &seed)?;
        for _ in 0..INITIAL_TILES {
            engine.spawn_tile();
        }
        info!("[GameSession] New game started, seed={:?} size={}", seed, grid_size);

        Ok(GameSession {
            seed,
            engine,
            turn: 0,
        })
    }

    /// Apply a move, then spawn exactly one tile if the grid changed.
    pub fn play(&mut self, direction: Direction) -> TurnOutcome {
        let result = self.engine.apply_move_detailed(direction);
        let spawned = if result.moved {
            self.turn += 1;
            self.engine.spawn_tile()
        } else {
            None
        };

        if result.moved && self.is_game_over() {
            info!(
                "[GameSession] Game over after {} turns, max tile {}",
                self.turn,
                self.engine.max_tile()
            );
        }

        TurnOutcome {
            moved: result.moved,
            merges: result.merges,
            spawned,
        }
    }

    /// Same as [`GameSession::play`] for callers holding a raw `(dx, dy)` vector.
    pub fn play_vector(&mut self, dx: isize, dy: isize) -> Result<TurnOutcome, GameError> {
        let direction = Direction::from_vector(dx, dy)?;
        Ok(self.play(direction))
    }

    pub fn is_game_over(&self) -> bool {
        !self.engine.grid().has_legal_move()
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            seed: self.seed.clone(),
            size: self.engine.size(),
            turn: self.turn,
            rows: self.engine.grid().rows().to_vec(),
            max_tile: self.engine.max_tile(),
            game_over: self.is_game_over(),
        }
    }
}
