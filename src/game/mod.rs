pub mod types;
pub mod error;
pub mod rng;
pub mod engine;
pub mod state;

pub mod grid;
pub mod systems;
pub mod demo;

pub use types::*;
pub use error::GameError;
pub use rng::SeededRandom;
pub use engine::BoardEngine;
pub use state::{GameSession, BoardSnapshot, TurnOutcome};
