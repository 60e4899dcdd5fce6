//! Deterministic core of a sliding-tile merge puzzle.
//!
//! A [`game::BoardEngine`] owns an N×N grid and a [`game::SeededRandom`]
//! built from a seed string. Callers apply a move and, when it changed the
//! grid, spawn one tile. The same seed and the same moves always produce the
//! same grids.

pub mod config;
pub mod game;

#[cfg(test)]
mod tests;
