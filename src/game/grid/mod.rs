//! Grid storage and queries.

pub mod grid;

pub use grid::*;
