use serde::{Serialize, Deserialize};

use crate::game::error::GameError;

/// Value stored in a grid cell. `0` is an empty cell.
pub type TileValue = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Direction of a move, as a unit vector on the grid.
///
/// `dx` moves along columns (positive to the right), `dy` moves along rows
/// (positive downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)` of this direction.
    pub fn vector(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Build a direction from a raw `(dx, dy)` vector.
    /// Anything other than the four unit vectors is rejected.
    pub fn from_vector(dx: isize, dy: isize) -> Result<Self, GameError> {
        match (dx, dy) {
            (0, -1) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            _ => Err(GameError::InvalidArgument {
                reason: format!("({dx}, {dy}) is not a unit direction vector"),
            }),
        }
    }

    /// True when tiles travel towards the high-index edge (right or bottom).
    pub fn towards_far_edge(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

/// A placed tile, identified only by where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub pos: Position,
    pub value: TileValue,
}

/// Outcome of a single slide/merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// At least one tile changed position or value.
    pub moved: bool,
    /// Number of merges performed during the pass.
    pub merges: usize,
}
