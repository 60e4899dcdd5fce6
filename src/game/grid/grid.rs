use serde::{Serialize, Deserialize};

use crate::game::error::GameError;
use crate::game::types::{Position, Tile, TileValue};

pub fn generate_grid(size: usize) -> Vec<Vec<TileValue>> {
    vec![vec![0; size]; size]
}

fn is_valid_tile_value(value: TileValue) -> bool {
    value == 0 || (value.is_power_of_two() && value >= 2)
}

/// Value produced by merging two `value` tiles, `None` if it does not fit.
pub fn merged_value(value: TileValue) -> Option<TileValue> {
    value.checked_mul(2)
}

/// Square matrix of tile values, indexed `[row][col]`. `0` marks an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<TileValue>>,
}

impl Grid {
    /// Create an empty `size` x `size` grid.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidArgument {
                reason: "grid size must be at least 1".to_string(),
            });
        }
        Ok(Grid { size, cells: generate_grid(size) })
    }

    /// Build a grid from explicit rows.
    /// Rows must form a non-empty square and hold only 0 or powers of two >= 2.
    pub fn from_rows(rows: Vec<Vec<TileValue>>) -> Result<Self, GameError> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::InvalidArgument {
                reason: "grid size must be at least 1".to_string(),
            });
        }
        if let Some(row) = rows.iter().position(|r| r.len() != size) {
            return Err(GameError::InvalidArgument {
                reason: format!("row {row} has {} cells, expected {size}", rows[row].len()),
            });
        }
        if let Some(value) = rows.iter().flatten().find(|v| !is_valid_tile_value(**v)) {
            return Err(GameError::InvalidArgument {
                reason: format!("{value} is not a valid tile value"),
            });
        }
        Ok(Grid { size, cells: rows })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<TileValue>] {
        &self.cells
    }

    /// Value at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<TileValue> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Caller guarantees `pos` is in bounds.
    pub(crate) fn at(&self, pos: Position) -> TileValue {
        self.cells[pos.row][pos.col]
    }

    /// Caller guarantees `pos` is in bounds.
    pub(crate) fn set(&mut self, pos: Position, value: TileValue) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Step from `pos` by `(dx, dy)`, returning `None` when leaving the grid.
    pub fn neighbour(&self, pos: Position, dx: isize, dy: isize) -> Option<Position> {
        let row = pos.row.checked_add_signed(dy)?;
        let col = pos.col.checked_add_signed(dx)?;
        (row < self.size && col < self.size).then_some(Position { row, col })
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells.iter().enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().filter_map(move |(col, value)| {
                if *value == 0 {
                    Some(Position { row, col })
                } else {
                    None
                }
            }))
            .collect()
    }

    /// Non-empty cells in row-major order.
    pub fn tiles(&self) -> Vec<Tile> {
        self.cells.iter().enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().filter_map(move |(col, value)| {
                (*value != 0).then_some(Tile { pos: Position { row, col }, value: *value })
            }))
            .collect()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|v| **v != 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|v| *v != 0)
    }

    pub fn max_tile(&self) -> TileValue {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// True if some direction would change the grid: an empty cell exists,
    /// or two orthogonally adjacent cells hold the same mergeable value.
    pub fn has_legal_move(&self) -> bool {
        if !self.is_full() {
            return true;
        }
        (0..self.size).any(|row| {
            (0..self.size).any(|col| {
                let value = self.cells[row][col];
                if merged_value(value).is_none() {
                    return false;
                }
                (col + 1 < self.size && self.cells[row][col + 1] == value)
                    || (row + 1 < self.size && self.cells[row + 1][col] == value)
            })
        })
    }
}
