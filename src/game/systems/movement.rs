//! Tile movement system.
//!
//! This module slides and merges every tile of a grid in one direction.

use std::collections::HashSet;

use crate::game::grid::{merged_value, Grid};
use crate::game::types::{Direction, MoveResult, Position};

/// Slide every tile as far as it goes in `direction`, merging equal neighbours.
///
/// Lines are scanned starting from the edge tiles travel towards, so a tile
/// never gets blocked by one that has not moved yet. A cell produced by a
/// merge cannot take part in a second merge during the same call. Two tiles
/// whose sum does not fit in a `TileValue` block each other.
pub fn apply_move(grid: &mut Grid, direction: Direction) -> MoveResult {
    let (dx, dy) = direction.vector();
    let size = grid.size();
    let order: Vec<usize> = if direction.towards_far_edge() {
        (0..size).rev().collect()
    } else {
        (0..size).collect()
    };

    let mut merged: HashSet<Position> = HashSet::new();
    let mut result = MoveResult::default();

    for &i in &order {
        for &j in &order {
            let start = Position {
                row: if dy != 0 { i } else { j },
                col: if dx != 0 { i } else { j },
            };
            slide_tile(grid, start, (dx, dy), &mut merged, &mut result);
        }
    }

    result
}

/// Move a single tile step by step until it merges or is blocked.
fn slide_tile(
    grid: &mut Grid,
    start: Position,
    (dx, dy): (isize, isize),
    merged: &mut HashSet<Position>,
    result: &mut MoveResult,
) {
    let value = grid.at(start);
    if value == 0 {
        return;
    }

    let mut current = start;
    while let Some(next) = grid.neighbour(current, dx, dy) {
        let target = grid.at(next);
        if target == 0 {
            grid.set(next, value);
            grid.set(current, 0);
            current = next;
            result.moved = true;
        } else if target == value && !merged.contains(&next) {
            let Some(doubled) = merged_value(value) else {
                break;
            };
            grid.set(next, doubled);
            grid.set(current, 0);
            merged.insert(next);
            result.merges += 1;
            result.moved = true;
            break;
        } else {
            break;
        }
    }
}
