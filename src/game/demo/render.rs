//! Game rendering (terminal).
//!
//! This module turns a session snapshot into text for the demo loop.

use std::io::{self, Write};

use crate::game::state::BoardSnapshot;
use crate::game::types::TileValue;

/// Width of one cell, wide enough for five-digit tiles.
const CELL_WIDTH: usize = 6;

fn cell_symbol(value: TileValue) -> String {
    if value == 0 {
        ".".to_string()
    } else {
        value.to_string()
    }
}

/// Render the grid, one line per row, values right-aligned.
pub fn format_grid(rows: &[Vec<TileValue>]) -> String {
    let mut out = String::new();
    for row in rows {
        for value in row {
            out.push_str(&format!("{:>width$}", cell_symbol(*value), width = CELL_WIDTH));
        }
        out.push('\n');
    }
    out
}

/// Write the session header followed by the grid.
pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &BoardSnapshot) -> io::Result<()> {
    writeln!(out, "--- Seed {:?} | Turn {} | Best {} ---", snapshot.seed, snapshot.turn, snapshot.max_tile)?;
    write!(out, "{}", format_grid(&snapshot.rows))?;
    writeln!(out)
}
