//! Interactive game loop for playing in the terminal.
//!
//! Reads a seed, then one command per line, and renders the grid after
//! every turn. Input and output are generic so the loop can be scripted.

use std::io::{self, BufRead, Write};

use log::info;

use crate::config::game::GRID_SIZE;
use crate::game::demo::render::write_snapshot;
use crate::game::state::GameSession;
use crate::game::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Move(Direction),
    Quit,
    Unknown,
}

/// Map one input line to a command: arrow-key escape sequences or w/a/s/d,
/// `q` to quit.
pub fn parse_command(input: &str) -> PlayerCommand {
    match input.trim() {
        "\x1b[A" | "w" | "W" => PlayerCommand::Move(Direction::Up),
        "\x1b[B" | "s" | "S" => PlayerCommand::Move(Direction::Down),
        "\x1b[D" | "a" | "A" => PlayerCommand::Move(Direction::Left),
        "\x1b[C" | "d" | "D" => PlayerCommand::Move(Direction::Right),
        "q" | "Q" => PlayerCommand::Quit,
        _ => PlayerCommand::Unknown,
    }
}

/// Read one line, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Run a full game: seed prompt, then turns until game over, quit, or end of input.
/// Returns the final session.
pub fn run_game_loop<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<GameSession> {
    write!(out, "Enter seed (empty for default): ")?;
    out.flush()?;
    let seed_line = read_line(input)?.unwrap_or_default();
    let mut session = GameSession::new(&seed_line, GRID_SIZE).map_err(io::Error::other)?;

    writeln!(out, "Game start!")?;
    loop {
        write_snapshot(out, &session.snapshot())?;

        if session.is_game_over() {
            writeln!(out, "No moves left. Game over!")?;
            break;
        }

        write!(out, "Move (← ↑ ↓ → or w/a/s/d, q to quit), then press Enter: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            break;
        };

        match parse_command(&line) {
            PlayerCommand::Move(direction) => {
                if !session.play(direction).moved {
                    writeln!(out, "Nothing moves that way.")?;
                }
            }
            PlayerCommand::Quit => {
                info!("[GameLoop] Player quit on turn {}", session.turn());
                break;
            }
            PlayerCommand::Unknown => {
                writeln!(out, "Unknown command.")?;
            }
        }
    }

    Ok(session)
}
