//! Main entry point for the terminal game.
//!
//! Initializes logging, then runs the interactive game loop on stdin/stdout.

use std::io;

use tile_merge::game::demo::game_loop::run_game_loop;

fn main() -> io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_game_loop(&mut input, &mut out)?;
    Ok(())
}
