// Terminal front end for the game. Provides submodules for the interactive
// game loop and text rendering of the grid.
pub mod game_loop;
pub mod render;
