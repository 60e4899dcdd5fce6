/// Main configuration module.
/// 
/// Re-exports submodules for game configuration.
pub mod game;
