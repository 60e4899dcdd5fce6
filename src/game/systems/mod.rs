pub mod movement;
pub mod spawn;

pub use movement::*;
pub use spawn::*;
