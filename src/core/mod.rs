//! Shared state, constants and the fixed-step driver.

pub mod constants;
pub mod context;
pub mod game_loop;

pub use context::GameContext;
pub use game_loop::{GameLoop, TickReport};
