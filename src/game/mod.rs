//! The arcade core: session state machine plus the physics, obstacle,
//! scoring and particle engines it drives.
//!
//! All state lives in [`crate::core::context::GameContext`]; every function
//! here takes it (or a piece of it) explicitly.

pub mod events;
pub mod intent;
pub mod layout;
pub mod obstacles;
pub mod particles;
pub mod physics;
pub mod scoring;
pub mod snapshot;
pub mod state_machine;
pub mod types;

pub use events::SoundEvent;
pub use intent::{Intent, UiAction};
pub use snapshot::Snapshot;
pub use types::{Mode, Screen};
