//! Normalized player intents fed to the state machine.

use super::types::Screen;
use crate::config::{SkinCategory, VolumeChannel};

/// Input after the host has translated raw events. Coordinates are already
/// in logical field space.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Click or touch. Resolved against the current screen's buttons; in
    /// play it flaps, on the game-over screen it restarts.
    PointerDown { x: f64, y: f64 },
    /// Space-bar style action: flap while playing, restart after a crash.
    PrimaryAction,
    /// Escape: leave a sub-screen or the game-over screen for the main menu.
    CancelAction,
    /// A concrete menu action, normally produced by button resolution.
    Ui(UiAction),
}

/// Menu actions bound to on-screen buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    StartGame,
    Open(Screen),
    Back,
    SelectDifficulty(String),
    ToggleParticles,
    ToggleScreenShake,
    /// Step a volume up by a tenth, wrapping to mute.
    CycleVolume(VolumeChannel),
    ShopItem { category: SkinCategory, id: String },
}
