//! The single owner of all mutable game state.

use crate::config::{DifficultyConfig, GameConfig, Settings};
use crate::game::events::SoundEvent;
use crate::game::particles::{ParticleColor, ParticleSystem};
use crate::game::types::{Mode, Session};
use crate::profile::PlayerProfile;
use rand::Rng;

/// Everything the state machine reads or writes. Owned by the loop driver
/// and handed to every engine operation; there is no other mutable state.
#[derive(Debug, Clone)]
pub struct GameContext {
    pub mode: Mode,
    /// Present from the first start onwards; frozen after game over.
    pub session: Option<Session>,
    pub profile: PlayerProfile,
    pub settings: Settings,
    pub config: GameConfig,
    pub particles: ParticleSystem,
    /// Seconds of simulated time, advanced every tick in every mode.
    pub animation_time: f64,
    /// Current screen-shake magnitude in field units.
    pub screen_shake: f64,
    pub(crate) sounds: Vec<SoundEvent>,
}

impl GameContext {
    pub fn new(config: GameConfig, profile: PlayerProfile, settings: Settings) -> Self {
        Self {
            mode: Mode::MainMenu,
            session: None,
            profile,
            settings,
            config,
            particles: ParticleSystem::new(),
            animation_time: 0.0,
            screen_shake: 0.0,
            sounds: Vec::new(),
        }
    }

    /// Difficulty selected in settings, resolved through the catalog.
    pub fn selected_difficulty(&self) -> DifficultyConfig {
        self.config.difficulties.get(&self.settings.difficulty)
    }

    pub fn emit(&mut self, sound: SoundEvent) {
        tracing::debug!(sound = sound.name(), "sound");
        self.sounds.push(sound);
    }

    /// Take the sounds queued since the last drain.
    pub fn drain_sounds(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.sounds)
    }

    pub fn burst<R: Rng>(&mut self, rng: &mut R, x: f64, y: f64, count: usize, color: ParticleColor) {
        self.particles
            .burst(rng, self.settings.particles, x, y, count, color);
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(
            GameConfig::default(),
            PlayerProfile::default(),
            Settings::default(),
        )
    }
}
