//! Fixed-step driver shared by the terminal host and the tests.
//!
//! The driver owns the [`GameContext`] and the random source, so a seeded
//! loop replays identically given the same intents and tick counts.

use crate::config::{GameConfig, Settings};
use crate::core::constants::{MAX_FRAME_MS, TICK_MS};
use crate::core::context::GameContext;
use crate::game::events::SoundEvent;
use crate::game::intent::Intent;
use crate::game::physics::Collision;
use crate::game::scoring::PassKind;
use crate::game::snapshot::{self, Snapshot};
use crate::game::state_machine;
use crate::profile::PlayerProfile;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of one tick - everything the host may want to react to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Sounds emitted since the previous tick, intents included
    pub sounds: Vec<SoundEvent>,
    /// Pipes passed this tick, in order
    pub passes: Vec<PassKind>,
    /// Collision that ended the session this tick
    pub collision: Option<Collision>,
}

impl TickReport {
    pub fn scored(&self) -> u32 {
        self.passes.len() as u32
    }

    pub fn perfect(&self) -> u32 {
        self.passes
            .iter()
            .filter(|kind| **kind == PassKind::Perfect)
            .count() as u32
    }

    pub fn game_over(&self) -> bool {
        self.collision.is_some()
    }

    /// Fold a later report into this one.
    pub fn merge(&mut self, other: TickReport) {
        self.sounds.extend(other.sounds);
        self.passes.extend(other.passes);
        if other.collision.is_some() {
            self.collision = other.collision;
        }
    }
}

pub struct GameLoop {
    ctx: GameContext,
    rng: StdRng,
    accumulated_ms: u64,
    tick_count: u64,
}

impl GameLoop {
    pub fn new(config: GameConfig, profile: PlayerProfile, settings: Settings) -> Self {
        Self::from_parts(GameContext::new(config, profile, settings), StdRng::from_entropy())
    }

    /// Deterministic loop for replays and tests.
    pub fn with_seed(
        config: GameConfig,
        profile: PlayerProfile,
        settings: Settings,
        seed: u64,
    ) -> Self {
        Self::from_parts(
            GameContext::new(config, profile, settings),
            StdRng::seed_from_u64(seed),
        )
    }

    fn from_parts(ctx: GameContext, rng: StdRng) -> Self {
        Self {
            ctx,
            rng,
            accumulated_ms: 0,
            tick_count: 0,
        }
    }

    /// Run exactly one fixed step.
    pub fn tick(&mut self) -> TickReport {
        self.tick_count += 1;
        state_machine::step(&mut self.ctx, &mut self.rng)
    }

    /// Advance by wall-clock time. `dt_ms` is clamped to [`MAX_FRAME_MS`]
    /// so a stalled host does not fast-forward the bird into a pipe; the
    /// remainder below one tick carries over to the next call.
    pub fn advance(&mut self, dt_ms: u64) -> TickReport {
        self.accumulated_ms += dt_ms.min(MAX_FRAME_MS);
        let mut report = TickReport::default();
        while self.accumulated_ms >= TICK_MS {
            self.accumulated_ms -= TICK_MS;
            report.merge(self.tick());
        }
        report
    }

    /// Apply an intent between ticks. Returns the sounds it produced; they
    /// are not repeated in the next tick's report.
    pub fn handle(&mut self, intent: Intent) -> Vec<SoundEvent> {
        state_machine::handle_intent(&mut self.ctx, &mut self.rng, intent);
        self.ctx.drain_sounds()
    }

    pub fn snapshot(&self) -> Snapshot {
        snapshot::snapshot(&self.ctx)
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(
            GameConfig::default(),
            PlayerProfile::default(),
            Settings::default(),
        )
    }
}
