//! Owned, read-only view of the game for renderers.

use super::particles::ParticleColor;
use super::types::Mode;
use crate::config::Settings;
use crate::core::context::GameContext;
use crate::profile::PlayerProfile;

#[derive(Debug, Clone, PartialEq)]
pub struct BirdView {
    pub y: f64,
    pub rotation: f64,
    pub wing_phase: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeView {
    pub x: f64,
    pub gap_top: f64,
    pub gap_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub x: f64,
    pub y: f64,
    pub life: f64,
    pub radius: f64,
    pub color: ParticleColor,
}

/// Everything a frame needs. Session fields are zero before the first
/// start and keep their final values on the game-over screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub mode: Mode,
    pub bird: Option<BirdView>,
    pub pipes: Vec<PipeView>,
    pub particles: Vec<ParticleView>,
    pub score: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub perfect_passes: u32,
    pub coins_earned: u64,
    pub scroll_speed: f64,
    pub animation_time: f64,
    pub screen_shake: f64,
    pub profile: PlayerProfile,
    pub settings: Settings,
}

pub fn snapshot(ctx: &GameContext) -> Snapshot {
    let session = ctx.session.as_ref();
    Snapshot {
        mode: ctx.mode,
        bird: session.map(|s| BirdView {
            y: s.bird.y,
            rotation: s.bird.rotation,
            wing_phase: s.bird.wing_phase,
        }),
        pipes: session
            .map(|s| {
                s.pipes
                    .iter()
                    .map(|p| PipeView {
                        x: p.x,
                        gap_top: p.gap_top,
                        gap_height: p.gap_height,
                    })
                    .collect()
            })
            .unwrap_or_default(),
        particles: ctx
            .particles
            .iter()
            .map(|p| ParticleView {
                x: p.x,
                y: p.y,
                life: p.life,
                radius: p.radius,
                color: p.color,
            })
            .collect(),
        score: session.map_or(0, |s| s.score),
        combo: session.map_or(0, |s| s.combo),
        max_combo: session.map_or(0, |s| s.max_combo),
        perfect_passes: session.map_or(0, |s| s.perfect_passes),
        coins_earned: session.map_or(0, |s| s.coins_earned),
        scroll_speed: session.map_or(0.0, |s| s.scroll_speed),
        animation_time: ctx.animation_time,
        screen_shake: ctx.screen_shake,
        profile: ctx.profile.clone(),
        settings: ctx.settings.clone(),
    }
}
