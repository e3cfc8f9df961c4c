//! Short-lived feedback particles spawned in bursts by gameplay events.

use crate::core::constants::*;
use rand::Rng;

/// Color tag; the renderer picks the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    White,
    Gold,
    Accent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// 1.0 at spawn, removed once it reaches 0.
    pub life: f64,
    pub decay: f64,
    pub radius: f64,
    pub color: ParticleColor,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R, x: f64, y: f64, color: ParticleColor) -> Self {
        Self {
            x,
            y,
            vx: (rng.gen::<f64>() - 0.5) * PARTICLE_SPEED_SPREAD,
            vy: (rng.gen::<f64>() - 0.5) * PARTICLE_SPEED_SPREAD,
            life: 1.0,
            decay: PARTICLE_DECAY,
            radius: PARTICLE_MIN_RADIUS + rng.gen::<f64>() * PARTICLE_RADIUS_SPREAD,
            color,
        }
    }

    /// Move and age one tick. Returns false once the particle is dead.
    pub fn update(&mut self) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += PARTICLE_GRAVITY;
        self.life -= self.decay;
        self.life > 0.0
    }
}

/// The active particle set.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `count` particles at a point. Does nothing when `enabled` is
    /// false (the particle-effects setting).
    pub fn burst<R: Rng>(
        &mut self,
        rng: &mut R,
        enabled: bool,
        x: f64,
        y: f64,
        count: usize,
        color: ParticleColor,
    ) {
        if !enabled {
            return;
        }
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, x, y, color));
        }
    }

    /// Age every particle one tick and drop the dead ones.
    pub fn update(&mut self) {
        self.particles.retain_mut(Particle::update);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
