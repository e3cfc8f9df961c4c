//! Session data: the bird, the pipe sequence and the per-run counters.

use crate::config::DifficultyConfig;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Top-level UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    MainMenu,
    Settings,
    Shop,
    Credits,
    Playing,
    GameOver,
}

impl Mode {
    /// Screens reachable from the main menu buttons.
    pub fn is_submenu(&self) -> bool {
        matches!(self, Self::Settings | Self::Shop | Self::Credits)
    }
}

/// Menu screens a navigation intent can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Settings,
    Shop,
    Credits,
}

impl From<Screen> for Mode {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Settings => Mode::Settings,
            Screen::Shop => Mode::Shop,
            Screen::Credits => Mode::Credits,
        }
    }
}

/// The player's bird. Its horizontal position is fixed at [`BIRD_X`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Center y in field units (0 = top).
    pub y: f64,
    /// Positive = falling.
    pub velocity: f64,
    /// Degrees, derived from velocity every tick.
    pub rotation: f64,
    /// Radians in `[0, 2π)`.
    pub wing_phase: f64,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            y: BIRD_START_Y,
            velocity: 0.0,
            rotation: 0.0,
            wing_phase: 0.0,
        }
    }
}

impl Bird {
    pub fn rotation_for(velocity: f64) -> f64 {
        (velocity * ROTATION_PER_VELOCITY).clamp(MIN_ROTATION_DEG, MAX_ROTATION_DEG)
    }

    pub fn advance_wings(&mut self) {
        self.wing_phase = (self.wing_phase + WING_PHASE_STEP) % TAU;
    }

    pub fn left(&self) -> f64 {
        BIRD_X - BIRD_SIZE / 2.0
    }

    pub fn right(&self) -> f64 {
        BIRD_X + BIRD_SIZE / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - BIRD_SIZE / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + BIRD_SIZE / 2.0
    }
}

/// A top + bottom pipe pair with a gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    /// Height of the top segment (= y of the gap's upper edge).
    pub gap_top: f64,
    pub gap_height: f64,
    /// Set once, the first tick the pipe is fully behind the bird.
    pub scored: bool,
}

impl Pipe {
    pub fn right(&self) -> f64 {
        self.x + PIPE_WIDTH
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + self.gap_height
    }

    pub fn gap_center(&self) -> f64 {
        self.gap_top + self.gap_height / 2.0
    }
}

/// One playthrough, from start/restart to game over.
#[derive(Debug, Clone)]
pub struct Session {
    pub difficulty: DifficultyConfig,
    pub bird: Bird,
    /// Spawn order, which is also left-to-right order.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub perfect_passes: u32,
    /// Coins from this run, added to the profile at game over.
    pub coins_earned: u64,
    pub scroll_speed: f64,
    /// True once the run has been folded into the profile.
    pub settled: bool,
}

impl Session {
    /// Fresh session with no pipes; see `obstacles::seed_pipes`.
    pub fn new(difficulty: DifficultyConfig) -> Self {
        Self {
            difficulty,
            bird: Bird::default(),
            pipes: Vec::new(),
            score: 0,
            combo: 0,
            max_combo: 0,
            perfect_passes: 0,
            coins_earned: 0,
            scroll_speed: difficulty.base_speed,
            settled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;

    #[test]
    fn test_rotation_is_clamped() {
        assert!((Bird::rotation_for(0.0)).abs() < f64::EPSILON);
        assert!((Bird::rotation_for(-9.0) - (-27.0)).abs() < f64::EPSILON);
        assert!((Bird::rotation_for(-20.0) - (-30.0)).abs() < f64::EPSILON);
        assert!((Bird::rotation_for(50.0) - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wing_phase_wraps() {
        let mut bird = Bird::default();
        for _ in 0..1000 {
            bird.advance_wings();
            assert!(bird.wing_phase >= 0.0 && bird.wing_phase < TAU);
        }
    }

    #[test]
    fn test_bird_hitbox_is_centered() {
        let bird = Bird::default();
        assert!((bird.top() - 345.0).abs() < f64::EPSILON);
        assert!((bird.bottom() - 375.0).abs() < f64::EPSILON);
        assert!((bird.left() - 85.0).abs() < f64::EPSILON);
        assert!((bird.right() - 115.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_session_counters() {
        let session = Session::new(Difficulty::Hardcore.config());
        assert_eq!(session.score, 0);
        assert_eq!(session.coins_earned, 0);
        assert!(session.pipes.is_empty());
        assert!((session.scroll_speed - 4.0).abs() < f64::EPSILON);
        assert!(!session.settled);
    }

    #[test]
    fn test_pipe_geometry() {
        let pipe = Pipe {
            x: 10.0,
            gap_top: 200.0,
            gap_height: 180.0,
            scored: false,
        };
        assert!((pipe.right() - 80.0).abs() < f64::EPSILON);
        assert!((pipe.gap_bottom() - 380.0).abs() < f64::EPSILON);
        assert!((pipe.gap_center() - 290.0).abs() < f64::EPSILON);
    }
}
