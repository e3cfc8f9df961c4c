//! Player-facing options, persisted by the host next to the profile.

use super::difficulty::Difficulty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty catalog key; unknown keys fall back to the catalog default.
    pub difficulty: String,
    pub particles: bool,
    pub screen_shake: bool,
    pub music_volume: f32,
    pub sfx_volume: f32,
}

/// Volume levels step through 0%..100% in tenths and wrap back to mute.
const VOLUME_STEPS: u8 = 10;

/// Which volume slider a settings button adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeChannel {
    Music,
    Sfx,
}

impl Settings {
    pub fn volume(&self, channel: VolumeChannel) -> f32 {
        match channel {
            VolumeChannel::Music => self.music_volume,
            VolumeChannel::Sfx => self.sfx_volume,
        }
    }

    /// Raise a volume by one step, wrapping from full back to mute.
    /// Returns the new level.
    pub fn cycle_volume(&mut self, channel: VolumeChannel) -> f32 {
        let steps = (self.volume(channel).clamp(0.0, 1.0) * VOLUME_STEPS as f32).round() as u8;
        let level = ((steps + 1) % (VOLUME_STEPS + 1)) as f32 / VOLUME_STEPS as f32;
        match channel {
            VolumeChannel::Music => self.music_volume = level,
            VolumeChannel::Sfx => self.sfx_volume = level,
        }
        level
    }

    pub fn sfx_muted(&self) -> bool {
        self.sfx_volume <= 0.0
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal.key().to_string(),
            particles: true,
            screen_shake: true,
            music_volume: 0.5,
            sfx_volume: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.difficulty, "normal");
        assert!(settings.particles);
        assert!(settings.screen_shake);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"particles": false}"#).unwrap();
        assert!(!settings.particles);
        assert_eq!(settings.difficulty, "normal");
        assert!((settings.sfx_volume - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_volume_cycles_in_tenths_and_wraps() {
        let mut settings = Settings::default();
        assert!((settings.cycle_volume(VolumeChannel::Music) - 0.6).abs() < 1e-6);
        assert!((settings.music_volume - 0.6).abs() < 1e-6);
        for _ in 0..4 {
            settings.cycle_volume(VolumeChannel::Music);
        }
        assert!((settings.volume(VolumeChannel::Music) - 1.0).abs() < 1e-6);
        assert_eq!(settings.cycle_volume(VolumeChannel::Music), 0.0);
        assert!((settings.sfx_volume - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sfx_mute() {
        let mut settings = Settings::default();
        assert!(!settings.sfx_muted());
        settings.sfx_volume = 1.0;
        assert_eq!(settings.cycle_volume(VolumeChannel::Sfx), 0.0);
        assert!(settings.sfx_muted());
    }
}
