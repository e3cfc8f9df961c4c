//! Difficulty presets and the name-keyed catalog the session reads them from.

use crate::core::constants::{MAX_GAP_HEIGHT, MAX_SPEED_MULTIPLIER};
use crate::error::InvalidDifficulty;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hardcore,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hardcore];

    /// Catalog key, also used in settings files.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hardcore => "hardcore",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hardcore => "Hardcore",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.key() == key)
    }

    /// Tuning for the built-in catalog.
    pub fn config(&self) -> DifficultyConfig {
        match self {
            Self::Easy => DifficultyConfig {
                gap_height: 220.0,
                base_speed: 2.5,
                speed_increase: 0.05,
            },
            Self::Normal => DifficultyConfig {
                gap_height: 180.0,
                base_speed: 3.0,
                speed_increase: 0.08,
            },
            Self::Hardcore => DifficultyConfig {
                gap_height: 140.0,
                base_speed: 4.0,
                speed_increase: 0.12,
            },
        }
    }
}

/// Immutable tuning for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Vertical opening between the two pipe segments.
    pub gap_height: f64,
    /// Scroll speed at score 0, in field units per tick.
    pub base_speed: f64,
    /// Extra scroll speed per point scored.
    pub speed_increase: f64,
}

impl DifficultyConfig {
    /// Scroll speed for a given score, capped at twice the base speed.
    pub fn speed_for_score(&self, score: u32) -> f64 {
        let max = self.base_speed * MAX_SPEED_MULTIPLIER;
        (self.base_speed + score as f64 * self.speed_increase).min(max)
    }

    /// Pipes built from this config must fit the field, and speed may only
    /// grow with score.
    pub fn validate(&self) -> Result<(), InvalidDifficulty> {
        for (field, value) in [
            ("gap_height", self.gap_height),
            ("base_speed", self.base_speed),
            ("speed_increase", self.speed_increase),
        ] {
            if !value.is_finite() {
                return Err(InvalidDifficulty::NotFinite { field });
            }
        }
        if self.gap_height <= 0.0 || self.gap_height > MAX_GAP_HEIGHT {
            return Err(InvalidDifficulty::GapHeight {
                value: self.gap_height,
                max: MAX_GAP_HEIGHT,
            });
        }
        if self.base_speed <= 0.0 {
            return Err(InvalidDifficulty::BaseSpeed(self.base_speed));
        }
        if self.speed_increase < 0.0 {
            return Err(InvalidDifficulty::SpeedIncrease(self.speed_increase));
        }
        Ok(())
    }
}

/// Name → config mapping with a guaranteed default entry.
///
/// Unknown names resolve to the default entry instead of failing, so a
/// stale settings file can never stop a session from starting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCatalog {
    entries: BTreeMap<String, DifficultyConfig>,
    default_key: String,
}

impl Default for DifficultyCatalog {
    fn default() -> Self {
        let entries = Difficulty::ALL
            .iter()
            .map(|d| (d.key().to_string(), d.config()))
            .collect();
        Self {
            entries,
            default_key: Difficulty::Normal.key().to_string(),
        }
    }
}

impl DifficultyCatalog {
    /// Build a catalog from explicit entries. Entries that fail
    /// [`DifficultyConfig::validate`] are dropped. If `default_key` is then
    /// missing, the built-in config of that name (or Normal) is inserted.
    pub fn new(entries: BTreeMap<String, DifficultyConfig>, default_key: &str) -> Self {
        let mut entries = entries;
        entries.retain(|key, config| match config.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "dropping invalid difficulty");
                false
            }
        });
        if !entries.contains_key(default_key) {
            let fallback = Difficulty::from_key(default_key)
                .unwrap_or(Difficulty::Normal)
                .config();
            entries.insert(default_key.to_string(), fallback);
        }
        Self {
            entries,
            default_key: default_key.to_string(),
        }
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up a difficulty by name, falling back to the default entry.
    pub fn get(&self, key: &str) -> DifficultyConfig {
        match self.entries.get(key) {
            Some(config) => *config,
            None => {
                tracing::debug!(key, fallback = %self.default_key, "unknown difficulty");
                self.default_config()
            }
        }
    }

    pub fn default_config(&self) -> DifficultyConfig {
        self.entries
            .get(&self.default_key)
            .copied()
            .unwrap_or_else(|| Difficulty::Normal.config())
    }

    /// Names in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_configs() {
        let normal = Difficulty::Normal.config();
        assert!((normal.gap_height - 180.0).abs() < f64::EPSILON);
        assert!((normal.base_speed - 3.0).abs() < f64::EPSILON);
        assert!((normal.speed_increase - 0.08).abs() < f64::EPSILON);

        let hard = Difficulty::Hardcore.config();
        assert!((hard.gap_height - 140.0).abs() < f64::EPSILON);
        assert!((hard.base_speed - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Difficulty::from_key("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_key("hardcore"), Some(Difficulty::Hardcore));
        assert_eq!(Difficulty::from_key("Easy"), None);
    }

    #[test]
    fn test_builtins_are_valid() {
        for d in Difficulty::ALL {
            assert_eq!(d.config().validate(), Ok(()));
        }
    }

    fn custom(gap_height: f64, base_speed: f64, speed_increase: f64) -> DifficultyConfig {
        DifficultyConfig {
            gap_height,
            base_speed,
            speed_increase,
        }
    }

    #[test]
    fn test_validate_rejects_unplayable_configs() {
        assert_eq!(
            custom(f64::NEG_INFINITY, 3.0, 0.1).validate(),
            Err(InvalidDifficulty::NotFinite { field: "gap_height" })
        );
        assert_eq!(
            custom(180.0, f64::NAN, 0.1).validate(),
            Err(InvalidDifficulty::NotFinite { field: "base_speed" })
        );
        assert_eq!(
            custom(180.0, 3.0, f64::INFINITY).validate(),
            Err(InvalidDifficulty::NotFinite { field: "speed_increase" })
        );
        assert!(matches!(
            custom(600.0, 3.0, 0.1).validate(),
            Err(InvalidDifficulty::GapHeight { .. })
        ));
        assert!(matches!(
            custom(0.0, 3.0, 0.1).validate(),
            Err(InvalidDifficulty::GapHeight { .. })
        ));
        assert_eq!(
            custom(180.0, 0.0, 0.1).validate(),
            Err(InvalidDifficulty::BaseSpeed(0.0))
        );
        assert_eq!(
            custom(180.0, 3.0, -1.0).validate(),
            Err(InvalidDifficulty::SpeedIncrease(-1.0))
        );
    }

    #[test]
    fn test_validate_accepts_edges() {
        assert_eq!(custom(MAX_GAP_HEIGHT, 0.5, 0.0).validate(), Ok(()));
    }

    #[test]
    fn test_catalog_drops_invalid_entries() {
        let mut entries = BTreeMap::new();
        entries.insert("broken".to_string(), custom(f64::NAN, 3.0, 0.1));
        entries.insert("normal".to_string(), custom(10_000.0, 3.0, 0.1));
        let catalog = DifficultyCatalog::new(entries, "normal");
        assert!(!catalog.contains("broken"));
        assert_eq!(catalog.get("normal"), Difficulty::Normal.config());
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        let catalog = DifficultyCatalog::default();
        assert_eq!(catalog.get("nightmare"), Difficulty::Normal.config());
        assert_eq!(catalog.get("easy"), Difficulty::Easy.config());
    }

    #[test]
    fn test_custom_catalog_inserts_missing_default() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "zen".to_string(),
            DifficultyConfig {
                gap_height: 300.0,
                base_speed: 1.0,
                speed_increase: 0.01,
            },
        );
        let catalog = DifficultyCatalog::new(entries, "normal");
        assert!(catalog.contains("normal"));
        assert_eq!(catalog.get("missing"), Difficulty::Normal.config());
        assert!((catalog.get("zen").gap_height - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_speed_is_capped_at_double_base() {
        for d in Difficulty::ALL {
            let config = d.config();
            assert!((config.speed_for_score(0) - config.base_speed).abs() < f64::EPSILON);
            for score in [1, 10, 100, 10_000, u32::MAX] {
                assert!(config.speed_for_score(score) <= config.base_speed * 2.0);
            }
        }
    }

    #[test]
    fn test_speed_grows_with_score() {
        let config = Difficulty::Normal.config();
        assert!((config.speed_for_score(5) - 3.4).abs() < 1e-9);
        assert!((config.speed_for_score(1000) - 6.0).abs() < 1e-9);
    }
}
