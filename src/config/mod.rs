//! Static configuration: difficulty presets, shop catalog, player settings.
//!
//! Everything has a compiled-in default. A TOML file can override the
//! difficulty table and the shop lists:
//!
//! ```toml
//! default_difficulty = "normal"
//!
//! [difficulties.zen]
//! gap_height = 300.0
//! base_speed = 2.0
//! speed_increase = 0.02
//!
//! [[shop.birds]]
//! id = "owl"
//! name = "Owl"
//! price = 250
//! color = "silver"
//! ```

pub mod catalog;
pub mod difficulty;
pub mod settings;

pub use catalog::{ColorTag, ShopCatalog, ShopItem, SkinCategory};
pub use difficulty::{Difficulty, DifficultyCatalog, DifficultyConfig};
pub use settings::{Settings, VolumeChannel};

use crate::error::{ConfigError, StoreError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Catalogs consumed by the session state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameConfig {
    pub difficulties: DifficultyCatalog,
    pub shop: ShopCatalog,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    default_difficulty: Option<String>,
    difficulties: BTreeMap<String, DifficultyConfig>,
    shop: Option<ShopFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShopFile {
    birds: Vec<ShopItem>,
    obstacles: Vec<ShopItem>,
}

impl GameConfig {
    /// Parse overrides. Built-in difficulties stay available unless the file
    /// redefines the same key; shop lists replace the built-in ones. A
    /// difficulty that fails [`DifficultyConfig::validate`] rejects the file.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        for (key, difficulty) in &file.difficulties {
            difficulty
                .validate()
                .map_err(|source| ConfigError::Difficulty {
                    key: key.clone(),
                    source,
                })?;
        }
        let mut config = GameConfig::default();

        if !file.difficulties.is_empty() || file.default_difficulty.is_some() {
            let mut entries: BTreeMap<String, DifficultyConfig> = Difficulty::ALL
                .iter()
                .map(|d| (d.key().to_string(), d.config()))
                .collect();
            entries.extend(file.difficulties);
            let default_key = file
                .default_difficulty
                .unwrap_or_else(|| Difficulty::Normal.key().to_string());
            config.difficulties = DifficultyCatalog::new(entries, &default_key);
        }

        if let Some(shop) = file.shop {
            let birds = if shop.birds.is_empty() {
                config.shop.birds.clone()
            } else {
                shop.birds
            };
            let obstacles = if shop.obstacles.is_empty() {
                config.shop.obstacles.clone()
            } else {
                shop.obstacles
            };
            config.shop = ShopCatalog::new(birds, obstacles);
        }

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let config = Self::from_toml_str(&text).map_err(|source| StoreError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            difficulties = config.difficulties.keys().count(),
            "loaded config overrides"
        );
        Ok(config)
    }
}
