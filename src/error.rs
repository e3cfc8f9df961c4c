//! Errors for the host-side store: save files and config overrides.
//!
//! The simulation itself has no failure surface; everything here comes from
//! the filesystem or from parsing user-edited files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Home directory could not be determined for the default data dir.
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// A config override that parsed but cannot be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error("difficulty `{key}`: {source}")]
    Difficulty {
        key: String,
        #[source]
        source: InvalidDifficulty,
    },
}

/// Why a difficulty entry was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidDifficulty {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("gap_height {value} must be above 0 and at most {max}")]
    GapHeight { value: f64, max: f64 },

    #[error("base_speed {0} must be above 0")]
    BaseSpeed(f64),

    #[error("speed_increase {0} must not be negative")]
    SpeedIncrease(f64),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
