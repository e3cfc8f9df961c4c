//! JSON persistence for the profile and settings in ~/.flappy_arcade/.
//!
//! Loading never fails: a missing file is a first run, and an unreadable or
//! corrupt file is logged and replaced by defaults on the next save.

use crate::config::Settings;
use crate::error::StoreError;
use crate::profile::PlayerProfile;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const PROFILE_FILE: &str = "profile.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "flappy.log";

/// Get the ~/.flappy_arcade/ directory path, creating it if needed.
pub fn default_data_dir() -> Result<PathBuf, StoreError> {
    let home_dir = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    let dir = home_dir.join(".flappy_arcade");
    ensure_dir(&dir)?;
    Ok(dir)
}

pub fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))
}

/// Load a JSON file from `dir`, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(
    dir: &Path,
    filename: &str,
) -> T {
    match load_json(dir, filename) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!(file = filename, "no save file, using defaults");
            T::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not load save file, using defaults");
            T::default()
        }
    }
}

/// Strict variant: `Ok(None)` when the file does not exist.
pub fn load_json<T: serde::de::DeserializeOwned>(
    dir: &Path,
    filename: &str,
) -> Result<Option<T>, StoreError> {
    let path = dir.join(filename);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io(path, e)),
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| StoreError::Json { path, source })
}

/// Save a value as pretty-printed JSON into `dir`.
pub fn save_json<T: serde::Serialize>(
    dir: &Path,
    filename: &str,
    data: &T,
) -> Result<(), StoreError> {
    ensure_dir(dir)?;
    let path = dir.join(filename);
    let json = serde_json::to_string_pretty(data).map_err(|source| StoreError::Json {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, json).map_err(|e| StoreError::io(&path, e))?;
    tracing::debug!(path = %path.display(), "saved");
    Ok(())
}

/// Load the profile and repair anything a hand edit may have broken.
pub fn load_profile(dir: &Path) -> PlayerProfile {
    let mut profile: PlayerProfile = load_json_or_default(dir, PROFILE_FILE);
    profile.normalize();
    profile
}

pub fn save_profile(dir: &Path, profile: &PlayerProfile) -> Result<(), StoreError> {
    save_json(dir, PROFILE_FILE, profile)
}

pub fn load_settings(dir: &Path) -> Settings {
    load_json_or_default(dir, SETTINGS_FILE)
}

pub fn save_settings(dir: &Path, settings: &Settings) -> Result<(), StoreError> {
    save_json(dir, SETTINGS_FILE, settings)
}
