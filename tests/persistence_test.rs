//! Save files and config overrides on a real filesystem.

use flappy_arcade::config::{GameConfig, Settings, SkinCategory};
use flappy_arcade::error::{ConfigError, StoreError};
use flappy_arcade::profile::PlayerProfile;
use flappy_arcade::utils::persistence::{
    load_profile, load_settings, save_profile, save_settings, PROFILE_FILE, SETTINGS_FILE,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_first_run_uses_defaults() {
    let dir = TempDir::new().unwrap();
    assert_eq!(load_profile(dir.path()), PlayerProfile::default());
    assert_eq!(load_settings(dir.path()), Settings::default());
}

#[test]
fn test_profile_survives_restart() {
    let dir = TempDir::new().unwrap();
    let mut profile = PlayerProfile {
        coins: 321,
        high_score: 17,
        ..PlayerProfile::default()
    };
    profile.unlock(SkinCategory::Obstacles, "neon");
    profile.set_equipped(SkinCategory::Obstacles, "neon");
    save_profile(dir.path(), &profile).unwrap();

    assert_eq!(load_profile(dir.path()), profile);
}

#[test]
fn test_settings_survive_restart() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        difficulty: "hardcore".to_string(),
        particles: false,
        ..Settings::default()
    };
    save_settings(dir.path(), &settings).unwrap();
    assert_eq!(load_settings(dir.path()), settings);
}

#[test]
fn test_partial_settings_fill_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(SETTINGS_FILE), r#"{"difficulty":"easy"}"#).unwrap();
    let settings = load_settings(dir.path());
    assert_eq!(settings.difficulty, "easy");
    assert!(settings.particles);
    assert!(settings.screen_shake);
}

#[test]
fn test_hand_edited_profile_is_repaired() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(PROFILE_FILE),
        r#"{"coins":5,"bird_skin":"robot","unlocked_birds":["golden","golden"]}"#,
    )
    .unwrap();
    let profile = load_profile(dir.path());
    assert_eq!(profile.coins, 5);
    assert_eq!(profile.bird_skin, "default");
    assert_eq!(profile.unlocked(SkinCategory::Birds), ["default", "golden"]);
}

#[test]
fn test_corrupt_profile_loads_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(PROFILE_FILE), "coins = 5").unwrap();
    assert_eq!(load_profile(dir.path()), PlayerProfile::default());
}

#[test]
fn test_config_file_overrides_catalogs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flappy.toml");
    fs::write(
        &path,
        r#"
default_difficulty = "zen"

[difficulties.zen]
gap_height = 300.0
base_speed = 2.0
speed_increase = 0.02
"#,
    )
    .unwrap();
    let config = GameConfig::load(&path).unwrap();
    assert_eq!(config.difficulties.default_key(), "zen");
    assert!((config.difficulties.get("missing").gap_height - 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_bad_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "difficulties = 3").unwrap();
    let err = GameConfig::load(&path).unwrap_err();
    assert!(matches!(err, StoreError::Config { .. }));
    assert!(err.to_string().contains("broken.toml"));

    let missing = GameConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(missing, StoreError::Io { .. }));
}

#[test]
fn test_invalid_difficulty_names_key_and_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("unfair.toml");
    fs::write(
        &path,
        r#"
[difficulties.wall]
gap_height = 600.0
base_speed = 3.0
speed_increase = 0.1
"#,
    )
    .unwrap();
    let err = GameConfig::load(&path).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Config {
            source: ConfigError::Difficulty { .. },
            ..
        }
    ));
    let message = err.to_string();
    assert!(message.contains("unfair.toml"));
    assert!(message.contains("wall"));
}
