//! Button placement for the menu screens, in logical field coordinates.
//!
//! The table is declarative: renderers draw from it and pointer input is
//! resolved against it, so a button's look and its action cannot drift apart.

use super::intent::UiAction;
use super::types::{Mode, Screen};
use crate::config::{Difficulty, GameConfig, SkinCategory, VolumeChannel};
use crate::core::constants::{FIELD_HEIGHT, FIELD_WIDTH};

/// Axis-aligned rectangle; edges count as inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub region: Region,
    pub label: String,
    pub action: UiAction,
}

impl Button {
    fn new(region: Region, label: impl Into<String>, action: UiAction) -> Self {
        Self {
            region,
            label: label.into(),
            action,
        }
    }
}

const MENU_BUTTON_X: f64 = FIELD_WIDTH / 2.0 - 100.0;
const MENU_BUTTON_W: f64 = 200.0;
const MENU_BUTTON_H: f64 = 50.0;

const SETTINGS_ROW_X: f64 = 400.0;
const DIFFICULTY_ROW_Y: f64 = 125.0;
const DIFFICULTY_STEP: f64 = 130.0;
const TOGGLE_ROW_Y: f64 = 195.0;
const TOGGLE_STEP: f64 = 180.0;
const VOLUME_ROW_Y: f64 = 265.0;

const SHOP_BIRDS_X: f64 = 100.0;
const SHOP_OBSTACLES_X: f64 = 640.0;
const SHOP_GRID_Y: f64 = 260.0;
const SHOP_COL_STEP: f64 = 220.0;
const SHOP_ROW_STEP: f64 = 80.0;
const SHOP_ITEM_W: f64 = 200.0;
const SHOP_ITEM_H: f64 = 60.0;

pub const BACK_BUTTON: Region = Region::new(FIELD_WIDTH / 2.0 - 75.0, FIELD_HEIGHT - 100.0, 150.0, 50.0);

/// Buttons on the given screen, in draw order. Play and game-over screens
/// have none.
pub fn buttons(mode: Mode, config: &GameConfig) -> Vec<Button> {
    match mode {
        Mode::MainMenu => main_menu_buttons(),
        Mode::Settings => {
            let mut out = settings_buttons(config);
            out.push(back_button());
            out
        }
        Mode::Shop => {
            let mut out = shop_buttons(config);
            out.push(back_button());
            out
        }
        Mode::Credits => vec![back_button()],
        Mode::Playing | Mode::GameOver => Vec::new(),
    }
}

/// Action of the first button under the pointer, if any.
pub fn resolve(mode: Mode, config: &GameConfig, x: f64, y: f64) -> Option<UiAction> {
    buttons(mode, config)
        .into_iter()
        .find(|button| button.region.contains(x, y))
        .map(|button| button.action)
}

/// Region of a shop item's button, used as the origin of purchase effects.
pub fn shop_item_region(config: &GameConfig, category: SkinCategory, id: &str) -> Option<Region> {
    config
        .shop
        .index_of(category, id)
        .map(|index| shop_cell(category, index))
}

fn back_button() -> Button {
    Button::new(BACK_BUTTON, "Back", UiAction::Back)
}

fn main_menu_buttons() -> Vec<Button> {
    let entries = [
        ("Play", UiAction::StartGame),
        ("Settings", UiAction::Open(Screen::Settings)),
        ("Shop", UiAction::Open(Screen::Shop)),
        ("Credits", UiAction::Open(Screen::Credits)),
    ];
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (label, action))| {
            let y = 250.0 + i as f64 * 70.0;
            Button::new(
                Region::new(MENU_BUTTON_X, y, MENU_BUTTON_W, MENU_BUTTON_H),
                label,
                action,
            )
        })
        .collect()
}

/// Built-in difficulties first in their natural order, then any extra keys
/// from a config override.
fn difficulty_keys(config: &GameConfig) -> Vec<String> {
    let mut keys: Vec<String> = Difficulty::ALL
        .iter()
        .map(|d| d.key().to_string())
        .filter(|key| config.difficulties.contains(key))
        .collect();
    for key in config.difficulties.keys() {
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}

fn settings_buttons(config: &GameConfig) -> Vec<Button> {
    let mut out: Vec<Button> = difficulty_keys(config)
        .into_iter()
        .enumerate()
        .map(|(i, key)| {
            let label = Difficulty::from_key(&key)
                .map(|d| d.name().to_string())
                .unwrap_or_else(|| key.clone());
            Button::new(
                Region::new(SETTINGS_ROW_X + i as f64 * DIFFICULTY_STEP, DIFFICULTY_ROW_Y, 110.0, 40.0),
                label,
                UiAction::SelectDifficulty(key),
            )
        })
        .collect();

    let toggles = [
        ("Particles", UiAction::ToggleParticles),
        ("Screen Shake", UiAction::ToggleScreenShake),
    ];
    for (i, (label, action)) in toggles.into_iter().enumerate() {
        out.push(Button::new(
            Region::new(SETTINGS_ROW_X + i as f64 * TOGGLE_STEP, TOGGLE_ROW_Y, 150.0, 40.0),
            label,
            action,
        ));
    }

    let volumes = [
        ("Music", UiAction::CycleVolume(VolumeChannel::Music)),
        ("SFX", UiAction::CycleVolume(VolumeChannel::Sfx)),
    ];
    for (i, (label, action)) in volumes.into_iter().enumerate() {
        out.push(Button::new(
            Region::new(SETTINGS_ROW_X + i as f64 * TOGGLE_STEP, VOLUME_ROW_Y, 150.0, 40.0),
            label,
            action,
        ));
    }
    out
}

fn shop_cell(category: SkinCategory, index: usize) -> Region {
    let origin_x = match category {
        SkinCategory::Birds => SHOP_BIRDS_X,
        SkinCategory::Obstacles => SHOP_OBSTACLES_X,
    };
    let col = (index % 2) as f64;
    let row = (index / 2) as f64;
    Region::new(
        origin_x + col * SHOP_COL_STEP,
        SHOP_GRID_Y + row * SHOP_ROW_STEP,
        SHOP_ITEM_W,
        SHOP_ITEM_H,
    )
}

fn shop_buttons(config: &GameConfig) -> Vec<Button> {
    let mut out = Vec::new();
    for category in SkinCategory::ALL {
        for (index, item) in config.shop.items(category).iter().enumerate() {
            out.push(Button::new(
                shop_cell(category, index),
                item.name.clone(),
                UiAction::ShopItem {
                    category,
                    id: item.id.clone(),
                },
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_hit_testing() {
        let config = GameConfig::default();
        assert_eq!(
            resolve(Mode::MainMenu, &config, 640.0, 275.0),
            Some(UiAction::StartGame)
        );
        assert_eq!(
            resolve(Mode::MainMenu, &config, 540.0, 320.0),
            Some(UiAction::Open(Screen::Settings))
        );
        assert_eq!(
            resolve(Mode::MainMenu, &config, 740.0, 440.0),
            Some(UiAction::Open(Screen::Shop))
        );
        assert_eq!(
            resolve(Mode::MainMenu, &config, 600.0, 500.0),
            Some(UiAction::Open(Screen::Credits))
        );
        assert_eq!(resolve(Mode::MainMenu, &config, 600.0, 305.0), None);
        assert_eq!(resolve(Mode::MainMenu, &config, 10.0, 10.0), None);
    }

    #[test]
    fn test_settings_buttons() {
        let config = GameConfig::default();
        assert_eq!(
            resolve(Mode::Settings, &config, 410.0, 130.0),
            Some(UiAction::SelectDifficulty("easy".to_string()))
        );
        assert_eq!(
            resolve(Mode::Settings, &config, 670.0, 150.0),
            Some(UiAction::SelectDifficulty("hardcore".to_string()))
        );
        assert_eq!(
            resolve(Mode::Settings, &config, 450.0, 210.0),
            Some(UiAction::ToggleParticles)
        );
        assert_eq!(
            resolve(Mode::Settings, &config, 600.0, 210.0),
            Some(UiAction::ToggleScreenShake)
        );
        assert_eq!(
            resolve(Mode::Settings, &config, 450.0, 280.0),
            Some(UiAction::CycleVolume(VolumeChannel::Music))
        );
        assert_eq!(
            resolve(Mode::Settings, &config, 600.0, 280.0),
            Some(UiAction::CycleVolume(VolumeChannel::Sfx))
        );
        assert_eq!(resolve(Mode::Settings, &config, 640.0, 645.0), Some(UiAction::Back));
    }

    #[test]
    fn test_shop_grid() {
        let config = GameConfig::default();
        // Second row, second column of the bird grid: "robot".
        assert_eq!(
            resolve(Mode::Shop, &config, 330.0, 350.0),
            Some(UiAction::ShopItem {
                category: SkinCategory::Birds,
                id: "robot".to_string()
            })
        );
        assert_eq!(
            resolve(Mode::Shop, &config, 650.0, 270.0),
            Some(UiAction::ShopItem {
                category: SkinCategory::Obstacles,
                id: "default".to_string()
            })
        );
        let region = shop_item_region(&config, SkinCategory::Obstacles, "neon").unwrap();
        assert_eq!(region.center(), (740.0, 370.0));
        assert!(shop_item_region(&config, SkinCategory::Birds, "nope").is_none());
    }

    #[test]
    fn test_play_screens_have_no_buttons() {
        let config = GameConfig::default();
        assert!(buttons(Mode::Playing, &config).is_empty());
        assert!(buttons(Mode::GameOver, &config).is_empty());
        assert_eq!(resolve(Mode::Playing, &config, 640.0, 275.0), None);
    }

    #[test]
    fn test_credits_only_back() {
        let config = GameConfig::default();
        let credits = buttons(Mode::Credits, &config);
        assert_eq!(credits.len(), 1);
        assert_eq!(credits[0].action, UiAction::Back);
    }
}
