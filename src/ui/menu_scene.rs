//! Main menu, settings, shop and credits screens.
//!
//! Buttons come from [`crate::game::layout::buttons`] and are drawn at their
//! scaled field positions, so a click lands on what the player sees.

use super::game_common::{
    format_coins, info_row, render_info_panel_frame, render_status_bar, tag_color,
    FieldScaler,
};
use super::play_scene::render_particles;
use crate::config::{Difficulty, GameConfig, SkinCategory};
use crate::game::intent::UiAction;
use crate::game::layout::{self, Button, Region};
use crate::game::snapshot::Snapshot;
use crate::game::types::Mode;
use crate::profile::PlayerProfile;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MENU_CONTROLS: &[(&str, &str)] = &[
    ("[↑↓]", "Select"),
    ("[Enter]", "Confirm"),
    ("[Esc]", "Back"),
    ("[q]", "Quit"),
];

/// Draw a menu screen. `focus` indexes into the screen's button list.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    snap: &Snapshot,
    config: &GameConfig,
    focus: Option<usize>,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let scaler = FieldScaler::new(area);

    match snap.mode {
        Mode::MainMenu => {
            render_heading(frame, &scaler, 90.0, "FLAPPY ARCADE", Color::Yellow);
            render_heading(
                frame,
                &scaler,
                170.0,
                &format!("Best: {}", snap.profile.high_score),
                Color::Gray,
            );
        }
        Mode::Settings => {
            render_heading(frame, &scaler, 40.0, "SETTINGS", Color::Cyan);
            render_label(frame, &scaler, Region::new(100.0, 125.0, 280.0, 40.0), "Difficulty");
            render_label(frame, &scaler, Region::new(100.0, 195.0, 280.0, 40.0), "Effects");
            render_label(frame, &scaler, Region::new(100.0, 265.0, 280.0, 40.0), "Audio");
        }
        Mode::Shop => {
            render_heading(frame, &scaler, 40.0, "SHOP", Color::LightYellow);
            render_heading(
                frame,
                &scaler,
                120.0,
                &format!("Coins: {}", format_coins(snap.profile.coins)),
                Color::LightYellow,
            );
            render_label(frame, &scaler, Region::new(100.0, 200.0, 420.0, 40.0), "Birds");
            render_label(frame, &scaler, Region::new(640.0, 200.0, 420.0, 40.0), "Obstacles");
        }
        Mode::Credits => render_credits(frame, &scaler),
        Mode::Playing | Mode::GameOver => {}
    }

    for (index, button) in layout::buttons(snap.mode, config).iter().enumerate() {
        let state = button_state(button, snap, config);
        render_button(frame, &scaler, button, &state, focus == Some(index));
    }
    render_particles(frame, area, snap);
}

/// Extra text and highlight for a button given the current state.
struct ButtonState {
    caption: String,
    active: bool,
    color: Color,
}

fn button_state(button: &Button, snap: &Snapshot, config: &GameConfig) -> ButtonState {
    match &button.action {
        UiAction::SelectDifficulty(key) => ButtonState {
            caption: button.label.clone(),
            active: *key == snap.settings.difficulty,
            color: Color::Cyan,
        },
        UiAction::ToggleParticles => toggle_state(&button.label, snap.settings.particles),
        UiAction::ToggleScreenShake => toggle_state(&button.label, snap.settings.screen_shake),
        UiAction::CycleVolume(channel) => {
            let level = snap.settings.volume(*channel);
            ButtonState {
                caption: volume_caption(&button.label, level),
                active: level > 0.0,
                color: Color::Green,
            }
        }
        UiAction::ShopItem { category, id } => {
            let color = config
                .shop
                .find(*category, id)
                .map(|item| tag_color(item.color))
                .unwrap_or(Color::White);
            ButtonState {
                caption: format!(
                    "{} {}",
                    button.label,
                    shop_badge(&snap.profile, config, *category, id)
                ),
                active: snap.profile.equipped(*category) == id.as_str(),
                color,
            }
        }
        _ => ButtonState {
            caption: button.label.clone(),
            active: false,
            color: Color::White,
        },
    }
}

fn toggle_state(label: &str, on: bool) -> ButtonState {
    ButtonState {
        caption: format!("{}: {}", label, if on { "ON" } else { "OFF" }),
        active: on,
        color: Color::Green,
    }
}

fn volume_caption(label: &str, level: f32) -> String {
    format!("{}: {}%", label, (level * 100.0).round() as u32)
}

/// "[equipped]", "[owned]" or the price.
pub fn shop_badge(
    profile: &PlayerProfile,
    config: &GameConfig,
    category: SkinCategory,
    id: &str,
) -> String {
    if profile.equipped(category) == id {
        "[equipped]".to_string()
    } else if profile.is_unlocked(category, id) {
        "[owned]".to_string()
    } else {
        let price = config.shop.find(category, id).map_or(0, |item| item.price);
        format!("[{}c]", price)
    }
}

fn render_button(
    frame: &mut Frame,
    scaler: &FieldScaler,
    button: &Button,
    state: &ButtonState,
    focused: bool,
) {
    let rect = scaler.region_rect(&button.region);
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let mut text_style = Style::default().fg(if state.active { state.color } else { Color::White });
    if state.active || focused {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    let border = if focused { Color::Yellow } else { Color::DarkGray };

    // Tall enough for a border: boxed button. Otherwise a bracketed label.
    if rect.height >= 3 {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        let text = Paragraph::new(Span::styled(state.caption.clone(), text_style))
            .alignment(Alignment::Center);
        frame.render_widget(text, Rect { height: 1, ..inner });
    } else {
        let caption = if focused {
            format!("> {} <", state.caption)
        } else {
            state.caption.clone()
        };
        let text = Paragraph::new(Span::styled(caption, text_style)).alignment(Alignment::Center);
        frame.render_widget(text, Rect { height: 1, ..rect });
    }
}

fn render_heading(frame: &mut Frame, scaler: &FieldScaler, y: f64, text: &str, color: Color) {
    let rect = scaler.region_rect(&Region::new(0.0, y, crate::core::constants::FIELD_WIDTH, 40.0));
    let heading = Paragraph::new(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(heading, Rect { height: 1, ..rect });
}

fn render_label(frame: &mut Frame, scaler: &FieldScaler, region: Region, text: &str) {
    let rect = scaler.region_rect(&region);
    let label = Paragraph::new(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(label, Rect { height: 1, ..rect });
}

fn render_credits(frame: &mut Frame, scaler: &FieldScaler) {
    render_heading(frame, scaler, 60.0, "CREDITS", Color::Magenta);
    let rect = scaler.region_rect(&Region::new(240.0, 160.0, 800.0, 400.0));
    let lines = vec![
        Line::from("Flap through the gaps. Every pipe is a point."),
        Line::from("Pass close to the center of a gap for a perfect pass:"),
        Line::from("double coins and a growing combo."),
        Line::from(""),
        Line::from("Spend coins in the shop on new birds and obstacles."),
        Line::from(""),
        Line::from(Span::styled(
            "Made with ratatui and crossterm.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

/// Status bar for the menu screens.
pub fn render_menu_status(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let text = match snap.mode {
        Mode::MainMenu => "Choose an option",
        Mode::Settings => "Tune the game",
        Mode::Shop => "Buy or equip skins",
        _ => "",
    };
    render_status_bar(frame, area, text, Color::Yellow, MENU_CONTROLS);
}

/// Info panel for the menu screens: wallet, record and current setup.
pub fn render_menu_info(frame: &mut Frame, area: Rect, snap: &Snapshot, config: &GameConfig) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }
    let difficulty = Difficulty::from_key(&snap.settings.difficulty)
        .map(|d| d.name().to_string())
        .unwrap_or_else(|| snap.settings.difficulty.clone());
    let lines = vec![
        info_row("Coins", format_coins(snap.profile.coins), Color::LightYellow),
        info_row("Best", snap.profile.high_score.to_string(), Color::Yellow),
        Line::from(""),
        info_row("Mode", difficulty, Color::Cyan),
        info_row(
            "Bird",
            config.shop.bird_skin(&snap.profile.bird_skin).name.clone(),
            Color::White,
        ),
        info_row(
            "Pipes",
            config.shop.obstacle_skin(&snap.profile.obstacle_skin).name.clone(),
            Color::White,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_badges() {
        let config = GameConfig::default();
        let mut profile = PlayerProfile::default();
        assert_eq!(
            shop_badge(&profile, &config, SkinCategory::Birds, "default"),
            "[equipped]"
        );
        assert_eq!(
            shop_badge(&profile, &config, SkinCategory::Birds, "golden"),
            "[100c]"
        );
        profile.unlock(SkinCategory::Birds, "golden");
        assert_eq!(
            shop_badge(&profile, &config, SkinCategory::Birds, "golden"),
            "[owned]"
        );
    }

    #[test]
    fn test_volume_caption() {
        assert_eq!(volume_caption("Music", 0.5), "Music: 50%");
        assert_eq!(volume_caption("SFX", 0.7), "SFX: 70%");
        assert_eq!(volume_caption("SFX", 0.0), "SFX: 0%");
    }
}
