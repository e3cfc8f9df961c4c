//! Terminal rendering with ratatui.
//!
//! Every frame is drawn from a [`Snapshot`]; nothing here touches the live
//! game state.

pub mod game_common;
pub mod game_over_scene;
pub mod menu_scene;
pub mod play_scene;

use crate::config::GameConfig;
use crate::game::snapshot::Snapshot;
use crate::game::types::Mode;
use game_common::{compute_game_layout, create_game_layout};
use ratatui::{layout::Rect, style::Color, Frame};

/// Area the play field is scaled into, for mapping mouse clicks.
pub fn field_area(size: Rect) -> Rect {
    compute_game_layout(size).content
}

/// Draw one frame. `focus` is the keyboard-selected menu button.
pub fn draw(frame: &mut Frame, snap: &Snapshot, config: &GameConfig, focus: Option<usize>) {
    let size = frame.size();
    let border = match snap.mode {
        Mode::Playing => Color::Cyan,
        Mode::GameOver => Color::Red,
        _ => Color::Yellow,
    };
    let layout = create_game_layout(frame, size, border);

    match snap.mode {
        Mode::Playing => {
            play_scene::render_field(frame, layout.content, snap, config);
            play_scene::render_play_status(frame, layout.status_bar, snap);
            play_scene::render_play_info(frame, layout.info_panel, snap);
        }
        Mode::GameOver => {
            play_scene::render_field(frame, layout.content, snap, config);
            game_over_scene::render_game_over_banner(frame, layout.content, snap);
            game_over_scene::render_game_over_status(frame, layout.status_bar);
            play_scene::render_play_info(frame, layout.info_panel, snap);
        }
        Mode::MainMenu | Mode::Settings | Mode::Shop | Mode::Credits => {
            menu_scene::render_menu(frame, layout.content, snap, config, focus);
            menu_scene::render_menu_status(frame, layout.status_bar, snap);
            menu_scene::render_menu_info(frame, layout.info_panel, snap, config);
        }
    }
}
