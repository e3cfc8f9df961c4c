//! Terminal input: crossterm key and mouse events to game intents.
//!
//! Menus are also keyboard driven: arrows move a focus cursor over the
//! screen's buttons and Enter/Space fires the focused one.

use crate::config::GameConfig;
use crate::game::intent::Intent;
use crate::game::layout;
use crate::game::types::Mode;
use crate::ui::game_common::FieldScaler;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// What the host should do with one terminal event.
#[derive(Debug, Clone, PartialEq)]
pub enum HostAction {
    Game(Intent),
    Quit,
    /// Focus cursor moved; redraw only.
    Redraw,
    Ignored,
}

/// Keyboard focus over the current screen's buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuFocus {
    index: usize,
    mode: Option<Mode>,
}

impl MenuFocus {
    /// Focused index for `mode`, resetting when the screen changed.
    pub fn index_for(&mut self, mode: Mode, button_count: usize) -> Option<usize> {
        if self.mode != Some(mode) {
            self.mode = Some(mode);
            self.index = 0;
        }
        if button_count == 0 {
            return None;
        }
        self.index = self.index.min(button_count - 1);
        Some(self.index)
    }

    fn step(&mut self, mode: Mode, button_count: usize, forward: bool) {
        if let Some(index) = self.index_for(mode, button_count) {
            self.index = if forward {
                (index + 1) % button_count
            } else {
                (index + button_count - 1) % button_count
            };
        }
    }
}

pub fn handle_key(
    key: KeyEvent,
    mode: Mode,
    config: &GameConfig,
    focus: &mut MenuFocus,
) -> HostAction {
    if key.kind != KeyEventKind::Press {
        return HostAction::Ignored;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return HostAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return HostAction::Quit
        }
        KeyCode::Esc => return HostAction::Game(Intent::CancelAction),
        _ => {}
    }

    match mode {
        Mode::Playing | Mode::GameOver => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => {
                HostAction::Game(Intent::PrimaryAction)
            }
            _ => HostAction::Ignored,
        },
        Mode::MainMenu | Mode::Settings | Mode::Shop | Mode::Credits => {
            let buttons = layout::buttons(mode, config);
            match key.code {
                KeyCode::Up | KeyCode::Left | KeyCode::BackTab => {
                    focus.step(mode, buttons.len(), false);
                    HostAction::Redraw
                }
                KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
                    focus.step(mode, buttons.len(), true);
                    HostAction::Redraw
                }
                KeyCode::Enter | KeyCode::Char(' ') => focus
                    .index_for(mode, buttons.len())
                    .and_then(|index| buttons.into_iter().nth(index))
                    .map(|button| HostAction::Game(Intent::Ui(button.action)))
                    .unwrap_or(HostAction::Ignored),
                _ => HostAction::Ignored,
            }
        }
    }
}

/// Left click inside the field becomes a pointer intent in field units.
pub fn handle_mouse(event: MouseEvent, field: Rect) -> HostAction {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return HostAction::Ignored;
    }
    FieldScaler::new(field)
        .to_field(event.column, event.row)
        .map(|(x, y)| HostAction::Game(Intent::PointerDown { x, y }))
        .unwrap_or(HostAction::Ignored)
}
