//! Shared UI pieces: the frame layout, status bar, info panel frame and the
//! mapping between field coordinates and terminal cells.

use crate::config::ColorTag;
use crate::core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::game::layout::Region;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const INFO_PANEL_WIDTH: u16 = 24;
const TITLE: &str = " Flappy Arcade ";

/// Where each part of the screen goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// The play field or menu screen.
    pub content: Rect,
    /// Footer under the content, two rows tall.
    pub status_bar: Rect,
    /// Stats column on the right.
    pub info_panel: Rect,
}

/// Split the terminal without drawing anything. The host uses this to map
/// mouse clicks, so it must agree with [`create_game_layout`].
///
/// ```text
/// +- Flappy Arcade ---------------+- Stats -+
/// | content                       | panel   |
/// | status (2 rows)               |         |
/// +-------------------------------+---------+
/// ```
pub fn compute_game_layout(area: Rect) -> GameLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let [main, info_panel] = split(
        inner,
        Direction::Horizontal,
        [Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)],
    );
    let [content, status_bar] = split(
        main,
        Direction::Vertical,
        [Constraint::Min(6), Constraint::Length(2)],
    );
    GameLayout {
        content,
        status_bar,
        info_panel,
    }
}

fn split(area: Rect, direction: Direction, constraints: [Constraint; 2]) -> [Rect; 2] {
    let parts = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    [parts[0], parts[1]]
}

/// Draw the outer border and return the areas inside it.
pub fn create_game_layout(frame: &mut Frame, area: Rect, border_color: Color) -> GameLayout {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
        area,
    );
    compute_game_layout(area)
}

/// Two-line footer: the status message, then the key hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }
    let message = Paragraph::new(Span::styled(
        status_text.to_string(),
        Style::default().fg(status_color),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(message, Rect { height: 1, ..area });

    if area.height < 2 || controls.is_empty() {
        return;
    }
    let hints: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(key.to_string(), Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    let row = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        row,
    );
}

/// Bordered side panel; returns the area left for its rows.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let panel = Block::default()
        .title(" Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let rows = panel.inner(area);
    frame.render_widget(panel, area);
    rows
}

/// One "label: value" row for info panels.
pub fn info_row(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Primary => Color::Yellow,
        ColorTag::Accent => Color::Magenta,
        ColorTag::Gold => Color::LightYellow,
        ColorTag::Silver => Color::Gray,
        ColorTag::Sky => Color::Cyan,
    }
}

/// Coin balance for narrow panels: exact below 10,000, then thousands.
pub fn format_coins(coins: u64) -> String {
    if coins < 10_000 {
        coins.to_string()
    } else {
        format!("{:.1}K", coins as f64 / 1_000.0)
    }
}

/// Maps the logical 1280x720 field onto a terminal rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldScaler {
    pub area: Rect,
}

impl FieldScaler {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    fn sx(&self) -> f64 {
        self.area.width as f64 / FIELD_WIDTH
    }

    fn sy(&self) -> f64 {
        self.area.height as f64 / FIELD_HEIGHT
    }

    /// Cell covering a field point, or `None` when it falls outside.
    pub fn to_cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if self.area.width == 0 || self.area.height == 0 {
            return None;
        }
        let col = (x * self.sx()).floor();
        let row = (y * self.sy()).floor();
        if col < 0.0 || row < 0.0 || col >= self.area.width as f64 || row >= self.area.height as f64 {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }

    /// Field point at the center of a terminal cell, or `None` outside the area.
    pub fn to_field(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let area = self.area;
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }
        let x = ((column - area.x) as f64 + 0.5) / self.sx();
        let y = ((row - area.y) as f64 + 0.5) / self.sy();
        Some((x, y))
    }

    /// Cells covered by a field region, clipped to the area. Never empty for
    /// a region inside the field.
    pub fn region_rect(&self, region: &Region) -> Rect {
        let left = (region.x * self.sx()).floor().max(0.0);
        let top = (region.y * self.sy()).floor().max(0.0);
        let right = ((region.x + region.width) * self.sx())
            .ceil()
            .min(self.area.width as f64);
        let bottom = ((region.y + region.height) * self.sy())
            .ceil()
            .min(self.area.height as f64);
        let width = (right - left).max(1.0) as u16;
        let height = (bottom - top).max(1.0) as u16;
        Rect::new(
            self.area.x + left as u16,
            self.area.y + top as u16,
            width.min(self.area.width.saturating_sub(left as u16)),
            height.min(self.area.height.saturating_sub(top as u16)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coins() {
        assert_eq!(format_coins(999), "999");
        assert_eq!(format_coins(9_999), "9999");
        assert_eq!(format_coins(12_500), "12.5K");
    }

    #[test]
    fn test_scaler_round_trip_lands_in_same_cell() {
        let scaler = FieldScaler::new(Rect::new(1, 1, 128, 36));
        let (col, row) = scaler.to_cell(640.0, 360.0).unwrap();
        let (x, y) = scaler.to_field(col, row).unwrap();
        assert_eq!(scaler.to_cell(x, y), Some((col, row)));
    }

    #[test]
    fn test_scaler_rejects_outside_points() {
        let scaler = FieldScaler::new(Rect::new(1, 1, 128, 36));
        assert_eq!(scaler.to_cell(-1.0, 10.0), None);
        assert_eq!(scaler.to_cell(10.0, FIELD_HEIGHT), None);
        assert_eq!(scaler.to_field(0, 5), None);
        assert_eq!(scaler.to_field(129, 5), None);
    }

    #[test]
    fn test_click_inside_scaled_button_hits_button() {
        let scaler = FieldScaler::new(Rect::new(0, 0, 128, 36));
        let region = Region::new(540.0, 250.0, 200.0, 50.0);
        let rect = scaler.region_rect(&region);
        let (x, y) = scaler
            .to_field(rect.x + rect.width / 2, rect.y + rect.height / 2)
            .unwrap();
        assert!(region.contains(x, y));
    }

    #[test]
    fn test_layout_reserves_info_panel() {
        let layout = compute_game_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.info_panel.width, INFO_PANEL_WIDTH);
        assert_eq!(layout.status_bar.height, 2);
        assert_eq!(layout.content.width, 98 - INFO_PANEL_WIDTH);
    }
}
