//! Game-over banner drawn over the frozen field.

use super::game_common::render_status_bar;
use crate::game::snapshot::Snapshot;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Banner lines for a finished run.
pub fn summary_lines(snap: &Snapshot) -> Vec<Line<'static>> {
    let new_record = snap.score > 0 && snap.score == snap.profile.high_score;
    let title = if new_record { "NEW RECORD!" } else { "CRASH!" };
    let title_color = if new_record { Color::Yellow } else { Color::Red };
    vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Score {}  -  Best {}  -  Max combo {}  -  Perfect {}",
                snap.score, snap.profile.high_score, snap.max_combo, snap.perfect_passes
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("+{} coins  (wallet {})", snap.coins_earned, snap.profile.coins),
            Style::default().fg(Color::LightYellow),
        )),
    ]
}

/// Compact banner at the bottom of `area`; the field stays visible above it.
pub fn render_game_over_banner(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let lines = summary_lines(snap);
    let banner_height = (lines.len() as u16 + 2).min(area.height);
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(banner_height),
        width: area.width,
        height: banner_height,
    };
    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

pub fn render_game_over_status(frame: &mut Frame, area: Rect) {
    render_status_bar(
        frame,
        area,
        "Game over",
        Color::Red,
        &[("[Space/Click]", "Retry"), ("[Esc]", "Menu"), ("[q]", "Quit")],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::GameContext;
    use crate::game::snapshot::snapshot;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_new_record_title() {
        let mut ctx = GameContext::default();
        ctx.profile.high_score = 0;
        let snap = snapshot(&ctx);
        assert_eq!(line_text(&summary_lines(&snap)[0]), "CRASH!");
    }

    #[test]
    fn test_summary_mentions_coins() {
        let mut ctx = GameContext::default();
        ctx.profile.coins = 42;
        let snap = snapshot(&ctx);
        assert!(line_text(&summary_lines(&snap)[2]).contains("wallet 42"));
    }
}
