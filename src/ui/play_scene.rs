//! Play field rendering: sky, pipes, bird and particles.
//!
//! Drawn straight into the frame buffer cell by cell; the game-over screen
//! reuses it to show the frozen field behind its banner.

use super::game_common::{
    info_row, render_info_panel_frame, render_status_bar, tag_color, FieldScaler,
};
use crate::config::GameConfig;
use crate::core::constants::{BIRD_X, PIPE_WIDTH};
use crate::game::layout::Region;
use crate::game::particles::ParticleColor;
use crate::game::snapshot::{BirdView, PipeView, Snapshot};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const PIPE_LIP: f64 = 20.0;

/// Render the field with the current screen shake applied.
pub fn render_field(frame: &mut Frame, area: Rect, snap: &Snapshot, config: &GameConfig) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let scaler = FieldScaler::new(shaken_area(area, snap.screen_shake, snap.animation_time));
    let obstacle = tag_color(config.shop.obstacle_skin(&snap.profile.obstacle_skin).color);
    let bird = tag_color(config.shop.bird_skin(&snap.profile.bird_skin).color);

    let buf = frame.buffer_mut();
    for pipe in &snap.pipes {
        draw_pipe(buf, &scaler, area, pipe, obstacle);
    }
    if let Some(view) = &snap.bird {
        draw_bird(buf, &scaler, area, view, bird);
    }
    draw_particles(buf, &scaler, area, snap);
}

/// Particles only, for the menu screens.
pub fn render_particles(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let scaler = FieldScaler::new(area);
    draw_particles(frame.buffer_mut(), &scaler, area, snap);
}

fn draw_particles(buf: &mut Buffer, scaler: &FieldScaler, clip: Rect, snap: &Snapshot) {
    for particle in &snap.particles {
        if let Some((x, y)) = scaler.to_cell(particle.x, particle.y) {
            if contains(clip, x, y) {
                let glyph = if particle.life > 0.5 { '*' } else { '·' };
                buf.get_mut(x, y)
                    .set_char(glyph)
                    .set_fg(particle_color(particle.color));
            }
        }
    }
}

/// Jitter the field by up to one cell per 5 units of shake.
fn shaken_area(area: Rect, shake: f64, time: f64) -> Rect {
    if shake <= 0.0 {
        return area;
    }
    let reach = (shake / 5.0).round();
    let dx = ((time * 91.0).sin() * reach).round() as i32;
    let dy = ((time * 57.0).cos() * reach).round() as i32;
    Rect {
        x: (area.x as i32 + dx).max(0) as u16,
        y: (area.y as i32 + dy).max(0) as u16,
        ..area
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

fn draw_pipe(buf: &mut Buffer, scaler: &FieldScaler, clip: Rect, pipe: &PipeView, color: Color) {
    let left = pipe.x.max(0.0);
    let right = pipe.x + PIPE_WIDTH;
    if right <= left {
        return;
    }
    let cols = scaler.region_rect(&Region::new(left, 0.0, right - left, 1.0));
    let area = scaler.area;
    for row in area.y..area.y + area.height {
        let field_y = scaler
            .to_field(area.x, row)
            .map(|(_, y)| y)
            .unwrap_or_default();
        let gap_bottom = pipe.gap_top + pipe.gap_height;
        if field_y >= pipe.gap_top && field_y <= gap_bottom {
            continue;
        }
        let lip = (field_y < pipe.gap_top && pipe.gap_top - field_y < PIPE_LIP)
            || (field_y > gap_bottom && field_y - gap_bottom < PIPE_LIP);
        for col in cols.x..cols.x + cols.width {
            if contains(clip, col, row) {
                buf.get_mut(col, row)
                    .set_char(if lip { '▓' } else { '█' })
                    .set_fg(color);
            }
        }
    }
}

fn draw_bird(buf: &mut Buffer, scaler: &FieldScaler, clip: Rect, bird: &BirdView, color: Color) {
    let glyph = if bird.rotation < -10.0 {
        '▲'
    } else if bird.rotation > 45.0 {
        '▼'
    } else {
        '►'
    };
    let Some((x, y)) = scaler.to_cell(BIRD_X, bird.y) else {
        return;
    };
    if contains(clip, x, y) {
        buf.get_mut(x, y)
            .set_char(glyph)
            .set_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    }
    // Wing: drawn behind the body, flickers with the wing phase.
    if x > clip.x && bird.wing_phase.sin() > 0.0 && contains(clip, x - 1, y) {
        buf.get_mut(x - 1, y).set_char('~').set_fg(color);
    }
}

fn particle_color(color: ParticleColor) -> Color {
    match color {
        ParticleColor::White => Color::White,
        ParticleColor::Gold => Color::LightYellow,
        ParticleColor::Accent => Color::Magenta,
    }
}

/// Status bar while playing.
pub fn render_play_status(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let status = if snap.combo > 1 {
        format!("Score: {}   Combo x{}", snap.score, snap.combo)
    } else {
        format!("Score: {}", snap.score)
    };
    render_status_bar(
        frame,
        area,
        &status,
        Color::Green,
        &[("[Space/Up/Click]", "Flap"), ("[q]", "Quit")],
    );
}

/// Info panel with the live session counters.
pub fn render_play_info(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }
    let lines: Vec<Line> = vec![
        info_row("Score", snap.score.to_string(), Color::White),
        info_row("Best", snap.profile.high_score.to_string(), Color::Yellow),
        Line::from(""),
        info_row("Combo", snap.combo.to_string(), Color::Magenta),
        info_row("Max combo", snap.max_combo.to_string(), Color::Magenta),
        info_row("Perfect", snap.perfect_passes.to_string(), Color::Cyan),
        Line::from(""),
        info_row("Coins", format!("+{}", snap.coins_earned), Color::LightYellow),
        info_row("Speed", format!("{:.2}", snap.scroll_speed), Color::Green),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
