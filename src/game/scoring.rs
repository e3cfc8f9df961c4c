//! Score, combo and coin rules for a pipe pass.

use super::types::Session;
use crate::core::constants::*;

/// How cleanly the bird went through a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Bird center within [`PERFECT_PASS_TOLERANCE`] of the gap center.
    Perfect,
    Regular,
}

pub fn classify_pass(bird_y: f64, gap_center: f64) -> PassKind {
    if (bird_y - gap_center).abs() < PERFECT_PASS_TOLERANCE {
        PassKind::Perfect
    } else {
        PassKind::Regular
    }
}

/// Credit one passed pipe to the session.
///
/// Perfect passes extend the combo and pay double; anything else breaks the
/// combo. `max_combo >= combo` holds after every call.
pub fn register_pass(session: &mut Session, gap_center: f64) -> PassKind {
    session.score += 1;
    let kind = classify_pass(session.bird.y, gap_center);
    match kind {
        PassKind::Perfect => {
            session.perfect_passes += 1;
            session.combo += 1;
            session.max_combo = session.max_combo.max(session.combo);
            session.coins_earned += PERFECT_PASS_COINS;
        }
        PassKind::Regular => {
            session.combo = 0;
            session.coins_earned += REGULAR_PASS_COINS;
        }
    }
    kind
}

/// Recompute scroll speed from the current score.
pub fn update_speed(session: &mut Session) {
    session.scroll_speed = session.difficulty.speed_for_score(session.score);
}
