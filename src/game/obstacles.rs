//! Pipe generation, scrolling, culling and the pass trigger.

use super::types::{Pipe, Session};
use crate::core::constants::*;
use rand::Rng;

/// Build a pipe at `x` with a random gap position.
///
/// The gap top is uniform in `[MIN_PIPE_HEIGHT, FIELD_HEIGHT - gap -
/// MIN_PIPE_HEIGHT - GROUND_MARGIN]`. At [`MAX_GAP_HEIGHT`] the range is a
/// single point; validated difficulty configs never exceed it.
pub fn create_pipe<R: Rng>(rng: &mut R, x: f64, gap_height: f64) -> Pipe {
    let min = MIN_PIPE_HEIGHT;
    let max = FIELD_HEIGHT - gap_height - MIN_PIPE_HEIGHT - GROUND_MARGIN;
    let gap_top = if max > min {
        rng.gen_range(min..max)
    } else {
        min
    };
    Pipe {
        x,
        gap_top,
        gap_height,
        scored: false,
    }
}

/// The two pipes every session starts with: one at the right edge and one a
/// spawn spacing further out.
pub fn seed_pipes<R: Rng>(session: &mut Session, rng: &mut R) {
    let gap = session.difficulty.gap_height;
    session.pipes.clear();
    session.pipes.push(create_pipe(rng, FIELD_WIDTH, gap));
    session
        .pipes
        .push(create_pipe(rng, FIELD_WIDTH + PIPE_SPAWN_SPACING, gap));
}

/// Scroll every pipe left by the current speed. Returns the gap centers of
/// the pipes that became scored this tick, in sequence order.
pub fn scroll_pipes(session: &mut Session) -> Vec<f64> {
    let speed = session.scroll_speed;
    let mut passed = Vec::new();
    for pipe in &mut session.pipes {
        pipe.x -= speed;
        if !pipe.scored && pipe.right() < BIRD_X {
            pipe.scored = true;
            passed.push(pipe.gap_center());
        }
    }
    passed
}

/// Drop pipes that have scrolled off the left edge.
pub fn cull_pipes(session: &mut Session) {
    session.pipes.retain(|pipe| pipe.x > PIPE_CULL_X);
}

/// Append a pipe at the right edge once the newest one has moved a full
/// spacing into the field. Returns true if one was added.
pub fn spawn_if_needed<R: Rng>(session: &mut Session, rng: &mut R) -> bool {
    let needs_pipe = match session.pipes.last() {
        None => true,
        Some(last) => last.x < FIELD_WIDTH - PIPE_SPAWN_SPACING,
    };
    if needs_pipe {
        let gap = session.difficulty.gap_height;
        session.pipes.push(create_pipe(rng, FIELD_WIDTH, gap));
    }
    needs_pipe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> Session {
        Session::new(Difficulty::Normal.config())
    }

    #[test]
    fn test_gap_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for d in Difficulty::ALL {
            let gap = d.config().gap_height;
            for _ in 0..500 {
                let pipe = create_pipe(&mut rng, 0.0, gap);
                assert!(pipe.gap_top >= MIN_PIPE_HEIGHT);
                assert!(pipe.gap_bottom() <= FIELD_HEIGHT - MIN_PIPE_HEIGHT - GROUND_MARGIN);
            }
        }
    }

    #[test]
    fn test_tallest_gap_still_fits() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let pipe = create_pipe(&mut rng, 0.0, MAX_GAP_HEIGHT);
        assert!((pipe.gap_top - MIN_PIPE_HEIGHT).abs() < f64::EPSILON);
        assert!(pipe.gap_bottom() <= FIELD_HEIGHT - MIN_PIPE_HEIGHT - GROUND_MARGIN);
    }

    #[test]
    fn test_seed_pipes() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut s = session();
        seed_pipes(&mut s, &mut rng);
        assert_eq!(s.pipes.len(), 2);
        assert!((s.pipes[0].x - FIELD_WIDTH).abs() < f64::EPSILON);
        assert!((s.pipes[1].x - (FIELD_WIDTH + 400.0)).abs() < f64::EPSILON);
        assert!(s.pipes.iter().all(|p| (p.gap_height - 180.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_scroll_scores_once() {
        let mut s = session();
        s.pipes.push(Pipe {
            x: BIRD_X - PIPE_WIDTH + 1.0,
            gap_top: 200.0,
            gap_height: 180.0,
            scored: false,
        });
        let first = scroll_pipes(&mut s);
        assert_eq!(first, vec![290.0]);
        assert!(s.pipes[0].scored);
        let second = scroll_pipes(&mut s);
        assert!(second.is_empty());
    }

    #[test]
    fn test_pipe_exactly_at_bird_is_not_scored() {
        let mut s = session();
        s.scroll_speed = 0.0;
        s.pipes.push(Pipe {
            x: BIRD_X - PIPE_WIDTH,
            gap_top: 200.0,
            gap_height: 180.0,
            scored: false,
        });
        assert!(scroll_pipes(&mut s).is_empty());
    }

    #[test]
    fn test_cull_preserves_order() {
        let mut s = session();
        for x in [-150.0, -100.0, -99.0, 300.0, 700.0] {
            s.pipes.push(Pipe {
                x,
                gap_top: 200.0,
                gap_height: 180.0,
                scored: false,
            });
        }
        cull_pipes(&mut s);
        let xs: Vec<f64> = s.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-99.0, 300.0, 700.0]);
    }

    #[test]
    fn test_spawn_rule() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut s = session();
        assert!(spawn_if_needed(&mut s, &mut rng));
        assert_eq!(s.pipes.len(), 1);

        // Newest pipe still at the right edge: no spawn.
        assert!(!spawn_if_needed(&mut s, &mut rng));

        s.pipes[0].x = FIELD_WIDTH - PIPE_SPAWN_SPACING;
        assert!(!spawn_if_needed(&mut s, &mut rng));

        s.pipes[0].x = FIELD_WIDTH - PIPE_SPAWN_SPACING - 0.5;
        assert!(spawn_if_needed(&mut s, &mut rng));
        assert_eq!(s.pipes.len(), 2);
        assert!((s.pipes[1].x - FIELD_WIDTH).abs() < f64::EPSILON);
    }
}
