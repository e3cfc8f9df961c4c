//! Bird motion and collision detection.

use super::types::{Bird, Pipe};
use crate::core::constants::*;

/// What the bird hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collision {
    /// Touched the top of the field.
    Ceiling,
    /// Touched the bottom of the field.
    Ground,
    /// Overlapped the solid part of the pipe at this index.
    Pipe(usize),
}

/// One tick of gravity integration.
pub fn step_bird(bird: &mut Bird) {
    bird.velocity += GRAVITY;
    bird.y += bird.velocity;
    bird.rotation = Bird::rotation_for(bird.velocity);
    bird.advance_wings();
}

/// Flap: the velocity is replaced, not added to, so repeated jumps within a
/// tick are equivalent to one.
pub fn apply_jump(bird: &mut Bird) {
    bird.velocity = JUMP_VELOCITY;
}

/// First collision in priority order: field bounds, then pipes left to right.
pub fn check_collision(bird: &Bird, pipes: &[Pipe]) -> Option<Collision> {
    if bird.top() <= 0.0 {
        return Some(Collision::Ceiling);
    }
    if bird.bottom() >= FIELD_HEIGHT {
        return Some(Collision::Ground);
    }

    pipes
        .iter()
        .position(|pipe| hits_pipe(bird, pipe))
        .map(Collision::Pipe)
}

fn hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps_x = bird.right() > pipe.x && bird.left() < pipe.right();
    overlaps_x && (bird.top() < pipe.gap_top || bird.bottom() > pipe.gap_bottom())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe_at(x: f64, gap_top: f64) -> Pipe {
        Pipe {
            x,
            gap_top,
            gap_height: 180.0,
            scored: false,
        }
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut bird = Bird::default();
        step_bird(&mut bird);
        assert!((bird.velocity - 0.5).abs() < f64::EPSILON);
        assert!((bird.y - 360.5).abs() < f64::EPSILON);
        step_bird(&mut bird);
        assert!((bird.velocity - 1.0).abs() < f64::EPSILON);
        assert!((bird.y - 361.5).abs() < f64::EPSILON);
        assert!((bird.rotation - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jump_sets_velocity() {
        let mut bird = Bird {
            velocity: 7.0,
            ..Bird::default()
        };
        apply_jump(&mut bird);
        assert!((bird.velocity - JUMP_VELOCITY).abs() < f64::EPSILON);
        apply_jump(&mut bird);
        assert!((bird.velocity - JUMP_VELOCITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_field_bounds() {
        let bird = Bird {
            y: 15.0,
            ..Bird::default()
        };
        assert_eq!(check_collision(&bird, &[]), Some(Collision::Ceiling));

        let bird = Bird {
            y: FIELD_HEIGHT - 15.0,
            ..Bird::default()
        };
        assert_eq!(check_collision(&bird, &[]), Some(Collision::Ground));

        let bird = Bird {
            y: 15.01,
            ..Bird::default()
        };
        assert_eq!(check_collision(&bird, &[]), None);
    }

    #[test]
    fn test_bounds_win_over_pipes() {
        let bird = Bird {
            y: FIELD_HEIGHT + 40.0,
            ..Bird::default()
        };
        let pipes = [pipe_at(BIRD_X - 10.0, 100.0)];
        assert_eq!(check_collision(&bird, &pipes), Some(Collision::Ground));
    }

    #[test]
    fn test_pipe_segments() {
        // Gap spans 300..480 for a pipe overlapping the bird horizontally.
        let pipes = [pipe_at(BIRD_X - 10.0, 300.0)];

        let in_gap = Bird {
            y: 390.0,
            ..Bird::default()
        };
        assert_eq!(check_collision(&in_gap, &pipes), None);

        let in_top = Bird {
            y: 310.0,
            ..Bird::default()
        };
        assert_eq!(check_collision(&in_top, &pipes), Some(Collision::Pipe(0)));

        let in_bottom = Bird {
            y: 470.0,
            ..Bird::default()
        };
        assert_eq!(check_collision(&in_bottom, &pipes), Some(Collision::Pipe(0)));
    }

    #[test]
    fn test_pipe_edges_touching_do_not_collide() {
        let bird = Bird {
            y: 100.0,
            ..Bird::default()
        };
        // Pipe starts exactly at the bird's right edge.
        let ahead = [pipe_at(bird.right(), 400.0)];
        assert_eq!(check_collision(&bird, &ahead), None);
        // Pipe ends exactly at the bird's left edge.
        let behind = [pipe_at(bird.left() - PIPE_WIDTH, 400.0)];
        assert_eq!(check_collision(&bird, &behind), None);
    }

    #[test]
    fn test_first_hit_pipe_reported() {
        let bird = Bird {
            y: 100.0,
            ..Bird::default()
        };
        let pipes = [pipe_at(900.0, 400.0), pipe_at(BIRD_X, 400.0), pipe_at(BIRD_X - 20.0, 400.0)];
        assert_eq!(check_collision(&bird, &pipes), Some(Collision::Pipe(1)));
    }
}
