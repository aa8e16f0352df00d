//! Collision detection
//!
//! Discrete overlap tests only: circle vs axis-aligned rectangle (paddle,
//! bricks) and circle vs circle. Every unordered pair is examined once per
//! tick; n stays in the tens so the O(n²) scan is fine.

use glam::Vec2;

use super::body::{Body, BodyKind, Shape};
use crate::config::GameMode;

/// One overlapping pair found this tick
///
/// `circle` and `other` index into the body slice. `dx`/`dy` point from the
/// circle's position to the other body's position, `d` is their length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub circle: usize,
    pub other: usize,
    pub other_kind: BodyKind,
    pub dx: f32,
    pub dy: f32,
    pub d: f32,
}

/// Output of one detection pass
#[derive(Debug, Clone, Default)]
pub struct DetectionPass {
    /// In detection order: ascending i, then ascending j
    pub collisions: Vec<Collision>,
    /// Always n(n-1)/2
    pub pairs_examined: usize,
}

/// Closest-point test between a circle and an axis-aligned rectangle
///
/// The centre is clamped onto the rectangle; touching (distance == radius)
/// counts as a hit.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_min: Vec2, rect_size: Vec2) -> bool {
    let closest = center.clamp(rect_min, rect_min + rect_size);
    center.distance(closest) <= radius
}

/// Strict overlap between two circles
#[inline]
pub fn circle_circle_overlap(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    c1.distance(c2) < r1 + r2
}

/// Test the pair `(i, j)` and deactivate a brick that gets hit
///
/// Returns `None` for pairs that are not eligible in `mode`, inactive bricks,
/// eligible pairs that do not overlap, and equal or out-of-range indices.
pub fn check_collision(bodies: &mut [Body], i: usize, j: usize, mode: GameMode) -> Option<Collision> {
    if i == j {
        return None;
    }
    let (circle_idx, other_idx) = match (bodies.get(i)?.kind(), bodies.get(j)?.kind()) {
        (BodyKind::Circle, BodyKind::Paddle | BodyKind::Brick) => (i, j),
        (BodyKind::Paddle | BodyKind::Brick, BodyKind::Circle) => (j, i),
        (BodyKind::Circle, BodyKind::Circle) if mode.circles_collide() => (i, j),
        _ => return None,
    };
    let (circle, other) = (&bodies[circle_idx], &bodies[other_idx]);

    if !other.is_active() {
        return None;
    }
    let radius = circle.radius()?;
    let center = circle.pos();
    let delta = other.pos() - center;

    let hit = match other.shape() {
        Shape::Circle { radius: other_r, .. } => {
            circle_circle_overlap(center, radius, other.pos(), *other_r)
        }
        Shape::Paddle { size } => circle_rect_overlap(center, radius, other.pos(), *size),
        Shape::Brick { size, active } => {
            let hit = circle_rect_overlap(center, radius, other.pos(), *size);
            if hit {
                active.set(false);
            }
            hit
        }
    };
    if !hit {
        return None;
    }

    Some(Collision {
        circle: circle_idx,
        other: other_idx,
        other_kind: other.kind(),
        dx: delta.x,
        dy: delta.y,
        d: delta.length(),
    })
}

/// Scan every unordered pair once and collect the hits
pub fn detect_collisions(bodies: &mut [Body], mode: GameMode) -> DetectionPass {
    let n = bodies.len();
    let mut pass = DetectionPass::default();

    for i in 0..n {
        for j in (i + 1)..n {
            pass.pairs_examined += 1;
            if let Some(collision) = check_collision(bodies, i, j, mode) {
                pass.collisions.push(collision);
            }
        }
    }

    pass
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(id: u32, x: f32, y: f32) -> Body {
        Body::circle(id, Vec2::new(x, y), 16.0, 160.0).unwrap()
    }

    fn brick(id: u32, x: f32, y: f32) -> Body {
        Body::brick(id, Vec2::new(x, y), Vec2::new(80.0, 25.0)).unwrap()
    }

    fn paddle(id: u32, x: f32, y: f32) -> Body {
        Body::paddle(id, Vec2::new(x, y), Vec2::new(125.0, 50.0)).unwrap()
    }

    #[test]
    fn test_circle_rect_overlap() {
        let min = Vec2::new(50.0, 500.0);
        let size = Vec2::new(125.0, 50.0);
        // Above the top edge, within radius
        assert!(circle_rect_overlap(Vec2::new(100.0, 490.0), 16.0, min, size));
        // Exactly touching counts
        assert!(circle_rect_overlap(Vec2::new(100.0, 484.0), 16.0, min, size));
        assert!(!circle_rect_overlap(Vec2::new(100.0, 483.0), 16.0, min, size));
        // Near a corner but outside the radius
        assert!(!circle_rect_overlap(Vec2::new(38.0, 488.0), 16.0, min, size));
        // Centre inside the rectangle
        assert!(circle_rect_overlap(Vec2::new(100.0, 520.0), 16.0, min, size));
    }

    #[test]
    fn test_circle_circle_overlap() {
        assert!(circle_circle_overlap(Vec2::ZERO, 10.0, Vec2::new(19.0, 0.0), 10.0));
        assert!(!circle_circle_overlap(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0));
    }

    #[test]
    fn test_pair_count_is_n_choose_2() {
        let mut bodies = vec![
            ball(1, 100.0, 100.0),
            paddle(2, 0.0, 700.0),
            brick(3, 0.0, 0.0),
            brick(4, 200.0, 0.0),
            brick(5, 300.0, 0.0),
        ];
        let pass = detect_collisions(&mut bodies, GameMode::Breakout);
        assert_eq!(pass.pairs_examined, 10);
        assert!(pass.collisions.is_empty());
    }

    #[test]
    fn test_brick_hit_deactivates() {
        let mut bodies = vec![ball(1, 40.0, 35.0), brick(2, 0.0, 0.0)];
        let pass = detect_collisions(&mut bodies, GameMode::Breakout);
        assert_eq!(pass.collisions.len(), 1);
        assert!(!bodies[1].is_active());

        // Already destroyed: skipped
        let pass = detect_collisions(&mut bodies, GameMode::Breakout);
        assert!(pass.collisions.is_empty());
    }

    #[test]
    fn test_two_adjacent_bricks_both_reported() {
        let mut bodies = vec![ball(1, 85.0, 35.0), brick(2, 0.0, 0.0), brick(3, 90.0, 0.0)];
        let pass = detect_collisions(&mut bodies, GameMode::Breakout);
        let others: Vec<usize> = pass.collisions.iter().map(|c| c.other).collect();
        assert_eq!(others, vec![1, 2]);
        assert_eq!(bodies.iter().filter(|b| b.is_active()).count(), 1);
    }

    #[test]
    fn test_rectangle_before_circle_in_list() {
        let mut bodies = vec![paddle(1, 50.0, 500.0), ball(2, 100.0, 490.0)];
        let pass = detect_collisions(&mut bodies, GameMode::Breakout);
        assert_eq!(pass.collisions.len(), 1);
        let c = pass.collisions[0];
        assert_eq!((c.circle, c.other), (1, 0));
        assert_eq!(c.other_kind, BodyKind::Paddle);
        assert_eq!((c.dx, c.dy), (-50.0, 10.0));
    }

    #[test]
    fn test_circles_only_collide_in_free_bounce() {
        let mut bodies = vec![ball(1, 100.0, 100.0), ball(2, 120.0, 100.0)];
        assert!(detect_collisions(&mut bodies, GameMode::Breakout).collisions.is_empty());

        let pass = detect_collisions(&mut bodies, GameMode::FreeBounce);
        assert_eq!(pass.collisions.len(), 1);
        assert_eq!(pass.collisions[0].d, 20.0);
    }

    #[test]
    fn test_rectangles_never_pair() {
        let mut bodies = vec![paddle(1, 0.0, 0.0), brick(2, 0.0, 0.0), brick(3, 10.0, 10.0)];
        let pass = detect_collisions(&mut bodies, GameMode::FreeBounce);
        assert_eq!(pass.pairs_examined, 3);
        assert!(pass.collisions.is_empty());
        assert!(bodies.iter().all(|b| b.is_active()));
    }

    #[test]
    fn test_check_collision_ignores_bad_indices() {
        let mut bodies = vec![ball(1, 40.0, 35.0), brick(2, 0.0, 0.0)];
        assert_eq!(check_collision(&mut bodies, 0, 0, GameMode::Breakout), None);
        assert_eq!(check_collision(&mut bodies, 0, 2, GameMode::Breakout), None);
        assert_eq!(check_collision(&mut bodies, 7, 1, GameMode::Breakout), None);
        // Nothing was hit along the way
        assert!(bodies[1].is_active());
    }
}
