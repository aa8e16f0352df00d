//! Collision response
//!
//! Rectangle hits are a vertical bounce plus a one-radius nudge out of the
//! rectangle. Circle pairs get a full elastic exchange along the centre line.

use glam::Vec2;

use super::body::{Body, BodyKind, pair_mut};
use super::collision::Collision;
use super::round::RoundState;

/// Apply one collision. Returns `true` if it destroyed a brick.
///
/// A record whose indices are equal or out of range is ignored.
pub fn resolve_collision(bodies: &mut [Body], collision: &Collision) -> bool {
    let len = bodies.len();
    let Some((circle, other)) = pair_mut(bodies, collision.circle, collision.other) else {
        log::warn!(
            "Ignoring collision between bodies #{} and #{} of {}",
            collision.circle,
            collision.other,
            len
        );
        return false;
    };
    match collision.other_kind {
        BodyKind::Paddle => {
            bounce_off_paddle(circle);
            false
        }
        BodyKind::Brick => {
            bounce_off_brick(circle);
            true
        }
        BodyKind::Circle => {
            resolve_elastic(circle, other, collision);
            false
        }
    }
}

/// Resolve a tick's collisions in detection order, counting destroyed bricks
pub fn resolve_collisions(bodies: &mut [Body], collisions: &[Collision], round: &mut RoundState) {
    for collision in collisions {
        if resolve_collision(bodies, collision) {
            round.record_brick();
            log::debug!(
                "Brick {} destroyed ({}/{})",
                bodies[collision.other].id,
                round.destroyed,
                round.total_bricks
            );
        }
    }
}

/// Paddle sits below the ball: lift it by one radius and send it back up
fn bounce_off_paddle(circle: &mut Body) {
    let r = circle.radius().unwrap_or(0.0);
    circle.set_y(circle.pos().y - r);
    flip_vertical(circle);
}

/// Bricks sit above the ball: push it down by one radius and send it back
///
/// A ball that already has downward acceleration (`ay > 0`) is rebounding
/// from an earlier brick this tick, typically the neighbour in a stacked
/// pair. Flipping again would send it straight back into the wall, so only
/// the nudge is applied.
fn bounce_off_brick(circle: &mut Body) {
    let r = circle.radius().unwrap_or(0.0);
    circle.set_y(circle.pos().y + r);
    if circle.acc.y > 0.0 {
        return;
    }
    flip_vertical(circle);
}

#[inline]
fn flip_vertical(circle: &mut Body) {
    circle.vel.y = -circle.vel.y;
    circle.acc.y = -circle.acc.y;
}

/// Separate two overlapping circles and exchange momentum along the normal
///
/// Coincident centres have no defined normal; `+x` is used so the pair still
/// separates and velocities stay finite.
pub fn resolve_elastic(a: &mut Body, b: &mut Body, collision: &Collision) {
    let (Some(ra), Some(rb)) = (a.radius(), b.radius()) else {
        return;
    };

    let delta = Vec2::new(collision.dx, collision.dy);
    let normal = if collision.d > 0.0 {
        delta / collision.d
    } else {
        Vec2::X
    };

    // Positional correction, half each
    let s = ra + rb - collision.d;
    let half = normal * (s / 2.0);
    a.set_pos(a.pos() - half);
    b.set_pos(b.pos() + half);

    // Impulse only while approaching
    let approach = (a.vel - b.vel).dot(normal);
    if approach <= 0.0 {
        return;
    }
    let (ma, mb) = (a.mass(), b.mass());
    let k = -2.0 * approach / (1.0 / ma + 1.0 / mb);
    a.vel += normal * (k / ma);
    b.vel -= normal * (k / mb);
}
