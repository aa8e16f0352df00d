//! Explicit Euler integration with a per-component speed clamp

use glam::Vec2;

use super::body::{Body, BodyKind};

/// Advance one body by `dt` (already scaled to simulation units)
///
/// `v += a·dt`, each velocity component clamped to `[-max_speed, max_speed]`,
/// then `p += v·dt`. Paddles are skipped: their position comes from input.
pub fn integrate(body: &mut Body, dt: f32, max_speed: f32) {
    if body.kind() == BodyKind::Paddle {
        return;
    }

    body.vel += body.acc * dt;
    body.vel = clamp_components(body.vel, max_speed);

    let pos = body.pos() + body.vel * dt;
    body.set_pos(pos);
}

#[inline]
fn clamp_components(v: Vec2, max_speed: f32) -> Vec2 {
    v.clamp(Vec2::splat(-max_speed), Vec2::splat(max_speed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball() -> Body {
        Body::circle(1, Vec2::new(100.0, 100.0), 16.0, 160.0).unwrap()
    }

    #[test]
    fn test_velocity_then_position() {
        let mut b = ball();
        b.vel = Vec2::new(1.0, -2.0);
        b.acc = Vec2::new(0.5, 1.0);
        integrate(&mut b, 2.0, 50.0);
        // v = (1 + 1, -2 + 2) = (2, 0); p = (100 + 4, 100 + 0)
        assert_eq!(b.vel, Vec2::new(2.0, 0.0));
        assert_eq!(b.pos(), Vec2::new(104.0, 100.0));
    }

    #[test]
    fn test_clamp_applies_before_position() {
        let mut b = ball();
        b.vel = Vec2::new(49.0, -49.0);
        b.acc = Vec2::new(10.0, -10.0);
        integrate(&mut b, 1.0, 50.0);
        assert_eq!(b.vel, Vec2::new(50.0, -50.0));
        assert_eq!(b.pos(), Vec2::new(150.0, 50.0));
    }

    #[test]
    fn test_paddle_not_integrated() {
        let mut p = Body::paddle(2, Vec2::new(50.0, 500.0), Vec2::new(125.0, 50.0)).unwrap();
        p.vel = Vec2::new(5.0, 5.0);
        p.acc = Vec2::new(1.0, 1.0);
        integrate(&mut p, 1.0, 50.0);
        assert_eq!(p.pos(), Vec2::new(50.0, 500.0));
        assert_eq!(p.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_brick_stays_put() {
        let mut b = Body::brick(3, Vec2::new(10.0, 10.0), Vec2::new(80.0, 25.0)).unwrap();
        integrate(&mut b, 3.0, 50.0);
        assert_eq!(b.pos(), Vec2::new(10.0, 10.0));
    }

    proptest! {
        #[test]
        fn velocity_always_clamped(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            ax in -50.0f32..50.0,
            ay in -50.0f32..50.0,
            dt in 0.0f32..20.0,
            max_speed in 1.0f32..100.0,
        ) {
            let mut b = ball();
            b.vel = Vec2::new(vx, vy);
            b.acc = Vec2::new(ax, ay);
            integrate(&mut b, dt, max_speed);
            prop_assert!(b.vel.x.abs() <= max_speed);
            prop_assert!(b.vel.y.abs() <= max_speed);
        }
    }
}
