//! Round layouts
//!
//! Builds the body list for each game mode. Order matters: circles first,
//! then the paddle, then bricks row by row, which is also the order the
//! collision detector walks.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::Bodies;
use crate::config::{GameMode, LaunchState, SimConfig};
use crate::consts::MASS_PER_RADIUS;
use crate::error::SimError;

/// Build the bodies for `config.mode`
pub fn build_round(config: &SimConfig) -> Result<Bodies, SimError> {
    config.validate()?;
    match config.mode {
        GameMode::Breakout => build_breakout(config),
        GameMode::FreeBounce => build_free_bounce(config),
    }
}

/// One ball, the paddle centred above the floor, and the brick grid
pub fn build_breakout(config: &SimConfig) -> Result<Bodies, SimError> {
    let mut bodies = Bodies::new();

    let r = config.ball_radius;
    bodies.add_circle(config.launch, r, r * MASS_PER_RADIUS)?;

    bodies.add_paddle(
        Vec2::new(config.paddle_middle(), config.paddle_top()),
        Vec2::new(config.paddle_width, config.paddle_height),
    )?;

    for top_left in brick_grid(config)? {
        bodies.add_brick(top_left, Vec2::new(config.brick_width, config.brick_height))?;
    }

    log::info!(
        "Breakout round: {} bricks in rows of {}, field {}x{}",
        config.brick_count,
        config.bricks_per_row,
        config.field_width,
        config.field_height
    );
    Ok(bodies)
}

/// Top-left corners of the brick grid, rows centred horizontally
pub fn brick_grid(config: &SimConfig) -> Result<Vec<Vec2>, SimError> {
    if config.brick_count == 0 {
        return Ok(Vec::new());
    }

    let per_row = config.bricks_per_row;
    let (w, h, gap) = (config.brick_width, config.brick_height, config.brick_gap);
    let row_width = per_row as f32 * w + (per_row as f32 - 1.0) * gap;
    if row_width > config.field_width {
        return Err(SimError::InvalidConfig {
            reason: format!(
                "{per_row} bricks of width {w} need {row_width}px, field is {}px",
                config.field_width
            ),
        });
    }

    let rows = config.brick_count.div_ceil(per_row);
    let bottom = config.brick_top + rows as f32 * (h + gap) - gap;
    if bottom > config.paddle_top() {
        return Err(SimError::InvalidConfig {
            reason: format!("{rows} brick rows reach y={bottom}, below the paddle"),
        });
    }

    let left = (config.field_width - row_width) / 2.0;
    let corners = (0..config.brick_count)
        .map(|i| {
            let (row, col) = (i / per_row, i % per_row);
            Vec2::new(
                left + col as f32 * (w + gap),
                config.brick_top + row as f32 * (h + gap),
            )
        })
        .collect();
    Ok(corners)
}

/// `ball_count` circles at seeded random, non-overlapping positions
///
/// Same seed, same scene. Each circle's spawn point is its launch state.
pub fn build_free_bounce(config: &SimConfig) -> Result<Bodies, SimError> {
    let mut rng = Pcg32::seed_from_u64(config.seed);
    let mut bodies = Bodies::new();

    let r = config.ball_radius;
    let max_v = config.max_speed / 4.0;
    let mut placed: Vec<Vec2> = Vec::with_capacity(config.ball_count);

    for _ in 0..config.ball_count {
        let Some(position) = free_spot(&mut rng, config, &placed) else {
            log::warn!(
                "Only room for {} of {} circles of radius {r}",
                placed.len(),
                config.ball_count
            );
            break;
        };
        placed.push(position);

        let launch = LaunchState {
            position,
            velocity: Vec2::new(rng.random_range(-max_v..=max_v), rng.random_range(-max_v..=max_v)),
            acceleration: config.launch.acceleration,
        };
        bodies.add_circle(launch, r, r * MASS_PER_RADIUS)?;
    }

    log::info!(
        "Free-bounce scene: {} circles (seed {})",
        placed.len(),
        config.seed
    );
    Ok(bodies)
}

fn free_spot(rng: &mut Pcg32, config: &SimConfig, placed: &[Vec2]) -> Option<Vec2> {
    const ATTEMPTS: usize = 64;
    let r = config.ball_radius;
    if config.field_width < 2.0 * r || config.field_height < 2.0 * r {
        return None;
    }

    (0..ATTEMPTS).find_map(|_| {
        let p = Vec2::new(
            rng.random_range(r..=config.field_width - r),
            rng.random_range(r..=config.field_height - r),
        );
        placed
            .iter()
            .all(|q| q.distance(p) >= 2.0 * r)
            .then_some(p)
    })
}
