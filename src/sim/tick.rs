//! Per-frame orchestration
//!
//! One call to [`advance`] per rendered frame: integrate, contain, detect,
//! resolve, then report whether the round just ended.

use super::body::Bodies;
use super::boundary::resolve_wall_collision;
use super::collision::detect_collisions;
use super::integrate::integrate;
use super::layout::build_round;
use super::resolve::resolve_collisions;
use super::round::{RoundState, TerminalSignal};
use super::shared::PaddleInput;
use crate::config::SimConfig;
use crate::error::SimError;

/// Advance the simulation by one frame
///
/// `elapsed_ms` is wall-clock time since the previous frame; it is scaled by
/// `config.speed_scale`. A zero, negative or non-finite elapsed time makes
/// the call a no-op, as does a round that is already won or lost.
///
/// Loss wins ties: when a ball leaves through the floor the tick stops
/// before collision detection, so no brick is destroyed or counted that
/// frame.
pub fn advance(
    bodies: &mut Bodies,
    elapsed_ms: f32,
    round: &mut RoundState,
    config: &SimConfig,
) -> Option<TerminalSignal> {
    let dt = config.dt_for(elapsed_ms);
    if !(elapsed_ms.is_finite() && dt.is_finite() && dt > 0.0) {
        log::trace!("Skipping tick with elapsed time {elapsed_ms}ms");
        return None;
    }

    // Paddle follows input even after the round ends
    bodies.apply_paddle_input();

    if !round.is_running() {
        return None;
    }

    for body in bodies.iter_mut() {
        integrate(body, dt, config.max_speed);
    }

    let mut lost = false;
    for body in bodies.iter_mut() {
        lost |= resolve_wall_collision(body, config);
    }
    if lost {
        log::info!(
            "Round lost with {}/{} bricks destroyed",
            round.destroyed,
            round.total_bricks
        );
        return Some(round.mark_lost());
    }

    let pass = detect_collisions(bodies.as_mut_slice(), config.mode);
    resolve_collisions(bodies.as_mut_slice(), &pass.collisions, round);

    let signal = round.check_won();
    if signal.is_some() {
        log::info!("Round won: all {} bricks destroyed", round.total_bricks);
    }
    signal
}

/// Start a new round with the same bodies
///
/// Circles go back to their launch state, every brick is reactivated and the
/// counter is zeroed. Calling it twice is the same as calling it once.
pub fn reset_round(bodies: &mut Bodies, round: &mut RoundState, config: &SimConfig) {
    for body in bodies.iter_mut() {
        body.reset_for_round();
    }
    let total = bodies.brick_count() as u32;
    round.reset(total);
    log::debug!("Round reset ({} mode, {total} bricks)", config.mode.as_str());
}

/// Bodies, round state and config in one place
///
/// For callers that do not need to own the pieces separately.
#[derive(Debug)]
pub struct Simulation {
    bodies: Bodies,
    round: RoundState,
    config: SimConfig,
    /// Ticks actually simulated since the last reset
    ticks: u64,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let mut bodies = build_round(&config)?;
        let mut round = RoundState::default();
        reset_round(&mut bodies, &mut round, &config);
        Ok(Self {
            bodies,
            round,
            config,
            ticks: 0,
        })
    }

    pub fn advance(&mut self, elapsed_ms: f32) -> Option<TerminalSignal> {
        let dt = self.config.dt_for(elapsed_ms);
        let simulated = self.round.is_running() && dt.is_finite() && dt > 0.0;
        let signal = advance(&mut self.bodies, elapsed_ms, &mut self.round, &self.config);
        if simulated {
            self.ticks += 1;
        }
        signal
    }

    pub fn reset(&mut self) {
        reset_round(&mut self.bodies, &mut self.round, &self.config);
        self.ticks = 0;
    }

    pub fn paddle_input(&self) -> PaddleInput {
        self.bodies.paddle_input()
    }

    pub fn bodies(&self) -> &Bodies {
        &self.bodies
    }

    /// Direct body access, for tests and scripted scenarios
    pub fn bodies_mut(&mut self) -> &mut Bodies {
        &mut self.bodies
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
