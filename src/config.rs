//! Simulation configuration
//!
//! Field size, speed limits, launch state and round layout. Loaded from JSON
//! by the headless driver; everything has a default matching the phone demo.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Which flavour of the demo is being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameMode {
    /// Ball, paddle and bricks; the floor loses the round
    #[default]
    Breakout,
    /// Free-bouncing circles that collide with each other; every wall reflects
    FreeBounce,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Breakout => "Breakout",
            GameMode::FreeBounce => "FreeBounce",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakout" | "bricks" => Some(GameMode::Breakout),
            "freebounce" | "free-bounce" | "bounce" => Some(GameMode::FreeBounce),
            _ => None,
        }
    }

    /// Whether a circle crossing the bottom edge ends the round
    pub fn bottom_is_loss(&self) -> bool {
        matches!(self, GameMode::Breakout)
    }

    /// Whether circle/circle pairs take part in collision detection
    pub fn circles_collide(&self) -> bool {
        matches!(self, GameMode::FreeBounce)
    }
}

/// Canonical state a circle is put back into on round start and after a loss
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

impl Default for LaunchState {
    fn default() -> Self {
        Self {
            position: Vec2::new(LAUNCH_X, LAUNCH_Y),
            velocity: Vec2::ZERO,
            acceleration: Vec2::new(LAUNCH_AX, LAUNCH_AY),
        }
    }
}

/// Full simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub mode: GameMode,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Kinematics ===
    /// Per-component velocity limit
    pub max_speed: f32,
    /// Multiplier turning elapsed milliseconds into simulation dt
    pub speed_scale: f32,

    // === Ball(s) ===
    pub ball_radius: f32,
    pub launch: LaunchState,
    /// Number of circles spawned in free-bounce mode
    pub ball_count: usize,
    /// Seed for the free-bounce scene
    pub seed: u64,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the paddle's bottom edge to the field floor
    pub paddle_floor_gap: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_count: usize,
    pub bricks_per_row: usize,
    pub brick_gap: f32,
    /// y of the first brick row's top edge
    pub brick_top: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Breakout,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            max_speed: MAX_SPEED,
            speed_scale: SPEED_SCALE,

            ball_radius: BALL_RADIUS,
            launch: LaunchState::default(),
            ball_count: 1,
            seed: 0,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_floor_gap: PADDLE_FLOOR_GAP,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_count: TOTAL_BRICKS,
            bricks_per_row: BRICK_ROW_LENGTH,
            brick_gap: BRICK_GAP,
            brick_top: BRICK_TOP,
        }
    }
}

impl SimConfig {
    /// Defaults for the given mode
    pub fn from_mode(mode: GameMode) -> Self {
        let mut config = Self {
            mode,
            ..Self::default()
        };
        if mode == GameMode::FreeBounce {
            config.ball_count = FREE_BOUNCE_BALLS;
            config.brick_count = 0;
        }
        config
    }

    /// Convert a frame's elapsed wall-clock milliseconds into simulation dt
    #[inline]
    pub fn dt_for(&self, elapsed_ms: f32) -> f32 {
        elapsed_ms * self.speed_scale
    }

    /// y of the paddle's top edge
    pub fn paddle_top(&self) -> f32 {
        self.field_height - self.paddle_floor_gap - self.paddle_height
    }

    /// x of the paddle's left edge when centred
    pub fn paddle_middle(&self) -> f32 {
        self.field_width / 2.0 - self.paddle_width / 2.0
    }

    /// Check every value the kernel relies on
    pub fn validate(&self) -> Result<(), SimError> {
        let positives = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("max_speed", self.max_speed),
            ("speed_scale", self.speed_scale),
            ("ball_radius", self.ball_radius),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidConfig {
                    reason: format!("{name} must be positive and finite, got {value}"),
                });
            }
        }

        if !self.launch.position.is_finite()
            || !self.launch.velocity.is_finite()
            || !self.launch.acceleration.is_finite()
        {
            return Err(SimError::InvalidConfig {
                reason: "launch state must be finite".to_string(),
            });
        }

        let r = self.ball_radius;
        let p = self.launch.position;
        if p.x < r || p.x > self.field_width - r || p.y < r || p.y > self.field_height - r {
            return Err(SimError::InvalidConfig {
                reason: format!("launch position {p} does not fit a radius {r} ball in the field"),
            });
        }

        if self.brick_count > 0 && self.bricks_per_row == 0 {
            return Err(SimError::InvalidConfig {
                reason: "bricks_per_row must be at least 1".to_string(),
            });
        }

        if self.paddle_top() < 0.0 {
            return Err(SimError::InvalidConfig {
                reason: "paddle does not fit in the field".to_string(),
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {} ({} mode)", path.display(), config.mode.as_str());
        Ok(config)
    }
}
