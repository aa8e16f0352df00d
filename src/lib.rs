//! Brick Bounce - physics kernel for paddle/brick/ball canvas games
//!
//! Core modules:
//! - `sim`: Per-frame simulation (integration, walls, collisions, round state)
//! - `config`: Field, speed and layout configuration
//! - `error`: Setup-time errors
//!
//! Rendering and input binding belong to the host; it reads body positions
//! through [`sim::PositionReader`] and writes the paddle through
//! [`sim::PaddleInput`].

pub mod config;
pub mod error;
pub mod sim;

pub use config::{GameMode, LaunchState, SimConfig};
pub use error::SimError;

/// Defaults taken from the phone demo
pub mod consts {
    /// Play field in points (portrait phone)
    pub const FIELD_WIDTH: f32 = 390.0;
    pub const FIELD_HEIGHT: f32 = 844.0;

    /// Elapsed milliseconds to simulation dt (0.15 units per 16ms frame)
    pub const SPEED_SCALE: f32 = 0.15 / 16.0;
    /// Per-component velocity limit
    pub const MAX_SPEED: f32 = 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 16.0;
    /// Circle mass is radius * this
    pub const MASS_PER_RADIUS: f32 = 10.0;
    pub const LAUNCH_X: f32 = 100.0;
    pub const LAUNCH_Y: f32 = 450.0;
    pub const LAUNCH_AX: f32 = 0.5;
    pub const LAUNCH_AY: f32 = 1.0;
    /// Circles in the free-bounce scene
    pub const FREE_BOUNCE_BALLS: usize = 6;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 125.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_FLOOR_GAP: f32 = 100.0;

    /// Brick defaults
    pub const TOTAL_BRICKS: usize = 18;
    pub const BRICK_ROW_LENGTH: usize = 3;
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_GAP: f32 = 10.0;
    pub const BRICK_TOP: f32 = 100.0;
}
