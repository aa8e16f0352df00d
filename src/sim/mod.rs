//! Physics and collision kernel
//!
//! Everything that runs inside a frame lives here. The kernel is synchronous
//! and single-threaded:
//! - Bodies are walked in insertion order
//! - Collisions are resolved in detection order
//! - No rendering or platform dependencies

pub mod body;
pub mod boundary;
pub mod collision;
pub mod integrate;
pub mod layout;
pub mod resolve;
pub mod round;
pub mod shared;
pub mod tick;

pub use body::{Bodies, Body, BodyKind, BodySnapshot, Shape};
pub use boundary::resolve_wall_collision;
pub use collision::{
    Collision, DetectionPass, check_collision, circle_circle_overlap, circle_rect_overlap,
    detect_collisions,
};
pub use integrate::integrate;
pub use layout::{brick_grid, build_breakout, build_free_bounce, build_round};
pub use resolve::{resolve_collision, resolve_collisions, resolve_elastic};
pub use round::{RoundPhase, RoundState, TerminalSignal};
pub use shared::{PaddleInput, PositionReader, SharedAxis, SharedFlag};
pub use tick::{Simulation, advance, reset_round};
