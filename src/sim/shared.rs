//! Shared cells between the kernel and the presentation layer
//!
//! Positions are written by the kernel and read by the renderer every paint;
//! the paddle slot is written by the input handler and read by the kernel.
//! Each cell has exactly one writer, so a relaxed atomic holding the `f32`
//! bits is enough: readers always see some complete value, latest wins.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use glam::Vec2;

/// One axis of a body position
#[derive(Debug, Clone, Default)]
pub struct SharedAxis(Arc<AtomicU32>);

impl SharedAxis {
    pub fn new(value: f32) -> Self {
        Self(Arc::new(AtomicU32::new(value.to_bits())))
    }

    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

/// Read-only view of a body position, handed to renderers
#[derive(Debug, Clone)]
pub struct PositionReader {
    x: SharedAxis,
    y: SharedAxis,
}

impl PositionReader {
    pub(crate) fn new(x: &SharedAxis, y: &SharedAxis) -> Self {
        Self {
            x: x.clone(),
            y: y.clone(),
        }
    }

    pub fn x(&self) -> f32 {
        self.x.get()
    }

    pub fn y(&self) -> f32 {
        self.y.get()
    }

    pub fn get(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }
}

/// Boolean cell (brick "can collide" flag)
#[derive(Debug, Clone, Default)]
pub struct SharedFlag(Arc<AtomicBool>);

impl SharedFlag {
    pub fn new(value: bool) -> Self {
        Self(Arc::new(AtomicBool::new(value)))
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set(&self, value: bool) {
        self.0.store(value, Ordering::Relaxed);
    }
}

/// Latest-value-wins slot for the paddle x coordinate
///
/// The input handler calls [`PaddleInput::set_paddle_position`] on every drag
/// delta; the kernel samples the slot once at the start of each tick.
#[derive(Debug, Clone)]
pub struct PaddleInput {
    slot: SharedAxis,
}

impl PaddleInput {
    pub(crate) fn new(x: f32) -> Self {
        Self {
            slot: SharedAxis::new(x),
        }
    }

    /// Request a new paddle x (left edge). Non-finite values are dropped.
    pub fn set_paddle_position(&self, x: f32) {
        if !x.is_finite() {
            log::warn!("Ignoring non-finite paddle position {x}");
            return;
        }
        self.slot.set(x);
    }

    /// Most recently requested paddle x
    pub fn latest(&self) -> f32 {
        self.slot.get()
    }
}
