//! Body model
//!
//! Every simulated shape is a [`Body`]: shared kinematic fields plus a
//! [`Shape`] tag. Algorithms match on the tag instead of downcasting.
//!
//! Coordinates are screen-space: x grows right, y grows down. Circles are
//! positioned by their centre, rectangles (paddle, bricks) by their top-left
//! corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shared::{PaddleInput, PositionReader, SharedAxis, SharedFlag};
use crate::config::LaunchState;
use crate::error::{SimError, positive};

/// Variant tag without payload, handy for dispatch tables and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Circle,
    Paddle,
    Brick,
}

/// Geometry and variant-specific state
#[derive(Debug)]
pub enum Shape {
    /// Free-moving ball with the state it returns to on reset
    Circle { radius: f32, launch: LaunchState },
    /// Player paddle, moved by the input slot rather than the integrator
    Paddle { size: Vec2 },
    /// Static destructible brick; `active` clears on first hit
    Brick { size: Vec2, active: SharedFlag },
}

/// A simulated rigid body
///
/// Not `Clone`: position cells are shared with readers, a clone would alias them.
/// Use [`Body::snapshot`] to capture state.
///
/// Mass and geometry are fixed once the constructor has validated them:
///
/// ```compile_fail
/// use brick_bounce::sim::Body;
/// use glam::Vec2;
///
/// let mut ball = Body::circle(1, Vec2::ZERO, 16.0, 160.0).unwrap();
/// ball.mass = 0.0;
/// ```
#[derive(Debug)]
pub struct Body {
    pub id: u32,
    x: SharedAxis,
    y: SharedAxis,
    pub vel: Vec2,
    pub acc: Vec2,
    mass: f32,
    shape: Shape,
}

impl Body {
    fn with_shape(id: u32, pos: Vec2, mass: f32, shape: Shape) -> Self {
        Self {
            id,
            x: SharedAxis::new(pos.x),
            y: SharedAxis::new(pos.y),
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            mass,
            shape,
        }
    }

    /// Circle at rest at `center`; that position is also its launch state
    /// until [`Body::with_launch`] says otherwise
    pub fn circle(id: u32, center: Vec2, radius: f32, mass: f32) -> Result<Self, SimError> {
        let radius = positive("radius", radius)?;
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass(mass));
        }
        let launch = LaunchState {
            position: center,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
        };
        Ok(Self::with_shape(id, center, mass, Shape::Circle { radius, launch }))
    }

    /// Record the canonical launch state of a circle (does not move it)
    pub fn with_launch(mut self, state: LaunchState) -> Self {
        if let Shape::Circle { launch, .. } = &mut self.shape {
            *launch = state;
        }
        self
    }

    pub fn paddle(id: u32, top_left: Vec2, size: Vec2) -> Result<Self, SimError> {
        let size = Vec2::new(positive("width", size.x)?, positive("height", size.y)?);
        Ok(Self::with_shape(id, top_left, 1.0, Shape::Paddle { size }))
    }

    pub fn brick(id: u32, top_left: Vec2, size: Vec2) -> Result<Self, SimError> {
        let size = Vec2::new(positive("width", size.x)?, positive("height", size.y)?);
        Ok(Self::with_shape(
            id,
            top_left,
            1.0,
            Shape::Brick {
                size,
                active: SharedFlag::new(true),
            },
        ))
    }

    #[inline]
    pub fn kind(&self) -> BodyKind {
        match self.shape {
            Shape::Circle { .. } => BodyKind::Circle,
            Shape::Paddle { .. } => BodyKind::Paddle,
            Shape::Brick { .. } => BodyKind::Brick,
        }
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x.get(), self.y.get())
    }

    #[inline]
    pub fn set_pos(&mut self, pos: Vec2) {
        self.x.set(pos.x);
        self.y.set(pos.y);
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.x.set(x);
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.y.set(y);
    }

    /// Read-only position handle for the renderer
    pub fn reader(&self) -> PositionReader {
        PositionReader::new(&self.x, &self.y)
    }

    /// Circle radius, `None` for rectangles
    pub fn radius(&self) -> Option<f32> {
        match self.shape {
            Shape::Circle { radius, .. } => Some(radius),
            _ => None,
        }
    }

    /// Rectangle size, `None` for circles
    pub fn size(&self) -> Option<Vec2> {
        match self.shape {
            Shape::Paddle { size } | Shape::Brick { size, .. } => Some(size),
            Shape::Circle { .. } => None,
        }
    }

    /// Bricks report their flag; every other body is always collidable
    pub fn is_active(&self) -> bool {
        match &self.shape {
            Shape::Brick { active, .. } => active.get(),
            _ => true,
        }
    }

    /// Flag handle for a brick, so the renderer can hide destroyed bricks
    pub fn active_flag(&self) -> Option<SharedFlag> {
        match &self.shape {
            Shape::Brick { active, .. } => Some(active.clone()),
            _ => None,
        }
    }

    /// Plain-value copy of the body's current state
    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            id: self.id,
            kind: self.kind(),
            pos: self.pos(),
            vel: self.vel,
            acc: self.acc,
            active: self.is_active(),
        }
    }

    /// Put a circle back into its launch state; no-op for rectangles
    pub fn reset_to_launch(&mut self) {
        if let Shape::Circle { launch, .. } = self.shape {
            self.set_pos(launch.position);
            self.vel = launch.velocity;
            self.acc = launch.acceleration;
        }
    }

    /// Round-start state: circles relaunched, bricks reactivated
    pub(crate) fn reset_for_round(&mut self) {
        if let Shape::Brick { active, .. } = &self.shape {
            active.set(true);
        }
        self.reset_to_launch();
    }
}

/// Detached copy of a body's observable state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub id: u32,
    pub kind: BodyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub active: bool,
}

/// Ordered body list plus the paddle input slot
///
/// Order is insertion order and is the order the collision detector walks.
#[derive(Debug)]
pub struct Bodies {
    bodies: Vec<Body>,
    paddle_input: PaddleInput,
    next_id: u32,
}

impl Default for Bodies {
    fn default() -> Self {
        Self::new()
    }
}

impl Bodies {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            paddle_input: PaddleInput::new(0.0),
            next_id: 1,
        }
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a circle already placed in its launch state
    pub fn add_circle(&mut self, launch: LaunchState, radius: f32, mass: f32) -> Result<u32, SimError> {
        let id = self.next_entity_id();
        let mut body = Body::circle(id, launch.position, radius, mass)?.with_launch(launch);
        body.reset_to_launch();
        self.bodies.push(body);
        Ok(id)
    }

    /// Add the paddle; the input slot starts at its x
    pub fn add_paddle(&mut self, top_left: Vec2, size: Vec2) -> Result<u32, SimError> {
        let id = self.next_entity_id();
        self.bodies.push(Body::paddle(id, top_left, size)?);
        self.paddle_input.set_paddle_position(top_left.x);
        Ok(id)
    }

    pub fn add_brick(&mut self, top_left: Vec2, size: Vec2) -> Result<u32, SimError> {
        let id = self.next_entity_id();
        self.bodies.push(Body::brick(id, top_left, size)?);
        Ok(id)
    }

    /// Handle for the presentation layer's drag handler
    pub fn paddle_input(&self) -> PaddleInput {
        self.paddle_input.clone()
    }

    /// Copy the latest requested paddle x onto every paddle body
    pub(crate) fn apply_paddle_input(&mut self) {
        let x = self.paddle_input.latest();
        for body in self.bodies.iter_mut().filter(|b| b.kind() == BodyKind::Paddle) {
            body.set_x(x);
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn get(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn circles(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.kind() == BodyKind::Circle)
    }

    pub fn bricks(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.kind() == BodyKind::Brick)
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(Body::snapshot).collect()
    }

    pub fn brick_count(&self) -> usize {
        self.bricks().count()
    }

    pub fn active_brick_count(&self) -> usize {
        self.bricks().filter(|b| b.is_active()).count()
    }
}

/// Two distinct mutable bodies out of one slice
///
/// `None` when the indices are equal or either is out of range.
pub(crate) fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> Option<(&mut Body, &mut Body)> {
    if i == j || i.max(j) >= bodies.len() {
        return None;
    }
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        Some((&mut head[i], &mut tail[0]))
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        Some((&mut tail[0], &mut head[j]))
    }
}
