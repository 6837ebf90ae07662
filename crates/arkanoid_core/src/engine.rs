//! Seams to the collaborators the registry does not implement
//!
//! - [`PhysicsEngine`] - creates bodies, steps the simulation and reports
//!   contact-begin events
//! - [`HitListener`] - game logic that reacts to the ball hitting things

use arkanoid_math::Vec2;

use crate::location::PhysicsLocation;
use crate::object::ObjectName;

/// Opaque reference to a body owned by the engine
///
/// Only the engine that issued a handle can interpret it. The registry
/// copies handles around but never dereferences them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EngineHandle(u64);

impl EngineHandle {
    /// Wrap an engine-specific id
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The engine-specific id
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Collision geometry of a new body
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeDesc {
    Circle { radius: f32 },
    Box { half_width: f32, half_height: f32 },
}

/// How the engine drives a body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyMotion {
    /// Never moves
    Static,
    /// Moved only by explicit position/velocity changes
    Kinematic,
    /// Integrated and pushed by contacts
    Dynamic,
}

/// Construction parameters handed to [`PhysicsEngine::create_body`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDesc {
    pub shape: ShapeDesc,
    pub motion: BodyMotion,
    pub location: PhysicsLocation,
}

/// A physics engine the registry can drive
///
/// All calls happen on one thread. `step` must invoke `on_contact`
/// synchronously, once per pair of bodies that started touching during
/// the step, before it returns.
pub trait PhysicsEngine {
    /// Create a body and return its handle
    fn create_body(&mut self, desc: &BodyDesc) -> EngineHandle;

    /// Destroy a body. Unknown handles are ignored.
    fn destroy_body(&mut self, handle: EngineHandle);

    /// Advance the simulation by `dt` seconds
    fn step(&mut self, dt: f32, on_contact: &mut dyn FnMut(EngineHandle, EngineHandle));

    /// Current location of a body
    fn location(&self, handle: EngineHandle) -> Option<PhysicsLocation>;

    /// Teleport a body
    fn set_location(&mut self, handle: EngineHandle, location: PhysicsLocation);

    /// Current velocity of a body
    fn velocity(&self, handle: EngineHandle) -> Option<Vec2>;

    /// Set the velocity of a body
    fn set_velocity(&mut self, handle: EngineHandle, velocity: Vec2);
}

/// Game logic notified when the ball touches something
///
/// Scoring, brick bookkeeping and sound live behind this trait; the
/// registry only forwards names.
pub trait HitListener {
    /// The ball hit a brick
    fn on_brick_hit(&mut self, brick: &ObjectName);

    /// The ball hit the paddle
    fn on_paddle_hit(&mut self, paddle: &ObjectName);

    /// The ball hit a wall
    fn on_wall_hit(&mut self, _wall: &ObjectName) {}
}

impl HitListener for () {
    fn on_brick_hit(&mut self, _brick: &ObjectName) {}
    fn on_paddle_hit(&mut self, _paddle: &ObjectName) {}
}
