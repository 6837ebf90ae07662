//! Core types for the Arkanoid physics registry
//!
//! This crate keeps track of every simulated object by name and drives a
//! physics engine on their behalf:
//!
//! - [`ObjectRegistry`] - Named records, per-frame update, game operations
//! - [`PhysicsObjectRecord`] - One registered object
//! - [`PhysicsLocation`] - Position and rotation
//! - [`ObjectKind`] / [`ObjectName`] - What an object is and what it's called
//! - [`PhysicsEngine`] / [`HitListener`] - Collaborator seams
//! - [`GameLayout`] - Playfield geometry
//!
//! [`PhysicsEngine`] is implemented for [`arkanoid_physics::PhysicsWorld`].

mod backend;
mod engine;
mod error;
mod layout;
mod location;
mod object;
mod registry;

pub use engine::{BodyDesc, BodyMotion, EngineHandle, HitListener, PhysicsEngine, ShapeDesc};
pub use error::RegistryError;
pub use layout::{BallConfig, BrickGrid, GameLayout, PaddleConfig, WallConfig};
pub use location::PhysicsLocation;
pub use object::{ObjectKind, ObjectName, PhysicsObjectRecord};
pub use registry::ObjectRegistry;

// Re-export the bundled engine for convenient access through arkanoid_core
pub use arkanoid_physics::{PhysicsConfig, PhysicsWorld};
