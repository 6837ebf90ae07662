//! 2D physics simulation for the Arkanoid registry
//!
//! This crate is the engine the object registry drives. It provides:
//! - Collision shapes (circles, AABBs)
//! - Contact detection and contact-begin events
//! - Static, kinematic and dynamic rigid bodies
//! - Surface materials for bounce response

pub mod body;
pub mod collision;
pub mod material;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{BodyKey, BodyType, RigidBody2D};
pub use collision::{aabb_vs_aabb, circle_vs_aabb, circle_vs_circle, collide, Contact};
pub use material::PhysicsMaterial;
pub use shapes::{Aabb2D, Circle, Collider};
pub use world::{ContactEvent, PhysicsConfig, PhysicsWorld};
