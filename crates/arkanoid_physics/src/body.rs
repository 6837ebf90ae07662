//! Rigid body types for 2D physics simulation

use crate::material::PhysicsMaterial;
use crate::shapes::{Aabb2D, Circle, Collider};
use arkanoid_math::Vec2;
use slotmap::new_key_type;

// Define generational key type for rigid bodies
new_key_type! {
    /// Key to a rigid body in the physics world
    ///
    /// Uses generational indexing so a key to a destroyed body never aliases
    /// a body created later in the same slot.
    pub struct BodyKey;
}

/// How a body participates in the simulation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BodyType {
    /// Never moves (bricks, walls)
    #[default]
    Static,
    /// Moves only when driven by position or velocity (the paddle)
    Kinematic,
    /// Integrated and pushed by contacts (the ball)
    Dynamic,
}

/// A 2D rigid body with position, velocity, and collision shape
#[derive(Clone, Debug)]
pub struct RigidBody2D {
    /// Position of the body center (world coordinates)
    pub position: Vec2,
    /// Rotation in radians. Carried through for callers; contacts ignore it.
    pub rotation: f32,
    /// Velocity (units per second)
    pub velocity: Vec2,
    /// Mass of the body (used to split corrections between dynamic bodies)
    pub mass: f32,
    /// Surface material
    pub material: PhysicsMaterial,
    /// Whether this body is affected by gravity
    pub affected_by_gravity: bool,
    /// The collision shape for this body (stores absolute world position)
    pub collider: Collider,
    /// Simulation role
    pub body_type: BodyType,
}

impl RigidBody2D {
    fn with_collider(position: Vec2, collider: Collider) -> Self {
        Self {
            position,
            rotation: 0.0,
            velocity: Vec2::ZERO,
            mass: 1.0,
            material: PhysicsMaterial::default(),
            affected_by_gravity: false,
            collider,
            body_type: BodyType::Dynamic,
        }
    }

    /// Create a new dynamic body with a circle collider
    pub fn new_circle(position: Vec2, radius: f32) -> Self {
        Self::with_collider(position, Collider::Circle(Circle::new(position, radius)))
    }

    /// Create a new dynamic body with a box collider
    pub fn new_box(position: Vec2, half_extents: Vec2) -> Self {
        Self::with_collider(
            position,
            Collider::Aabb(Aabb2D::from_center_half_extents(position, half_extents)),
        )
    }

    /// Set the simulation role of this body
    pub fn with_body_type(mut self, body_type: BodyType) -> Self {
        self.body_type = body_type;
        if body_type != BodyType::Dynamic {
            self.affected_by_gravity = false;
        }
        self
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the rotation of this body
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the surface material of this body
    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    /// Set whether this body is affected by gravity (dynamic bodies only)
    pub fn with_gravity(mut self, affected: bool) -> Self {
        self.affected_by_gravity = affected && self.is_dynamic();
        self
    }

    /// Whether contacts and integration move this body
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.body_type == BodyType::Dynamic
    }

    /// Whether this body never moves
    #[inline]
    pub fn is_static(&self) -> bool {
        self.body_type == BodyType::Static
    }

    /// Update the position and sync the collider
    pub fn set_position(&mut self, position: Vec2) {
        let delta = position - self.position;
        self.position = position;
        self.collider = self.collider.translated(delta);
    }

    /// Apply a positional correction (e.g., from collision resolution)
    pub fn apply_correction(&mut self, correction: Vec2) {
        self.position += correction;
        self.collider = self.collider.translated(correction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_circle_body() {
        let pos = Vec2::new(1.0, 2.0);
        let body = RigidBody2D::new_circle(pos, 0.5);

        assert_eq!(body.position, pos);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.rotation, 0.0);
        assert!(body.is_dynamic());
        assert!(!body.affected_by_gravity);
        assert_eq!(body.collider.center(), pos);
    }

    #[test]
    fn test_static_box_body() {
        let body = RigidBody2D::new_box(Vec2::ZERO, Vec2::new(5.0, 2.5))
            .with_gravity(true)
            .with_body_type(BodyType::Static);

        assert!(body.is_static());
        assert!(!body.affected_by_gravity);
    }

    #[test]
    fn test_gravity_only_for_dynamic_bodies() {
        let body = RigidBody2D::new_box(Vec2::ZERO, Vec2::new(1.0, 1.0))
            .with_body_type(BodyType::Kinematic)
            .with_gravity(true);
        assert!(!body.affected_by_gravity);

        let ball = RigidBody2D::new_circle(Vec2::ZERO, 1.0).with_gravity(true);
        assert!(ball.affected_by_gravity);
    }

    #[test]
    fn test_builder_methods() {
        let body = RigidBody2D::new_circle(Vec2::ZERO, 1.0)
            .with_velocity(Vec2::new(1.0, 2.0))
            .with_rotation(0.5)
            .with_material(PhysicsMaterial::DEAD);

        assert_eq!(body.velocity, Vec2::new(1.0, 2.0));
        assert_eq!(body.rotation, 0.5);
        assert_eq!(body.mass, 1.0);
        assert_eq!(body.material, PhysicsMaterial::DEAD);
    }

    #[test]
    fn test_set_position_moves_collider() {
        let mut body = RigidBody2D::new_box(Vec2::ZERO, Vec2::new(10.0, 2.5));
        body.set_position(Vec2::new(12.5, 0.0));

        assert_eq!(body.position, Vec2::new(12.5, 0.0));
        assert_eq!(body.collider.center(), Vec2::new(12.5, 0.0));
    }

    #[test]
    fn test_apply_correction() {
        let mut body = RigidBody2D::new_circle(Vec2::new(1.0, 0.0), 1.0);
        body.apply_correction(Vec2::new(0.0, 0.5));

        assert_eq!(body.position, Vec2::new(1.0, 0.5));
        assert_eq!(body.collider.center(), Vec2::new(1.0, 0.5));
    }
}
