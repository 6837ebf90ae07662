//! Collision shapes for 2D physics
//!
//! Lightweight primitives used for contact detection. Every shape stores its
//! absolute world position so it can be tested without the owning body.

use arkanoid_math::Vec2;

/// A circle defined by center and radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Create a new circle at the given center with the given radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// A 2D axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2D {
    /// Minimum corner
    pub min: Vec2,
    /// Maximum corner
    pub max: Vec2,
}

impl Aabb2D {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents (half the size in each dimension)
    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Get the closest point inside or on the AABB to a given point
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp_components(self.min, self.max)
    }

    /// Translate the AABB by a delta
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

/// Collider enum for storing different collision shape types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
    Circle(Circle),
    Aabb(Aabb2D),
}

impl Collider {
    /// Get the center of the collider
    pub fn center(&self) -> Vec2 {
        match self {
            Collider::Circle(c) => c.center,
            Collider::Aabb(b) => b.center(),
        }
    }

    /// Translate the collider by a delta
    pub fn translated(&self, delta: Vec2) -> Self {
        match self {
            Collider::Circle(c) => Collider::Circle(Circle::new(c.center + delta, c.radius)),
            Collider::Aabb(b) => Collider::Aabb(b.translated(delta)),
        }
    }
}
