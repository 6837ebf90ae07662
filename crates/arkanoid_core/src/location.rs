//! Location of an object in the playfield

use arkanoid_math::Vec2;
use serde::{Serialize, Deserialize};

/// Position and rotation of a physics object
///
/// `x`/`y` are world units, `theta` is radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicsLocation {
    pub x: f32,
    pub y: f32,
    pub theta: f32,
}

impl PhysicsLocation {
    /// Create a new location
    pub const fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Unrotated location at a point
    pub const fn at(position: Vec2) -> Self {
        Self::new(position.x, position.y, 0.0)
    }

    /// The x/y part as a vector
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Same location with a different x
    pub fn with_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    /// True if every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.theta.is_finite()
    }
}

impl From<Vec2> for PhysicsLocation {
    fn from(position: Vec2) -> Self {
        Self::at(position)
    }
}
