//! Surface response of bodies

/// How a body's surface treats an incoming velocity
///
/// `friction` is the share of tangential speed a contact removes and
/// `restitution` the share of normal speed it gives back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsMaterial {
    pub friction: f32,
    pub restitution: f32,
}

impl PhysicsMaterial {
    /// Perfectly elastic, frictionless: the ball keeps its speed forever
    pub const ELASTIC: Self = Self {
        friction: 0.0,
        restitution: 1.0,
    };

    /// Absorbs the normal component of velocity on contact
    pub const DEAD: Self = Self {
        friction: 0.0,
        restitution: 0.0,
    };

    /// Both factors are clamped into `0..=1`
    pub fn new(friction: f32, restitution: f32) -> Self {
        Self {
            friction: f32::clamp(friction, 0.0, 1.0),
            restitution: f32::clamp(restitution, 0.0, 1.0),
        }
    }

    /// Material used for a contact between two surfaces
    ///
    /// Friction is the geometric mean; the bouncier surface sets restitution.
    pub fn combine(&self, other: &Self) -> Self {
        let friction = (self.friction * other.friction).sqrt();
        Self {
            friction,
            restitution: f32::max(self.restitution, other.restitution),
        }
    }
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self::ELASTIC
    }
}
