//! Physics object records and their identifiers

use std::borrow::Borrow;
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::engine::{BodyMotion, EngineHandle};
use crate::location::PhysicsLocation;

/// What a physics object is in the game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Brick,
    Ball,
    Paddle,
    WallNorth,
    WallSides,
}

impl ObjectKind {
    /// True for the playfield boundaries
    pub fn is_wall(self) -> bool {
        matches!(self, ObjectKind::WallNorth | ObjectKind::WallSides)
    }

    /// How the engine should simulate a body of this kind
    pub fn motion(self) -> BodyMotion {
        match self {
            ObjectKind::Ball => BodyMotion::Dynamic,
            ObjectKind::Paddle => BodyMotion::Kinematic,
            ObjectKind::Brick | ObjectKind::WallNorth | ObjectKind::WallSides => BodyMotion::Static,
        }
    }
}

/// Identifier of a physics object, unique within a registry
///
/// Hashes and compares like the `str` it wraps, so maps keyed by
/// `ObjectName` can be queried with a plain `&str`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectName(String);

impl ObjectName {
    /// Name the registry gives the ball
    pub const BALL: &'static str = "ball";
    /// Name the registry gives the paddle
    pub const PADDLE: &'static str = "paddle";
    /// Name of the top wall
    pub const WALL_NORTH: &'static str = "wall_north";
    /// Name of the left wall
    pub const WALL_WEST: &'static str = "wall_west";
    /// Name of the right wall
    pub const WALL_EAST: &'static str = "wall_east";

    /// Create a name from any string
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Deterministic name of the brick at a grid cell
    pub fn brick(row: u32, col: u32) -> Self {
        Self(format!("brick_{}_{}", row, col))
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the name has no characters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ObjectName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ObjectName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for ObjectName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ObjectName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One simulated entity as the registry sees it
///
/// The engine owns the body behind `handle`; the record only mirrors it.
/// `name` and `kind` never change after registration, `location` is
/// refreshed from the engine every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsObjectRecord {
    pub(crate) location: PhysicsLocation,
    kind: ObjectKind,
    handle: EngineHandle,
    name: ObjectName,
}

impl PhysicsObjectRecord {
    pub(crate) fn new(name: ObjectName, kind: ObjectKind, location: PhysicsLocation, handle: EngineHandle) -> Self {
        Self {
            location,
            kind,
            handle,
            name,
        }
    }

    /// Last known location
    pub fn location(&self) -> PhysicsLocation {
        self.location
    }

    /// Kind of object
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Engine body this record mirrors
    pub fn handle(&self) -> EngineHandle {
        self.handle
    }

    /// Identifier within the registry
    pub fn name(&self) -> &ObjectName {
        &self.name
    }
}
