//! 2D Mathematics Library
//!
//! Small value types shared by the physics backend and the object registry.
//!
//! - [`Vec2`] - 2D vector with x, y components

mod vec2;

pub use vec2::Vec2;
