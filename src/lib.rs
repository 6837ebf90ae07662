//! Arkanoid: a physics object registry and the game rules around it
//!
//! The registry itself lives in `arkanoid_core`. This crate adds layered
//! configuration and a [`session::GameSession`] that keeps score.

pub mod config;
pub mod session;
