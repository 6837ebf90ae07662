//! Physics world and simulation

use std::collections::HashSet;

use crate::body::{BodyKey, RigidBody2D};
use crate::collision::{collide, Contact};
use arkanoid_math::Vec2;
use slotmap::SlotMap;

/// Upper bound on substeps per `step` call
const MAX_SUBSTEPS: u32 = 64;

/// Configuration for the physics simulation
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Gravity acceleration applied to dynamic bodies that opt in
    pub gravity: Vec2,
    /// Longest integration step; `step(dt)` is split into pieces no longer than this
    pub max_substep: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::ZERO,
            max_substep: 1.0 / 240.0,
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Set the longest integration step
    pub fn with_max_substep(mut self, max_substep: f32) -> Self {
        self.max_substep = max_substep;
        self
    }
}

/// Two bodies that started touching during the last step
///
/// `a` is always the key that orders first, so a pair is reported once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContactEvent {
    pub a: BodyKey,
    pub b: BodyKey,
}

impl ContactEvent {
    fn new(x: BodyKey, y: BodyKey) -> Self {
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    /// Whether this event involves the given body
    pub fn involves(&self, key: BodyKey) -> bool {
        self.a == key || self.b == key
    }
}

/// The physics world containing all rigid bodies
pub struct PhysicsWorld {
    /// All rigid bodies in the world (using generational keys)
    bodies: SlotMap<BodyKey, RigidBody2D>,
    /// Pairs in contact at the end of the previous step
    touching: HashSet<ContactEvent>,
    /// Contact-begin events produced by the last step, in detection order
    events: Vec<ContactEvent>,
    /// Physics configuration
    pub config: PhysicsConfig,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            touching: HashSet::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Add a body to the world and return its key
    pub fn add_body(&mut self, body: RigidBody2D) -> BodyKey {
        self.bodies.insert(body)
    }

    /// Remove a body from the world and return it
    pub fn remove_body(&mut self, key: BodyKey) -> Option<RigidBody2D> {
        self.touching.retain(|pair| !pair.involves(key));
        self.events.retain(|pair| !pair.involves(key));
        self.bodies.remove(key)
    }

    /// Get an immutable reference to a body by key
    pub fn get_body(&self, key: BodyKey) -> Option<&RigidBody2D> {
        self.bodies.get(key)
    }

    /// Get a mutable reference to a body by key
    pub fn get_body_mut(&mut self, key: BodyKey) -> Option<&mut RigidBody2D> {
        self.bodies.get_mut(key)
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Iterate over all body keys
    pub fn body_keys(&self) -> impl Iterator<Item = BodyKey> + '_ {
        self.bodies.keys()
    }

    /// Contact-begin events produced by the most recent `step`
    pub fn contact_events(&self) -> &[ContactEvent] {
        &self.events
    }

    /// Step the physics simulation forward by dt seconds
    ///
    /// The step is split into substeps of at most `config.max_substep`. Each
    /// substep integrates velocities and then resolves contacts. Afterwards
    /// every pair that is touching now but was not touching at the end of the
    /// previous step is reported through `contact_events`.
    ///
    /// A zero or negative `dt` does nothing and keeps the contact state.
    pub fn step(&mut self, dt: f32) {
        self.events.clear();
        if !(dt > 0.0) {
            return;
        }

        let substeps = if self.config.max_substep > 0.0 {
            ((dt / self.config.max_substep).ceil() as u32).clamp(1, MAX_SUBSTEPS)
        } else {
            1
        };
        let h = dt / substeps as f32;

        let mut touching_now = HashSet::new();
        let mut order = Vec::new();

        for _ in 0..substeps {
            self.integrate(h);
            self.resolve_contacts(&mut touching_now, &mut order);
        }

        self.events = order
            .into_iter()
            .filter(|pair| !self.touching.contains(pair))
            .collect();
        self.touching = touching_now;
    }

    /// Integrate velocity into position for every non-static body
    fn integrate(&mut self, h: f32) {
        let gravity = self.config.gravity;
        for (_key, body) in &mut self.bodies {
            if body.is_static() {
                continue;
            }

            if body.affected_by_gravity {
                body.velocity += gravity * h;
            }

            let displacement = body.velocity * h;
            body.position += displacement;
            body.collider = body.collider.translated(displacement);
        }
    }

    /// Detect and resolve every pair that involves at least one dynamic body
    fn resolve_contacts(&mut self, touching: &mut HashSet<ContactEvent>, order: &mut Vec<ContactEvent>) {
        // Collect all keys first (needed because we can't iterate and mutate)
        let keys: Vec<BodyKey> = self.bodies.keys().collect();

        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                let key_a = keys[i];
                let key_b = keys[j];

                let (collider_a, collider_b, dynamic_a, dynamic_b) = {
                    let body_a = &self.bodies[key_a];
                    let body_b = &self.bodies[key_b];
                    (body_a.collider, body_b.collider, body_a.is_dynamic(), body_b.is_dynamic())
                };

                if !dynamic_a && !dynamic_b {
                    continue;
                }

                // Normal points from A toward B
                let Some(contact) = collide(&collider_a, &collider_b) else {
                    continue;
                };
                if !contact.is_colliding() {
                    continue;
                }

                let pair = ContactEvent::new(key_a, key_b);
                if touching.insert(pair) {
                    order.push(pair);
                }

                self.resolve_pair(key_a, key_b, &contact, dynamic_a, dynamic_b);
            }
        }
    }

    /// Resolve collision between two specific bodies
    fn resolve_pair(&mut self, key_a: BodyKey, key_b: BodyKey, contact: &Contact, dynamic_a: bool, dynamic_b: bool) {
        // Split the positional correction
        let (correction_a, correction_b) = if !dynamic_a {
            (Vec2::ZERO, contact.normal * contact.penetration)
        } else if !dynamic_b {
            (-contact.normal * contact.penetration, Vec2::ZERO)
        } else {
            let mass_a = self.bodies[key_a].mass;
            let mass_b = self.bodies[key_b].mass;
            let total_mass = mass_a + mass_b;

            (
                -contact.normal * contact.penetration * (mass_b / total_mass),
                contact.normal * contact.penetration * (mass_a / total_mass),
            )
        };

        let combined = self.bodies[key_a].material.combine(&self.bodies[key_b].material);

        if dynamic_a {
            let body = &mut self.bodies[key_a];
            body.apply_correction(correction_a);
            body.velocity = bounce(body.velocity, -contact.normal, combined.restitution, combined.friction);
        }
        if dynamic_b {
            let body = &mut self.bodies[key_b];
            body.apply_correction(correction_b);
            body.velocity = bounce(body.velocity, contact.normal, combined.restitution, combined.friction);
        }
    }
}

/// Velocity response for a body pushed along `away` (unit normal pointing out of the other body)
fn bounce(velocity: Vec2, away: Vec2, restitution: f32, friction: f32) -> Vec2 {
    let along = velocity.dot(away);
    if along >= 0.0 {
        // Already separating
        return velocity;
    }

    let normal_velocity = away * along;
    let tangent_velocity = velocity - normal_velocity;

    tangent_velocity * (1.0 - friction) - normal_velocity * restitution
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
