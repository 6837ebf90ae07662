//! Named registry of physics objects
//!
//! The [`ObjectRegistry`] owns one record per simulated entity, keyed by
//! name. It drives a [`PhysicsEngine`] for everything that moves and routes
//! the engine's contact events to a [`HitListener`] by name.
//!
//! # Example
//! ```ignore
//! let mut registry = ObjectRegistry::new(PhysicsWorld::new(), (), GameLayout::default());
//! registry.reset()?;
//! registry.launch_ball()?;
//!
//! // Game loop
//! registry.advance(dt)?;
//! let ball = registry.lookup(ObjectName::BALL)?.location();
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use arkanoid_math::Vec2;

use crate::engine::{BodyDesc, EngineHandle, HitListener, PhysicsEngine};
use crate::error::RegistryError;
use crate::layout::GameLayout;
use crate::location::PhysicsLocation;
use crate::object::{ObjectKind, ObjectName, PhysicsObjectRecord};

/// Registry of physics objects
///
/// Generic over the engine it drives and the listener that receives hit
/// notifications. The listener is handed over at construction and is the
/// only route from engine contacts back to game logic.
pub struct ObjectRegistry<E: PhysicsEngine, L: HitListener = ()> {
    engine: E,
    listener: L,
    layout: GameLayout,
    /// Records by name
    objects: HashMap<ObjectName, PhysicsObjectRecord>,
    /// Reverse map for routing engine contacts
    by_handle: HashMap<EngineHandle, ObjectName>,
}

impl<E: PhysicsEngine, L: HitListener> ObjectRegistry<E, L> {
    /// Create an empty registry
    ///
    /// Call [`reset`](Self::reset) to populate the default layout.
    pub fn new(engine: E, listener: L, layout: GameLayout) -> Self {
        Self {
            engine,
            listener,
            layout,
            objects: HashMap::new(),
            by_handle: HashMap::new(),
        }
    }

    // --- Registration and lookup ---

    /// Register an object, creating its body in the engine
    ///
    /// Registering a name that is already taken replaces the old record and
    /// destroys the old body.
    pub fn register(
        &mut self,
        name: impl Into<ObjectName>,
        kind: ObjectKind,
        location: PhysicsLocation,
    ) -> Result<&PhysicsObjectRecord, RegistryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::InvalidName);
        }
        if !location.is_finite() {
            return Err(RegistryError::InvalidLocation(name.to_string()));
        }
        self.layout.validate()?;

        let handle = self.engine.create_body(&BodyDesc {
            shape: self.layout.shape_for(kind),
            motion: kind.motion(),
            location,
        });
        self.by_handle.insert(handle, name.clone());
        let record = PhysicsObjectRecord::new(name.clone(), kind, location, handle);

        match self.objects.entry(name) {
            Entry::Occupied(mut entry) => {
                let old = entry.insert(record);
                log::warn!("Replaced existing object '{}' ({:?} -> {:?})", old.name(), old.kind(), kind);
                self.by_handle.remove(&old.handle());
                self.engine.destroy_body(old.handle());
                Ok(&*entry.into_mut())
            }
            Entry::Vacant(entry) => {
                log::debug!("Registered {:?} '{}' at ({}, {})", kind, entry.key(), location.x, location.y);
                Ok(&*entry.insert(record))
            }
        }
    }

    /// Look up an object by name
    pub fn lookup(&self, name: &str) -> Result<&PhysicsObjectRecord, RegistryError> {
        self.objects
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Whether an object is registered under the name
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the registry holds no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of registered objects of one kind
    pub fn kind_count(&self, kind: ObjectKind) -> usize {
        self.objects.values().filter(|r| r.kind() == kind).count()
    }

    /// Iterate over all records (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &PhysicsObjectRecord> {
        self.objects.values()
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&ObjectName> {
        let mut names: Vec<_> = self.objects.keys().collect();
        names.sort();
        names
    }

    // --- Per-frame update ---

    /// Step the engine by `dt` seconds and refresh every record's location
    ///
    /// Contacts the engine reports during the step are routed to the
    /// listener before locations are refreshed.
    pub fn advance(&mut self, dt: f32) -> Result<(), RegistryError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(RegistryError::InvalidTimeStep(dt));
        }

        let Self {
            engine,
            listener,
            objects,
            by_handle,
            ..
        } = self;

        engine.step(dt, &mut |a, b| route_contact(objects, by_handle, listener, a, b));

        for record in objects.values_mut() {
            match engine.location(record.handle()) {
                Some(location) => record.location = location,
                None => log::warn!("Engine lost the body of '{}'", record.name()),
            }
        }

        Ok(())
    }

    // --- Ball and paddle ---

    /// Give the ball its launch velocity
    pub fn launch_ball(&mut self) -> Result<(), RegistryError> {
        let handle = self.lookup(ObjectName::BALL)?.handle();
        let velocity = self.layout.ball.launch_velocity();
        self.engine.set_velocity(handle, velocity);
        log::debug!("Launched ball with velocity ({}, {})", velocity.x, velocity.y);
        Ok(())
    }

    /// Put the ball back on its spawn point at rest
    ///
    /// Only the ball is touched.
    pub fn reset_ball(&mut self) -> Result<(), RegistryError> {
        let location = PhysicsLocation::at(Vec2::from_array(self.layout.ball.spawn));
        let record = self
            .objects
            .get_mut(ObjectName::BALL)
            .ok_or_else(|| RegistryError::NotFound(ObjectName::BALL.to_string()))?;

        self.engine.set_location(record.handle(), location);
        self.engine.set_velocity(record.handle(), Vec2::ZERO);
        record.location = location;
        log::debug!("Ball reset to ({}, {})", location.x, location.y);
        Ok(())
    }

    /// Current ball velocity as the engine reports it
    pub fn ball_velocity(&self) -> Result<Vec2, RegistryError> {
        let handle = self.lookup(ObjectName::BALL)?.handle();
        self.engine
            .velocity(handle)
            .ok_or_else(|| RegistryError::NotFound(ObjectName::BALL.to_string()))
    }

    /// Move the paddle horizontally, keeping its y and rotation
    pub fn move_paddle_x(&mut self, x: f32) -> Result<(), RegistryError> {
        let record = self
            .objects
            .get_mut(ObjectName::PADDLE)
            .ok_or_else(|| RegistryError::NotFound(ObjectName::PADDLE.to_string()))?;
        if !x.is_finite() {
            return Err(RegistryError::InvalidLocation(ObjectName::PADDLE.to_string()));
        }

        let location = record.location.with_x(x);
        self.engine.set_location(record.handle(), location);
        record.location = location;
        Ok(())
    }

    // --- Bulk resets ---

    /// Rebuild the brick field at its initial layout
    ///
    /// The layout is checked before anything is destroyed. Every brick is destroyed, then `rows x cols` fresh bricks are
    /// registered under `brick_{row}_{col}`. Other objects are untouched.
    pub fn reset_bricks(&mut self) -> Result<(), RegistryError> {
        self.layout.validate()?;
        self.remove_where(|record| record.kind() == ObjectKind::Brick);

        let grid = self.layout.brick.clone();
        for (row, col, position) in grid.cells() {
            self.register(ObjectName::brick(row, col), ObjectKind::Brick, position.into())?;
        }

        log::debug!("Brick field reset: {} bricks", grid.count());
        Ok(())
    }

    /// Clear everything and build the default layout
    ///
    /// Registers the walls (if configured), the paddle, the ball and the
    /// brick grid.
    pub fn reset(&mut self) -> Result<(), RegistryError> {
        self.layout.validate()?;
        self.remove_where(|_| true);

        if let Some(walls) = self.layout.walls.clone() {
            self.register(ObjectName::WALL_NORTH, ObjectKind::WallNorth, Vec2::from(walls.north_position).into())?;
            self.register(ObjectName::WALL_WEST, ObjectKind::WallSides, Vec2::from(walls.west_position).into())?;
            self.register(ObjectName::WALL_EAST, ObjectKind::WallSides, Vec2::from(walls.east_position).into())?;
        }

        let paddle_spawn = Vec2::from(self.layout.paddle.spawn);
        let ball_spawn = Vec2::from(self.layout.ball.spawn);
        self.register(ObjectName::PADDLE, ObjectKind::Paddle, paddle_spawn.into())?;
        self.register(ObjectName::BALL, ObjectKind::Ball, ball_spawn.into())?;
        self.reset_bricks()?;

        log::info!("World reset: {} objects", self.objects.len());
        Ok(())
    }

    /// Drop matching records and destroy their bodies
    fn remove_where(&mut self, mut pred: impl FnMut(&PhysicsObjectRecord) -> bool) {
        let doomed: Vec<ObjectName> = self
            .objects
            .values()
            .filter(|record| pred(record))
            .map(|record| record.name().clone())
            .collect();

        for name in doomed {
            if let Some(record) = self.objects.remove(&name) {
                self.by_handle.remove(&record.handle());
                self.engine.destroy_body(record.handle());
            }
        }
    }

    // --- Hit notifications ---

    /// Tell the listener the ball hit a brick
    pub fn register_hit(&mut self, name: &str) {
        self.listener.on_brick_hit(&ObjectName::from(name));
    }

    /// Tell the listener the ball hit the paddle
    pub fn register_paddle_hit(&mut self, name: &str) {
        self.listener.on_paddle_hit(&ObjectName::from(name));
    }

    // --- Accessors ---

    /// Playfield geometry this registry builds from
    pub fn layout(&self) -> &GameLayout {
        &self.layout
    }

    /// The engine being driven
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The hit listener
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the hit listener
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}

/// Forward a contact-begin event to the listener when the ball is involved
fn route_contact<L: HitListener>(
    objects: &HashMap<ObjectName, PhysicsObjectRecord>,
    by_handle: &HashMap<EngineHandle, ObjectName>,
    listener: &mut L,
    a: EngineHandle,
    b: EngineHandle,
) {
    let kind_of = |handle: EngineHandle| {
        by_handle
            .get(&handle)
            .and_then(|name| objects.get(name))
            .map(|record| (record.kind(), record.name()))
    };

    let (Some(first), Some(second)) = (kind_of(a), kind_of(b)) else {
        log::trace!("Ignoring contact with an unregistered body");
        return;
    };

    let (other_kind, other_name) = match (first, second) {
        ((ObjectKind::Ball, _), other) | (other, (ObjectKind::Ball, _)) => other,
        _ => return,
    };

    match other_kind {
        ObjectKind::Brick => listener.on_brick_hit(other_name),
        ObjectKind::Paddle => listener.on_paddle_hit(other_name),
        kind if kind.is_wall() => listener.on_wall_hit(other_name),
        _ => {}
    }
}
