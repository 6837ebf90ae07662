//! [`PhysicsEngine`] implementation for the bundled 2D physics world

use arkanoid_math::Vec2;
use arkanoid_physics::{BodyKey, BodyType, PhysicsMaterial, PhysicsWorld, RigidBody2D};
use slotmap::{Key, KeyData};

use crate::engine::{BodyDesc, BodyMotion, EngineHandle, PhysicsEngine, ShapeDesc};
use crate::location::PhysicsLocation;

fn to_key(handle: EngineHandle) -> BodyKey {
    BodyKey::from(KeyData::from_ffi(handle.to_raw()))
}

fn to_handle(key: BodyKey) -> EngineHandle {
    EngineHandle::from_raw(key.data().as_ffi())
}

impl From<BodyMotion> for BodyType {
    fn from(motion: BodyMotion) -> Self {
        match motion {
            BodyMotion::Static => BodyType::Static,
            BodyMotion::Kinematic => BodyType::Kinematic,
            BodyMotion::Dynamic => BodyType::Dynamic,
        }
    }
}

impl PhysicsEngine for PhysicsWorld {
    fn create_body(&mut self, desc: &BodyDesc) -> EngineHandle {
        let position = desc.location.position();
        let body = match desc.shape {
            ShapeDesc::Circle { radius } => RigidBody2D::new_circle(position, radius),
            ShapeDesc::Box { half_width, half_height } => {
                RigidBody2D::new_box(position, Vec2::new(half_width, half_height))
            }
        }
        .with_body_type(desc.motion.into())
        .with_rotation(desc.location.theta)
        .with_material(PhysicsMaterial::ELASTIC);

        to_handle(self.add_body(body))
    }

    fn destroy_body(&mut self, handle: EngineHandle) {
        self.remove_body(to_key(handle));
    }

    fn step(&mut self, dt: f32, on_contact: &mut dyn FnMut(EngineHandle, EngineHandle)) {
        PhysicsWorld::step(self, dt);
        for event in self.contact_events() {
            on_contact(to_handle(event.a), to_handle(event.b));
        }
    }

    fn location(&self, handle: EngineHandle) -> Option<PhysicsLocation> {
        self.get_body(to_key(handle))
            .map(|body| PhysicsLocation::new(body.position.x, body.position.y, body.rotation))
    }

    fn set_location(&mut self, handle: EngineHandle, location: PhysicsLocation) {
        if let Some(body) = self.get_body_mut(to_key(handle)) {
            body.set_position(location.position());
            body.rotation = location.theta;
        }
    }

    fn velocity(&self, handle: EngineHandle) -> Option<Vec2> {
        self.get_body(to_key(handle)).map(|body| body.velocity)
    }

    fn set_velocity(&mut self, handle: EngineHandle, velocity: Vec2) {
        if let Some(body) = self.get_body_mut(to_key(handle)) {
            body.velocity = velocity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_desc() -> BodyDesc {
        BodyDesc {
            shape: ShapeDesc::Circle { radius: 3.0 },
            motion: BodyMotion::Dynamic,
            location: PhysicsLocation::new(0.0, 7.0, 0.25),
        }
    }

    #[test]
    fn test_handle_round_trips_to_body() {
        let mut world = PhysicsWorld::new();
        let handle = world.create_body(&ball_desc());

        assert_eq!(world.location(handle), Some(PhysicsLocation::new(0.0, 7.0, 0.25)));
        assert_eq!(world.body_count(), 1);
        assert!(world.get_body(to_key(handle)).is_some());
    }

    #[test]
    fn test_destroyed_handle_is_dead() {
        let mut world = PhysicsWorld::new();
        let handle = world.create_body(&ball_desc());

        world.destroy_body(handle);
        assert_eq!(world.location(handle), None);
        assert_eq!(world.velocity(handle), None);

        // Writes through a dead handle are ignored
        world.set_velocity(handle, Vec2::new(1.0, 1.0));
        world.destroy_body(handle);
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn test_motion_maps_to_body_type() {
        let mut world = PhysicsWorld::new();
        let paddle = world.create_body(&BodyDesc {
            shape: ShapeDesc::Box { half_width: 10.0, half_height: 2.5 },
            motion: BodyMotion::Kinematic,
            location: PhysicsLocation::default(),
        });

        let body = world.get_body(to_key(paddle)).unwrap();
        assert_eq!(body.body_type, BodyType::Kinematic);
    }

    #[test]
    fn test_set_location_and_velocity() {
        let mut world = PhysicsWorld::new();
        let handle = world.create_body(&ball_desc());

        world.set_location(handle, PhysicsLocation::new(5.0, 6.0, 0.0));
        world.set_velocity(handle, Vec2::new(0.0, 60.0));

        assert_eq!(world.location(handle), Some(PhysicsLocation::new(5.0, 6.0, 0.0)));
        assert_eq!(world.velocity(handle), Some(Vec2::new(0.0, 60.0)));
    }

    #[test]
    fn test_step_reports_contacts_through_callback() {
        let mut world = PhysicsWorld::new();
        let brick = world.create_body(&BodyDesc {
            shape: ShapeDesc::Box { half_width: 5.0, half_height: 2.5 },
            motion: BodyMotion::Static,
            location: PhysicsLocation::new(0.0, 10.0, 0.0),
        });
        let ball = world.create_body(&BodyDesc {
            location: PhysicsLocation::new(0.0, 5.0, 0.0),
            ..ball_desc()
        });
        world.set_velocity(ball, Vec2::new(0.0, 20.0));

        let mut pairs = Vec::new();
        PhysicsEngine::step(&mut world, 0.1, &mut |a, b| pairs.push((a, b)));

        assert_eq!(pairs.len(), 1);
        let (a, b) = pairs[0];
        assert!((a == brick && b == ball) || (a == ball && b == brick));
    }
}
