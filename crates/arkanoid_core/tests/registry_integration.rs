//! Integration tests: the registry driving the bundled physics world
//!
//! These go through real collision detection instead of scripted contacts.

use arkanoid_core::{
    GameLayout, HitListener, ObjectKind, ObjectName, ObjectRegistry, PhysicsLocation, PhysicsWorld,
    RegistryError,
};
use arkanoid_math::Vec2;

#[derive(Default)]
struct Hits {
    bricks: Vec<String>,
    paddle: usize,
    walls: Vec<String>,
}

impl HitListener for Hits {
    fn on_brick_hit(&mut self, brick: &ObjectName) {
        self.bricks.push(brick.to_string());
    }

    fn on_paddle_hit(&mut self, _paddle: &ObjectName) {
        self.paddle += 1;
    }

    fn on_wall_hit(&mut self, wall: &ObjectName) {
        self.walls.push(wall.to_string());
    }
}

fn world(layout: GameLayout) -> ObjectRegistry<PhysicsWorld, Hits> {
    let mut registry = ObjectRegistry::new(PhysicsWorld::new(), Hits::default(), layout);
    registry.reset().unwrap();
    registry
}

fn run(registry: &mut ObjectRegistry<PhysicsWorld, Hits>, seconds: f32) {
    let dt = 1.0 / 60.0;
    for _ in 0..(seconds / dt) as usize {
        registry.advance(dt).unwrap();
    }
}

#[test]
fn test_reset_creates_one_body_per_record() {
    let registry = world(GameLayout::default());
    assert_eq!(registry.len(), 14);
    assert_eq!(registry.engine().body_count(), 14);
}

#[test]
fn test_launched_ball_hits_brick_then_paddle() {
    let mut registry = world(GameLayout::default());
    registry.launch_ball().unwrap();

    run(&mut registry, 1.0);
    assert_eq!(registry.listener().bricks, vec!["brick_2_1"]);
    assert!(registry.ball_velocity().unwrap().y < 0.0);

    run(&mut registry, 1.0);
    assert_eq!(registry.listener().paddle, 1);
    assert!(registry.ball_velocity().unwrap().y > 0.0);
}

#[test]
fn test_static_objects_stay_put() {
    let mut registry = world(GameLayout::default());
    let brick = registry.lookup("brick_2_1").unwrap().location();
    let paddle = registry.lookup(ObjectName::PADDLE).unwrap().location();
    registry.launch_ball().unwrap();

    run(&mut registry, 2.0);

    assert_eq!(registry.lookup("brick_2_1").unwrap().location(), brick);
    assert_eq!(registry.lookup(ObjectName::PADDLE).unwrap().location(), paddle);
}

#[test]
fn test_ball_bounces_off_side_wall() {
    let mut layout = GameLayout::default();
    layout.ball.launch_direction = [1.0, 0.0];
    let mut registry = world(layout);
    registry.launch_ball().unwrap();

    run(&mut registry, 1.0);

    assert_eq!(registry.listener().walls, vec!["wall_east"]);
    let velocity = registry.ball_velocity().unwrap();
    assert!(velocity.x < 0.0);
    assert!((velocity.length() - 60.0).abs() < 0.01);
}

#[test]
fn test_moved_paddle_blocks_ball_at_new_position() {
    let mut layout = GameLayout::default();
    layout.ball.launch_direction = [0.0, -1.0];
    let mut registry = world(layout);
    registry
        .register(ObjectName::BALL, ObjectKind::Ball, PhysicsLocation::new(12.0, 30.0, 0.0))
        .unwrap();
    registry.move_paddle_x(12.0).unwrap();
    assert_eq!(registry.engine().body_count(), 14);

    registry.launch_ball().unwrap();
    run(&mut registry, 1.0);

    assert_eq!(registry.listener().paddle, 1);
    assert!(registry.ball_velocity().unwrap().y > 0.0);
    assert!(registry.listener().bricks.is_empty());

    registry.reset_ball().unwrap();
    assert_eq!(
        registry.lookup(ObjectName::BALL).unwrap().location().position(),
        Vec2::new(0.0, 7.0)
    );
    assert_eq!(registry.ball_velocity().unwrap(), Vec2::ZERO);
}

#[test]
fn test_negative_brick_size_is_rejected_before_simulation() {
    let mut layout = GameLayout::default();
    layout.brick.size = [-10.0, 5.0];
    let mut registry = ObjectRegistry::new(PhysicsWorld::new(), Hits::default(), layout);

    assert!(matches!(registry.reset(), Err(RegistryError::InvalidLayout(_))));
    assert_eq!(registry.engine().body_count(), 0);
    assert!(registry.advance(1.0 / 60.0).is_ok());
}
