//! Game session built on top of the object registry
//!
//! Holds the rules the registry deliberately knows nothing about: score,
//! lives, levels and when to serve the ball again.

use std::collections::HashSet;

use arkanoid_core::{
    GameLayout, HitListener, ObjectKind, ObjectName, ObjectRegistry, PhysicsWorld, RegistryError,
};

use crate::config::AppConfig;

/// Receives hit notifications from the registry and keeps score
///
/// Bricks are never removed from the world, so each brick scores only on
/// its first hit until the field is reset.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    points_per_brick: u32,
    score: u32,
    paddle_hits: u32,
    wall_hits: u32,
    hit_bricks: HashSet<ObjectName>,
}

impl Scoreboard {
    pub fn new(points_per_brick: u32) -> Self {
        Self {
            points_per_brick,
            ..Self::default()
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paddle_hits(&self) -> u32 {
        self.paddle_hits
    }

    pub fn wall_hits(&self) -> u32 {
        self.wall_hits
    }

    /// Whether the brick has been hit since the field was last reset
    pub fn is_hit(&self, brick: &str) -> bool {
        self.hit_bricks.contains(brick)
    }

    /// Number of distinct bricks hit since the field was last reset
    pub fn bricks_hit(&self) -> usize {
        self.hit_bricks.len()
    }

    /// Forget which bricks were hit; the score is kept
    pub fn clear_field(&mut self) {
        self.hit_bricks.clear();
    }

    /// Back to a fresh game
    pub fn reset(&mut self) {
        *self = Self::new(self.points_per_brick);
    }
}

impl HitListener for Scoreboard {
    fn on_brick_hit(&mut self, brick: &ObjectName) {
        if self.hit_bricks.insert(brick.clone()) {
            self.score += self.points_per_brick;
            log::info!("Brick {} hit, score {}", brick, self.score);
        } else {
            log::debug!("Brick {} hit again", brick);
        }
    }

    fn on_paddle_hit(&mut self, _paddle: &ObjectName) {
        self.paddle_hits += 1;
        log::debug!("Paddle hit #{}", self.paddle_hits);
    }

    fn on_wall_hit(&mut self, wall: &ObjectName) {
        self.wall_hits += 1;
        log::trace!("Wall {} hit", wall);
    }
}

/// Where the game currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball resting on its spawn point, waiting for `serve`
    Serving,
    /// Ball in flight
    InPlay,
    /// No lives left
    GameOver,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The ball fell past the paddle and was put back on its spawn point
    BallLost { lives_left: u32 },
    /// Every brick was hit; the field has been rebuilt
    LevelCleared { level: u32 },
    /// The last life was lost
    GameOver { score: u32 },
}

/// One game of Arkanoid over the bundled physics engine
///
/// Unlike the classic game, a brick that has been hit stays in the field and
/// keeps deflecting the ball. It only stops scoring until the field is rebuilt.
pub struct GameSession {
    registry: ObjectRegistry<PhysicsWorld, Scoreboard>,
    phase: GamePhase,
    lives: u32,
    level: u32,
    starting_lives: u32,
    death_line_y: f32,
    max_frame_time: f32,
}

impl GameSession {
    /// Build the world and wait for the first serve
    pub fn new(config: &AppConfig) -> Result<Self, RegistryError> {
        let engine = PhysicsWorld::with_config(config.physics.to_physics_config());
        let scoreboard = Scoreboard::new(config.session.points_per_brick);
        let mut registry = ObjectRegistry::new(engine, scoreboard, config.layout.clone());
        registry.reset()?;

        log::info!(
            "Session ready: {} bricks, {} lives",
            registry.kind_count(ObjectKind::Brick),
            config.session.lives
        );

        Ok(Self {
            registry,
            phase: GamePhase::Serving,
            lives: config.session.lives,
            level: 1,
            starting_lives: config.session.lives,
            death_line_y: config.session.death_line_y,
            max_frame_time: config.session.max_frame_time,
        })
    }

    /// Launch the ball if it is waiting
    ///
    /// Returns whether the ball was launched.
    pub fn serve(&mut self) -> Result<bool, RegistryError> {
        if self.phase != GamePhase::Serving {
            return Ok(false);
        }
        self.registry.launch_ball()?;
        self.phase = GamePhase::InPlay;
        Ok(true)
    }

    /// Move the paddle, keeping it between the side walls
    pub fn move_paddle(&mut self, x: f32) -> Result<(), RegistryError> {
        let x = match self.paddle_x_range() {
            Some((min, max)) => x.clamp(min, max),
            None => x,
        };
        self.registry.move_paddle_x(x)
    }

    /// Advance the game by one frame
    pub fn tick(&mut self, dt: f32) -> Result<Option<SessionEvent>, RegistryError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(RegistryError::InvalidTimeStep(dt));
        }
        if self.phase == GamePhase::GameOver {
            return Ok(None);
        }

        // Cap large frame times so a stall does not tunnel the ball
        let dt = dt.min(self.max_frame_time);
        self.registry.advance(dt)?;

        if self.phase != GamePhase::InPlay {
            return Ok(None);
        }

        if self.field_cleared() {
            self.level += 1;
            self.registry.listener_mut().clear_field();
            self.registry.reset_bricks()?;
            self.registry.reset_ball()?;
            self.phase = GamePhase::Serving;
            log::info!("Level cleared, starting level {}", self.level);
            return Ok(Some(SessionEvent::LevelCleared { level: self.level }));
        }

        let ball_y = self.registry.lookup(ObjectName::BALL)?.location().y;
        if ball_y < self.death_line_y {
            self.lives = self.lives.saturating_sub(1);
            self.registry.reset_ball()?;

            if self.lives == 0 {
                self.phase = GamePhase::GameOver;
                log::info!("Game over, final score {}", self.score());
                return Ok(Some(SessionEvent::GameOver { score: self.score() }));
            }

            self.phase = GamePhase::Serving;
            log::info!("Ball lost, {} lives left", self.lives);
            return Ok(Some(SessionEvent::BallLost { lives_left: self.lives }));
        }

        Ok(None)
    }

    /// Start over with a fresh world and score
    pub fn restart(&mut self) -> Result<(), RegistryError> {
        self.registry.reset()?;
        self.registry.listener_mut().reset();
        self.phase = GamePhase::Serving;
        self.lives = self.starting_lives;
        self.level = 1;
        log::info!("Session restarted");
        Ok(())
    }

    fn field_cleared(&self) -> bool {
        let bricks = self.registry.kind_count(ObjectKind::Brick);
        bricks > 0 && self.registry.listener().bricks_hit() >= bricks
    }

    /// Allowed paddle x range, if the playfield has walls
    fn paddle_x_range(&self) -> Option<(f32, f32)> {
        let layout: &GameLayout = self.registry.layout();
        let (min, max) = layout.walls.as_ref()?.inner_x_range();
        let half = layout.paddle.size[0] * 0.5;
        if max - min < 2.0 * half {
            return Some((0.5 * (min + max), 0.5 * (min + max)));
        }
        Some((min + half, max - half))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.registry.listener().score()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        self.registry.listener()
    }

    pub fn registry(&self) -> &ObjectRegistry<PhysicsWorld, Scoreboard> {
        &self.registry
    }
}
