//! Playfield geometry
//!
//! Everything the registry needs to build the default world: the brick grid,
//! ball, paddle and walls. Defaults give the classic 3x3 field.
//! Positions and sizes are `[x, y]` arrays so they read naturally in TOML.

use arkanoid_math::Vec2;
use serde::{Serialize, Deserialize};

use crate::engine::ShapeDesc;
use crate::error::RegistryError;
use crate::object::ObjectKind;

fn finite(field: &str, value: [f32; 2]) -> Result<(), RegistryError> {
    if value.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(RegistryError::InvalidLayout(format!("{} must be finite", field)))
    }
}

fn positive(field: &str, value: [f32; 2]) -> Result<(), RegistryError> {
    if value.iter().all(|v| v.is_finite() && *v > 0.0) {
        Ok(())
    } else {
        Err(RegistryError::InvalidLayout(format!("{} must be finite and positive", field)))
    }
}

/// Brick grid anchored at the top-left brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickGrid {
    /// Center of the brick at row 0, column 0
    pub origin: [f32; 2],
    /// Width and height of one brick
    pub size: [f32; 2],
    /// Gap between neighbouring bricks
    pub spacing: f32,
    /// Number of rows (growing downward)
    pub rows: u32,
    /// Number of columns (growing rightward)
    pub cols: u32,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self {
            origin: [-15.0, 70.0],
            size: [10.0, 5.0],
            spacing: 1.0,
            rows: 3,
            cols: 3,
        }
    }
}

impl BrickGrid {
    /// Total number of bricks
    pub fn count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Center of the brick at a cell
    pub fn position(&self, row: u32, col: u32) -> Vec2 {
        let [width, height] = self.size;
        Vec2::new(
            self.origin[0] + col as f32 * (width + self.spacing),
            self.origin[1] - row as f32 * (height + self.spacing),
        )
    }

    fn validate(&self) -> Result<(), RegistryError> {
        finite("brick.origin", self.origin)?;
        positive("brick.size", self.size)?;
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(RegistryError::InvalidLayout("brick.spacing must be finite and not negative".into()));
        }
        Ok(())
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Vec2)> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| (row, col, self.position(row, col))))
    }
}

/// Ball geometry and launch parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Where the ball waits before launch and after a reset
    pub spawn: [f32; 2],
    pub radius: f32,
    /// Speed given by `launch_ball` (units per second)
    pub launch_speed: f32,
    /// Launch direction; normalized before use
    pub launch_direction: [f32; 2],
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            spawn: [0.0, 7.0],
            radius: 3.0,
            launch_speed: 60.0,
            launch_direction: [0.0, 1.0],
        }
    }
}

impl BallConfig {
    /// Velocity applied on launch
    pub fn launch_velocity(&self) -> Vec2 {
        Vec2::from_array(self.launch_direction).normalized() * self.launch_speed
    }

    fn validate(&self) -> Result<(), RegistryError> {
        finite("ball.spawn", self.spawn)?;
        positive("ball.radius", [self.radius, self.radius])?;
        finite("ball.launch_direction", self.launch_direction)?;
        finite("ball.launch_speed", [self.launch_speed, 0.0])
    }
}

/// Paddle geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub spawn: [f32; 2],
    pub size: [f32; 2],
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            spawn: [0.0, 0.0],
            size: [20.0, 5.0],
        }
    }
}

/// Playfield boundaries: one wall on top, one on each side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    pub north_position: [f32; 2],
    pub north_size: [f32; 2],
    pub west_position: [f32; 2],
    pub east_position: [f32; 2],
    /// Size of each side wall
    pub side_size: [f32; 2],
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            north_position: [0.0, 100.0],
            north_size: [100.0, 0.1],
            west_position: [-25.0, 50.0],
            east_position: [25.0, 50.0],
            side_size: [3.0, 100.0],
        }
    }
}

impl WallConfig {
    fn validate(&self) -> Result<(), RegistryError> {
        finite("walls.north_position", self.north_position)?;
        finite("walls.west_position", self.west_position)?;
        finite("walls.east_position", self.east_position)?;
        positive("walls.north_size", self.north_size)?;
        positive("walls.side_size", self.side_size)
    }

    /// Inner x range the paddle may occupy without entering a side wall
    pub fn inner_x_range(&self) -> (f32, f32) {
        let half = self.side_size[0] * 0.5;
        (self.west_position[0] + half, self.east_position[0] - half)
    }
}

/// Full playfield description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameLayout {
    pub brick: BrickGrid,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    /// `None` builds an open playfield
    pub walls: Option<WallConfig>,
}

impl Default for GameLayout {
    fn default() -> Self {
        Self {
            brick: BrickGrid::default(),
            ball: BallConfig::default(),
            paddle: PaddleConfig::default(),
            walls: Some(WallConfig::default()),
        }
    }
}

impl GameLayout {
    /// Check that every position is finite and every size positive
    pub fn validate(&self) -> Result<(), RegistryError> {
        self.brick.validate()?;
        self.ball.validate()?;
        finite("paddle.spawn", self.paddle.spawn)?;
        positive("paddle.size", self.paddle.size)?;
        match &self.walls {
            Some(walls) => walls.validate(),
            None => Ok(()),
        }
    }

    /// Collision shape of an object of the given kind
    pub fn shape_for(&self, kind: ObjectKind) -> ShapeDesc {
        let half_box = |size: [f32; 2]| ShapeDesc::Box {
            half_width: size[0] * 0.5,
            half_height: size[1] * 0.5,
        };
        let walls = self.walls.clone().unwrap_or_default();

        match kind {
            ObjectKind::Ball => ShapeDesc::Circle { radius: self.ball.radius },
            ObjectKind::Brick => half_box(self.brick.size),
            ObjectKind::Paddle => half_box(self.paddle.size),
            ObjectKind::WallNorth => half_box(walls.north_size),
            ObjectKind::WallSides => half_box(walls.side_size),
        }
    }
}
