//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ARK_SECTION__KEY`)

use arkanoid_core::GameLayout;
use arkanoid_math::Vec2;
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Playfield geometry
    #[serde(default)]
    pub layout: GameLayout,
    /// Physics engine configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Game rules
    #[serde(default)]
    pub session: SessionConfig,
    /// Headless demo run
    #[serde(default)]
    pub demo: DemoConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ARK_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // ARK_SESSION__LIVES=5 -> session.lives = 5
        figment = figment.merge(Env::prefixed("ARK_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Physics engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity [x, y]; the ball ignores it unless it opts in
    pub gravity: [f32; 2],
    /// Longest integration substep in seconds
    pub max_substep: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, 0.0],
            max_substep: 1.0 / 240.0,
        }
    }
}

impl PhysicsConfig {
    /// Convert to the engine's configuration type
    pub fn to_physics_config(&self) -> arkanoid_core::PhysicsConfig {
        arkanoid_core::PhysicsConfig::new(Vec2::from(self.gravity)).with_max_substep(self.max_substep)
    }
}

/// Game rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Lives at the start of a game
    pub lives: u32,
    /// Score for the first hit on each brick
    pub points_per_brick: u32,
    /// The ball is lost once its center drops below this y
    pub death_line_y: f32,
    /// Longest frame time fed to the physics (seconds)
    pub max_frame_time: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lives: 3,
            points_per_brick: 100,
            death_line_y: -10.0,
            max_frame_time: 0.25,
        }
    }
}

/// Headless demo run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Simulated frames per second
    pub frame_rate: f32,
    /// Number of frames to simulate
    pub frames: u32,
    /// Keep the paddle under the ball
    pub autopilot: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frame_rate: 120.0,
            frames: 120 * 30,
            autopilot: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
