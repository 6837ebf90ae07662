//! Headless Arkanoid
//!
//! Runs a fixed number of frames with the paddle tracking the ball and logs
//! what happens. `RUST_LOG` overrides `debug.log_level`.

use arkanoid::config::AppConfig;
use arkanoid::session::{GamePhase, GameSession, SessionEvent};
use arkanoid_core::{ObjectName, RegistryError};

/// Drives a session frame by frame
struct Demo {
    session: GameSession,
    dt: f32,
    frames: u32,
    autopilot: bool,
}

impl Demo {
    fn new(config: &AppConfig) -> Result<Self, RegistryError> {
        let frame_rate = if config.demo.frame_rate > 0.0 {
            config.demo.frame_rate
        } else {
            log::warn!("Invalid frame rate {}, using 60", config.demo.frame_rate);
            60.0
        };

        Ok(Self {
            session: GameSession::new(config)?,
            dt: 1.0 / frame_rate,
            frames: config.demo.frames,
            autopilot: config.demo.autopilot,
        })
    }

    fn run(&mut self) -> Result<(), RegistryError> {
        for frame in 0..self.frames {
            if self.session.phase() == GamePhase::Serving && self.session.serve()? {
                log::debug!("Frame {}: ball served", frame);
            }

            if self.autopilot {
                let ball_x = self.session.registry().lookup(ObjectName::BALL)?.location().x;
                self.session.move_paddle(ball_x)?;
            }

            match self.session.tick(self.dt)? {
                Some(SessionEvent::GameOver { score }) => {
                    log::info!("Frame {}: game over with {} points", frame, score);
                    break;
                }
                Some(event) => log::info!("Frame {}: {:?}", frame, event),
                None => {}
            }
        }

        let board = self.session.scoreboard();
        log::info!(
            "Finished: score {}, level {}, lives {}, paddle hits {}, wall hits {}",
            board.score(),
            self.session.level(),
            self.session.lives(),
            board.paddle_hits(),
            board.wall_hits()
        );
        Ok(())
    }
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Arkanoid");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let result = Demo::new(&config).and_then(|mut demo| demo.run());
    if let Err(e) = result {
        log::error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}
