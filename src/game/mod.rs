//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Time enters only through an injected [`Clock`], randomness through a seedable RNG.

pub mod clock;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod grid;
pub mod level;
pub mod powerup;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, GameEvent, StepResult};
pub use error::ConfigError;
pub use grid::Grid;
pub use powerup::{Effects, PowerUp, PowerUpKind};
pub use state::{CollisionType, GameState, Position, Snake};
