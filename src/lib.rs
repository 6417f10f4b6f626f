//! Friendsy Snake - a terminal snake game with obstacles and power-ups
//!
//! This library provides:
//! - Core game logic (game module), free of I/O and deterministic under a seed
//! - Tick scheduling and session bookkeeping (session module)
//! - High-score persistence (persistence module)
//! - TUI rendering and keyboard input (render, input modules)
//! - The interactive play mode (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod persistence;
pub mod render;
pub mod session;
