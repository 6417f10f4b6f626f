//! Built-in gameplay constants.
//!
//! Intervals are in milliseconds of game time.

use std::time::Duration;

/// Tick interval at level 1
pub const BASE_INTERVAL: Duration = Duration::from_millis(140);
/// Interval reduction applied on every level-up
pub const LEVEL_SPEEDUP: Duration = Duration::from_millis(6);
/// Level-ups never push the base interval below this
pub const MIN_LEVEL_INTERVAL: Duration = Duration::from_millis(70);

/// Multiplier applied to the interval while boots are active
pub const BOOTS_FACTOR: f64 = 0.68;
/// Floor for the boosted interval
pub const MIN_BOOSTED_INTERVAL: Duration = Duration::from_millis(50);

/// A new level starts whenever the score lands on a multiple of this
pub const POINTS_PER_LEVEL: u32 = 8;

pub const COFFEE_DURATION: Duration = Duration::from_secs(10);
pub const BOOTS_DURATION: Duration = Duration::from_secs(8);

/// Chance per tick that a power-up appears
pub const POWERUP_SPAWN_CHANCE: f64 = 0.03;
/// Ticks a power-up stays on the board before vanishing
pub const POWERUP_LIFETIME: u32 = 600;
pub const MAX_POWERUPS: usize = 2;

/// Starting snake, head first, heading right
pub const START_BODY: [(i32, i32); 3] = [(5, 10), (4, 10), (3, 10)];

/// Smallest grid on which the starting snake clears the level geometry
pub const MIN_GRID_WIDTH: usize = 16;
pub const MIN_GRID_HEIGHT: usize = 16;
