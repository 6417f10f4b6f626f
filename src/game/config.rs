use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::grid::Grid;
use super::rules::{MIN_GRID_HEIGHT, MIN_GRID_WIDTH};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Seed for food and power-up placement; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 24,
            grid_height: 24,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create the smallest playable grid, seeded, for testing
    pub fn small() -> Self {
        Self::new(MIN_GRID_WIDTH, MIN_GRID_HEIGHT).with_seed(1)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the grid can host the starting layout
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        let grid = Grid::new(self.grid_width, self.grid_height)?;
        if self.grid_width < MIN_GRID_WIDTH || self.grid_height < MIN_GRID_HEIGHT {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
                min_width: MIN_GRID_WIDTH,
                min_height: MIN_GRID_HEIGHT,
            });
        }
        Ok(grid)
    }
}
