use thiserror::Error;

/// Invalid game setup, rejected before the first tick
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one column and one row (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid dimension {0} does not fit in a signed 32-bit coordinate")]
    GridTooLarge(usize),

    #[error("grid {width}x{height} is smaller than the minimum playfield {min_width}x{min_height}")]
    GridTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },
}
