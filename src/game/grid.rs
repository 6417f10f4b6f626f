use rand::Rng;

use super::error::ConfigError;
use super::state::Position;

/// The bounded, wrapping playfield
///
/// Every coordinate that leaves one edge re-enters from the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cols: i32,
    rows: i32,
}

impl Grid {
    /// Create a grid, failing fast on dimensions no game can be played on
    pub fn new(cols: usize, rows: usize) -> Result<Self, ConfigError> {
        if cols == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid {
                width: cols,
                height: rows,
            });
        }
        let cols_i = i32::try_from(cols).map_err(|_| ConfigError::GridTooLarge(cols))?;
        let rows_i = i32::try_from(rows).map_err(|_| ConfigError::GridTooLarge(rows))?;

        Ok(Self {
            cols: cols_i,
            rows: rows_i,
        })
    }

    pub fn width(&self) -> usize {
        self.cols as usize
    }

    pub fn height(&self) -> usize {
        self.rows as usize
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Map any coordinate pair onto the grid
    pub fn wrap(&self, x: i32, y: i32) -> Position {
        Position::new(x.rem_euclid(self.cols), y.rem_euclid(self.rows))
    }

    /// Uniformly sample a cell
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(rng.gen_range(0..self.cols), rng.gen_range(0..self.rows))
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.cols).contains(&pos.x) && (0..self.rows).contains(&pos.y)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| Position::new(x, y)))
    }
}
