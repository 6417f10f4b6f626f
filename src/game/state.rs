use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use super::direction::Direction;
use super::grid::Grid;
use super::powerup::{Effects, PowerUp};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Neighbouring cell in a direction, wrapped onto the grid
    pub fn step_on(&self, grid: &Grid, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        grid.wrap(self.x + dx, self.y + dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    pub body: VecDeque<Position>,
    /// Direction committed at the start of the last step
    pub direction: Direction,
    /// Direction to commit at the start of the next step
    pub next_direction: Direction,
}

impl Snake {
    /// Create a snake from explicit segments, head first
    ///
    /// Panics if `segments` is empty.
    pub fn from_segments(segments: &[Position], direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Self {
            body: segments.iter().copied().collect(),
            direction,
            next_direction: direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Whether any segment, head and tail included, occupies `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Buffer a turn, refusing a reversal of the committed direction
    pub fn request_direction(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.next_direction = requested;
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What the candidate head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    Obstacle,
    SelfCollision,
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub obstacles: HashSet<Position>,
    pub food: Position,
    pub powerups: Vec<PowerUp>,
    pub effects: Effects,
    pub score: u32,
    pub level: u32,
    /// Base tick interval for the current level, before boots
    pub interval: Duration,
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    /// A cell is free when no snake segment, obstacle or power-up sits on it
    pub fn is_free(&self, pos: Position) -> bool {
        !self.snake.occupies(pos)
            && !self.obstacles.contains(&pos)
            && !self.powerups.iter().any(|p| p.position == pos)
    }

    pub fn powerup_at(&self, pos: Position) -> Option<&PowerUp> {
        self.powerups.iter().find(|p| p.position == pos)
    }

    /// Buffer a direction change for the next step; ignored once the game is over
    pub fn set_direction(&mut self, requested: Direction) {
        if self.is_alive {
            self.snake.request_direction(requested);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake() -> Snake {
        Snake::from_segments(
            &[Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
        )
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_step_on_wraps() {
        let grid = Grid::new(10, 10).unwrap();
        assert_eq!(
            Position::new(9, 0).step_on(&grid, Direction::Right),
            Position::new(0, 0)
        );
        assert_eq!(
            Position::new(9, 0).step_on(&grid, Direction::Up),
            Position::new(9, 9)
        );
    }

    #[test]
    fn test_snake_creation() {
        let snake = snake();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.tail(), Position::new(3, 5));
        assert_eq!(snake.next_direction, Direction::Right);
    }

    #[test]
    fn test_occupies_includes_head_and_tail() {
        let snake = snake();
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }

    #[test]
    fn test_reverse_request_ignored() {
        let mut snake = snake();
        snake.request_direction(Direction::Up);
        assert_eq!(snake.next_direction, Direction::Up);

        // Reversal is judged against the committed direction, not the buffer
        snake.request_direction(Direction::Left);
        assert_eq!(snake.next_direction, Direction::Up);
    }
}
