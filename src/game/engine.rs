use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::{
    clock::{Clock, SystemClock},
    config::GameConfig,
    direction::Direction,
    error::ConfigError,
    grid::Grid,
    level::obstacles_for_level,
    powerup::{Effects, PowerUp, PowerUpKind},
    rules::{
        BASE_INTERVAL, BOOTS_FACTOR, LEVEL_SPEEDUP, MAX_POWERUPS, MIN_BOOSTED_INTERVAL,
        MIN_LEVEL_INTERVAL, POINTS_PER_LEVEL, POWERUP_LIFETIME, POWERUP_SPAWN_CHANCE, START_BODY,
    },
    state::{CollisionType, GameState, Position, Snake},
};

/// Something that happened during a step, for observers to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A shield charge was spent to survive a collision
    ShieldAbsorbed,
    AteFood { points: u32 },
    LevelUp { level: u32 },
    PowerUpCollected(PowerUpKind),
    PowerUpExpired(PowerUpKind),
    PowerUpSpawned(PowerUpKind),
    GameOver { score: u32 },
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    pub score: u32,
    pub level: u32,
    /// Type of collision if one ended the game
    pub collision_type: Option<CollisionType>,
    /// Events in the order they occurred
    pub events: Vec<GameEvent>,
}

impl StepResult {
    pub fn ate_food(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::AteFood { .. }))
    }

    pub fn leveled_up(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::LevelUp { .. }))
    }

    pub fn collected(&self) -> Option<PowerUpKind> {
        self.events.iter().find_map(|e| match e {
            GameEvent::PowerUpCollected(kind) => Some(*kind),
            _ => None,
        })
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    grid: Grid,
    rng: StdRng,
    clock: Box<dyn Clock>,
}

impl GameEngine {
    /// Create a new game engine on the system clock
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock::new())
    }

    /// Create a game engine reading effect deadlines from `clock`
    pub fn with_clock(config: GameConfig, clock: impl Clock + 'static) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            grid,
            rng,
            clock: Box::new(clock),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current reading of the game clock
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let segments: Vec<Position> = START_BODY
            .iter()
            .map(|&(x, y)| self.grid.wrap(x, y))
            .collect();
        let snake = Snake::from_segments(&segments, Direction::Right);
        let head = snake.head();

        let mut state = GameState {
            grid: self.grid,
            snake,
            obstacles: obstacles_for_level(&self.grid, 1),
            food: head,
            powerups: Vec::new(),
            effects: Effects::default(),
            score: 0,
            level: 1,
            interval: BASE_INTERVAL,
            steps: 0,
            is_alive: true,
        };

        match self.spawn_free(&state) {
            Some(food) => state.food = food,
            None => warn!("no free cell for food on a fresh board"),
        }

        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            "game reset"
        );
        state
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                score: state.score,
                level: state.level,
                collision_type: None,
                events: Vec::new(),
            };
        }

        let mut events = Vec::new();

        state.snake.direction = state.snake.next_direction;
        let new_head = state.snake.head().step_on(&self.grid, state.snake.direction);

        if let Some(collision_type) = self.check_collision(state, new_head) {
            if state.effects.consume_shield() {
                debug!(?collision_type, shield = state.effects.shield, "shield absorbed collision");
                events.push(GameEvent::ShieldAbsorbed);
            } else {
                state.is_alive = false;
                info!(score = state.score, level = state.level, ?collision_type, "game over");
                events.push(GameEvent::GameOver { score: state.score });

                return StepResult {
                    terminated: true,
                    score: state.score,
                    level: state.level,
                    collision_type: Some(collision_type),
                    events,
                };
            }
        }

        state.snake.body.push_front(new_head);
        let now = self.clock.now();

        if new_head == state.food {
            let points = if state.effects.coffee_active(now) { 2 } else { 1 };
            state.score += points;
            events.push(GameEvent::AteFood { points });

            match self.spawn_free(state) {
                Some(food) => state.food = food,
                None => warn!(score = state.score, "board full, food stays put"),
            }

            if state.score > 0 && state.score % POINTS_PER_LEVEL == 0 {
                self.level_up(state);
                events.push(GameEvent::LevelUp { level: state.level });
            }
        } else {
            state.snake.body.pop_back();
        }

        // Lifetime runs out before pickup is considered
        let effects = &mut state.effects;
        state.powerups.retain_mut(|p| {
            p.remaining_ticks = p.remaining_ticks.saturating_sub(1);
            if p.remaining_ticks == 0 {
                events.push(GameEvent::PowerUpExpired(p.kind));
                return false;
            }
            if p.position == new_head {
                effects.apply(p.kind, now);
                events.push(GameEvent::PowerUpCollected(p.kind));
                return false;
            }
            true
        });

        state.effects.expire_coffee(now);

        if let Some(kind) = self.maybe_spawn_powerup(state) {
            events.push(GameEvent::PowerUpSpawned(kind));
        }

        state.steps += 1;

        StepResult {
            terminated: false,
            score: state.score,
            level: state.level,
            collision_type: None,
            events,
        }
    }

    /// Delay until the next tick
    ///
    /// Boots shorten the level's base interval while active; an expired boots
    /// effect is cleared here.
    pub fn current_interval(&self, state: &mut GameState) -> Duration {
        let now = self.clock.now();
        let interval = if state.effects.boots_active(now) {
            state.interval.mul_f64(BOOTS_FACTOR)
        } else {
            state.effects.expire_boots(now);
            state.interval
        };
        interval.max(MIN_BOOSTED_INTERVAL)
    }

    fn level_up(&mut self, state: &mut GameState) {
        state.level += 1;
        state.interval = state
            .interval
            .saturating_sub(LEVEL_SPEEDUP)
            .max(MIN_LEVEL_INTERVAL);
        state.obstacles = obstacles_for_level(&self.grid, state.level);
        debug!(level = state.level, interval_ms = state.interval.as_millis() as u64, "level up");
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if state.obstacles.contains(&pos) {
            return Some(CollisionType::Obstacle);
        }

        // The body has not moved yet, so the tail still counts
        if state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn maybe_spawn_powerup(&mut self, state: &mut GameState) -> Option<PowerUpKind> {
        if state.powerups.len() >= MAX_POWERUPS || !self.rng.gen_bool(POWERUP_SPAWN_CHANCE) {
            return None;
        }

        let position = self.spawn_free(state)?;
        let kind = PowerUpKind::random(&mut self.rng);
        state
            .powerups
            .push(PowerUp::new(position, kind, POWERUP_LIFETIME));
        debug!(?kind, x = position.x, y = position.y, "power-up spawned");
        Some(kind)
    }

    /// Pick a random free cell
    ///
    /// Samples like a dice roll first; on a crowded board falls back to
    /// choosing among the remaining free cells, returning `None` if there are
    /// none.
    fn spawn_free(&mut self, state: &GameState) -> Option<Position> {
        for _ in 0..self.grid.area() * 4 {
            let pos = self.grid.random_cell(&mut self.rng);
            if state.is_free(pos) {
                return Some(pos);
            }
        }

        self.grid
            .cells()
            .filter(|pos| state.is_free(*pos))
            .choose(&mut self.rng)
    }
}
