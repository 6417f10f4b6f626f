//! Whole-game scenarios driven through the public API.

use std::time::Duration;

use friendsy_snake::game::{
    Clock, CollisionType, Direction, GameConfig, GameEngine, GameEvent, ManualClock, Position,
    PowerUp, PowerUpKind,
};

fn engine(seed: u64) -> (GameEngine, ManualClock) {
    let clock = ManualClock::new();
    let engine = GameEngine::with_clock(GameConfig::default().with_seed(seed), clock.clone())
        .expect("default config is valid");
    (engine, clock)
}

#[test]
fn fresh_game_eats_food_straight_ahead() {
    let (mut engine, _) = engine(1);
    let mut state = engine.reset();

    let body: Vec<_> = state.snake.body.iter().copied().collect();
    assert_eq!(
        body,
        vec![Position::new(5, 10), Position::new(4, 10), Position::new(3, 10)]
    );

    state.food = Position::new(6, 10);
    let result = engine.step(&mut state);

    assert!(!result.terminated);
    assert!(result.ate_food());
    assert_eq!(state.snake.head(), Position::new(6, 10));
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.tail(), Position::new(3, 10));
}

#[test]
fn turning_into_own_neck_ends_the_game() {
    let (mut engine, _) = engine(2);
    let mut state = engine.reset();
    state.score = 6;
    state.snake.next_direction = Direction::Left;

    let result = engine.step(&mut state);

    assert!(result.terminated);
    assert_eq!(result.score, 6);
    assert_eq!(result.collision_type, Some(CollisionType::SelfCollision));
    assert!(!state.is_alive);

    // Nothing moves until the next reset
    let frozen = state.clone();
    let again = engine.step(&mut state);
    assert!(again.terminated);
    assert_eq!(state, frozen);

    let state = engine.reset();
    assert!(state.is_alive);
    assert_eq!(state.score, 0);
}

#[test]
fn shield_then_crash() {
    let (mut engine, _) = engine(3);
    let mut state = engine.reset();
    state.food = Position::new(20, 2);
    state
        .powerups
        .push(PowerUp::new(Position::new(6, 10), PowerUpKind::Shield, 50));

    let pickup = engine.step(&mut state);
    assert_eq!(pickup.collected(), Some(PowerUpKind::Shield));
    assert_eq!(state.effects.shield, 1);

    // Obstacle straight ahead: the umbrella takes the hit
    state.obstacles.insert(Position::new(7, 10));
    let absorbed = engine.step(&mut state);
    assert!(!absorbed.terminated);
    assert!(absorbed.events.contains(&GameEvent::ShieldAbsorbed));
    assert_eq!(state.effects.shield, 0);
    assert_eq!(state.snake.head(), Position::new(7, 10));

    // Second obstacle with no charge left is fatal
    state.obstacles.insert(Position::new(8, 10));
    let fatal = engine.step(&mut state);
    assert!(fatal.terminated);
    assert_eq!(fatal.collision_type, Some(CollisionType::Obstacle));
}

#[test]
fn coffee_run_through_levels() {
    let (mut engine, clock) = engine(4);
    let mut state = engine.reset();

    // Plain food up to 6 points
    for _ in 0..6 {
        state.food = state.snake.head().step_on(engine.grid(), state.snake.direction);
        engine.step(&mut state);
    }
    assert_eq!(state.score, 6);
    assert_eq!(state.level, 1);

    // Coffee lifts the score 6 -> 8, landing on the boundary
    state.effects.apply(PowerUpKind::Coffee, clock.now());
    state.food = state.snake.head().step_on(engine.grid(), state.snake.direction);
    let result = engine.step(&mut state);
    assert_eq!(state.score, 8);
    assert!(result.events.contains(&GameEvent::LevelUp { level: 2 }));
    assert_eq!(state.interval, Duration::from_millis(134));

    // After the coffee wears off points are single again
    clock.advance(Duration::from_secs(11));
    state.food = state.snake.head().step_on(engine.grid(), state.snake.direction);
    engine.step(&mut state);
    assert_eq!(state.score, 9);
    assert_eq!(state.effects.coffee_until, None);
}

#[test]
fn boots_speed_up_ticks_for_a_while() {
    let (mut engine, clock) = engine(5);
    let mut state = engine.reset();
    state.food = Position::new(20, 2);
    state
        .powerups
        .push(PowerUp::new(Position::new(6, 10), PowerUpKind::Boots, 50));

    let normal = engine.current_interval(&mut state);
    engine.step(&mut state);
    let boosted = engine.current_interval(&mut state);
    assert!(boosted < normal);

    clock.advance(Duration::from_secs(8));
    assert_eq!(engine.current_interval(&mut state), normal);
    assert_eq!(state.effects.boots_until, None);
}
