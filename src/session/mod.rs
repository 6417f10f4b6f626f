//! The single live game and the timer that drives it.
//!
//! A [`Session`] owns the engine, the current [`GameState`], the
//! [`TickScheduler`] and high-score bookkeeping. Callers wait on
//! [`Session::next_tick`] and hand control back through [`Session::on_tick`];
//! every step re-arms the timer with a freshly computed interval, so speed
//! changes apply from the very next tick.

pub mod scheduler;

pub use scheduler::TickScheduler;

use tracing::{debug, info, warn};

use crate::game::{Direction, GameEngine, GameEvent, GameState, StepResult};
use crate::metrics::GameMetrics;
use crate::persistence::HighScoreStore;

pub struct Session {
    engine: GameEngine,
    state: GameState,
    scheduler: TickScheduler,
    metrics: GameMetrics,
    store: Option<HighScoreStore>,
    paused: bool,
    notice: Option<GameEvent>,
}

impl Session {
    /// Create a session with a fresh game, not yet ticking
    ///
    /// The stored high score is read once here; an unreadable store counts as
    /// zero.
    pub fn new(mut engine: GameEngine, store: Option<HighScoreStore>) -> Self {
        let high_score = match store.as_ref().map(HighScoreStore::load) {
            Some(Ok(score)) => score,
            Some(Err(e)) => {
                warn!(error = %e, "could not read high score, starting from zero");
                0
            }
            None => 0,
        };
        let state = engine.reset();

        Self {
            engine,
            state,
            scheduler: TickScheduler::new(),
            metrics: GameMetrics::with_high_score(high_score),
            store,
            paused: false,
            notice: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut GameMetrics {
        &mut self.metrics
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Most recent event worth telling the player about
    pub fn notice(&self) -> Option<GameEvent> {
        self.notice
    }

    /// Begin ticking the current game
    pub fn start(&mut self) {
        if self.state.is_alive && !self.paused {
            self.rearm();
        }
    }

    /// Wait until the next tick is due; pending forever while paused or over
    pub async fn next_tick(&mut self) {
        self.scheduler.fired().await;
    }

    /// Advance the game by one step and schedule the following tick
    pub fn on_tick(&mut self) -> StepResult {
        let result = self.engine.step(&mut self.state);

        if let Some(event) = result.events.iter().rev().find(|e| is_notice(e)) {
            self.notice = Some(*event);
        }

        if result.terminated {
            self.scheduler.cancel();
            self.record_game_over(result.score);
        } else if !self.paused {
            self.rearm();
        }

        result
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.state.set_direction(direction);
    }

    /// Pause or resume a running game; does nothing once the game is over
    pub fn toggle_pause(&mut self) {
        if !self.state.is_alive {
            return;
        }

        self.paused = !self.paused;
        if self.paused {
            self.scheduler.cancel();
        } else {
            self.rearm();
        }
        debug!(paused = self.paused, "pause toggled");
    }

    /// Throw the current game away and start a new one
    pub fn restart(&mut self) {
        // The old game's tick must be gone before the new state exists
        self.scheduler.cancel();
        self.state = self.engine.reset();
        self.paused = false;
        self.notice = None;
        self.metrics.on_game_start();
        self.rearm();
    }

    fn rearm(&mut self) {
        let delay = self.engine.current_interval(&mut self.state);
        self.scheduler.arm(delay);
    }

    fn record_game_over(&mut self, score: u32) {
        if !self.metrics.on_game_over(score) {
            return;
        }

        info!(score, "new high score");
        if let Some(store) = &self.store {
            if let Err(e) = store.save(score) {
                warn!(error = %e, path = %store.path().display(), "failed to save high score");
            }
        }
    }
}

fn is_notice(event: &GameEvent) -> bool {
    matches!(
        event,
        GameEvent::ShieldAbsorbed
            | GameEvent::LevelUp { .. }
            | GameEvent::PowerUpCollected(_)
            | GameEvent::GameOver { .. }
    )
}
