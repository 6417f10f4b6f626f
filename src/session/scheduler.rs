use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Instant, Sleep, sleep};

/// One-shot, re-armable tick timer
///
/// At most one tick is pending at a time. Arming replaces whatever was
/// pending, and cancelling drops it, so a tick scheduled for an old game can
/// never fire after a restart.
#[derive(Debug, Default)]
pub struct TickScheduler {
    pending: Option<Pin<Box<Sleep>>>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the next tick `delay` from now, replacing any pending one
    pub fn arm(&mut self, delay: Duration) {
        self.pending = Some(Box::pin(sleep(delay)));
    }

    /// Drop the pending tick, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending tick is due
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|s| s.deadline())
    }

    /// Wait for the pending tick
    ///
    /// Never resolves while nothing is armed. Dropping the future before it
    /// resolves leaves the tick pending, so this is safe to use in
    /// `tokio::select!`.
    pub async fn fired(&mut self) {
        match self.pending.as_mut() {
            Some(sleep) => {
                sleep.as_mut().await;
                self.pending = None;
            }
            None => future::pending().await,
        }
    }
}
