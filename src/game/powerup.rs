use std::time::Duration;

use rand::Rng;

use super::rules::{BOOTS_DURATION, COFFEE_DURATION};
use super::state::Position;

/// The kinds of power-up that can appear on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Doubles points per food for a while
    Coffee,
    /// Speeds the snake up for a while
    Boots,
    /// Absorbs one collision
    Shield,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Coffee, PowerUpKind::Boots, PowerUpKind::Shield];

    /// Pick a kind uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A power-up lying on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    pub position: Position,
    pub kind: PowerUpKind,
    pub remaining_ticks: u32,
}

impl PowerUp {
    pub fn new(position: Position, kind: PowerUpKind, remaining_ticks: u32) -> Self {
        Self {
            position,
            kind,
            remaining_ticks,
        }
    }
}

/// Active modifiers picked up from power-ups
///
/// Coffee and boots hold a deadline on the game clock; `None` means inactive.
/// The shield is a plain charge counter with no expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    pub coffee_until: Option<Duration>,
    pub boots_until: Option<Duration>,
    pub shield: u32,
}

impl Effects {
    /// Activate the effect of a collected power-up at time `now`
    pub fn apply(&mut self, kind: PowerUpKind, now: Duration) {
        match kind {
            PowerUpKind::Coffee => self.coffee_until = Some(now + COFFEE_DURATION),
            PowerUpKind::Boots => self.boots_until = Some(now + BOOTS_DURATION),
            PowerUpKind::Shield => self.shield += 1,
        }
    }

    pub fn coffee_active(&self, now: Duration) -> bool {
        self.coffee_until.is_some_and(|until| now < until)
    }

    pub fn boots_active(&self, now: Duration) -> bool {
        self.boots_until.is_some_and(|until| now < until)
    }

    /// Drop coffee once its deadline has passed
    pub fn expire_coffee(&mut self, now: Duration) {
        if self.coffee_until.is_some_and(|until| now > until) {
            self.coffee_until = None;
        }
    }

    /// Drop boots once its deadline has been reached
    pub fn expire_boots(&mut self, now: Duration) {
        if self.boots_until.is_some_and(|until| now >= until) {
            self.boots_until = None;
        }
    }

    /// Spend one shield charge, returning false if there was none
    pub fn consume_shield(&mut self) -> bool {
        if self.shield == 0 {
            return false;
        }
        self.shield -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_coffee_window() {
        let mut effects = Effects::default();
        let start = Duration::from_secs(5);
        effects.apply(PowerUpKind::Coffee, start);

        assert!(effects.coffee_active(start));
        assert!(effects.coffee_active(start + Duration::from_millis(9_999)));
        assert!(!effects.coffee_active(start + COFFEE_DURATION));

        effects.expire_coffee(start + COFFEE_DURATION);
        assert!(effects.coffee_until.is_some());
        effects.expire_coffee(start + COFFEE_DURATION + Duration::from_millis(1));
        assert_eq!(effects.coffee_until, None);
    }

    #[test]
    fn test_boots_window() {
        let mut effects = Effects::default();
        effects.apply(PowerUpKind::Boots, Duration::ZERO);

        assert!(effects.boots_active(Duration::from_secs(7)));
        assert!(!effects.boots_active(BOOTS_DURATION));

        effects.expire_boots(Duration::from_secs(7));
        assert!(effects.boots_until.is_some());
        effects.expire_boots(BOOTS_DURATION);
        assert_eq!(effects.boots_until, None);
    }

    #[test]
    fn test_reapplying_refreshes_deadline() {
        let mut effects = Effects::default();
        effects.apply(PowerUpKind::Coffee, Duration::ZERO);
        effects.apply(PowerUpKind::Coffee, Duration::from_secs(6));
        assert!(effects.coffee_active(Duration::from_secs(15)));
    }

    #[test]
    fn test_shield_stacks_and_consumes() {
        let mut effects = Effects::default();
        assert!(!effects.consume_shield());

        effects.apply(PowerUpKind::Shield, Duration::ZERO);
        effects.apply(PowerUpKind::Shield, Duration::ZERO);
        assert_eq!(effects.shield, 2);

        assert!(effects.consume_shield());
        assert_eq!(effects.shield, 1);
        assert!(effects.consume_shield());
        assert!(!effects.consume_shield());
        assert_eq!(effects.shield, 0);
    }

    #[test]
    fn test_random_kind_covers_all() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let kind = PowerUpKind::random(&mut rng);
            let idx = PowerUpKind::ALL.iter().position(|k| *k == kind).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);
    }
}
