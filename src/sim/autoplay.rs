//! Idle/demo mode: a bot that plays rounds on its own
//!
//! It clicks one ingredient every `step_ms`, usually the right one. A miss
//! is a random filling, after which it keeps building until the order
//! resolves. Deterministic for a given seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ingredient::Ingredient;
use super::round::{RoundController, RoundPhase};

/// What the bot wants to do this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotAction {
    Add(Ingredient),
    /// Nothing to do (no order, or waiting for the next click)
    Wait,
}

#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: Pcg32,
    /// Chance (0-1) of clicking the right ingredient
    accuracy: f32,
    /// Time between clicks
    step_ms: u64,
    since_last_ms: u64,
}

impl AutoPlayer {
    pub fn new(seed: u64, accuracy: f32, step_ms: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            accuracy: accuracy.clamp(0.0, 1.0),
            step_ms,
            since_last_ms: 0,
        }
    }

    pub fn step_ms(&self) -> u64 {
        self.step_ms
    }

    /// Let `dt_ms` pass and decide whether to click
    pub fn next_action(&mut self, controller: &RoundController, dt_ms: u64) -> BotAction {
        if controller.phase() != RoundPhase::OrderActive {
            self.since_last_ms = 0;
            return BotAction::Wait;
        }
        let Some(order) = controller.order() else {
            return BotAction::Wait;
        };

        self.since_last_ms += dt_ms;
        if self.since_last_ms < self.step_ms {
            return BotAction::Wait;
        }
        self.since_last_ms = 0;

        let Some(&wanted) = order.ingredients().get(controller.stack().len()) else {
            return BotAction::Wait;
        };
        if self.rng.random::<f32>() < self.accuracy {
            return BotAction::Add(wanted);
        }

        // Fumble: anything but the ingredient we needed
        let misses: Vec<_> = Ingredient::FILLINGS
            .iter()
            .copied()
            .filter(|i| *i != wanted)
            .collect();
        BotAction::Add(misses[self.rng.random_range(0..misses.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{GameEvent, Outcome};

    /// Run the bot for `rounds` rounds, draining events each frame like a
    /// real scene. Returns the controller and how many wins were reported.
    fn play(accuracy: f32, rounds: u32) -> (RoundController, usize) {
        let mut ctrl = RoundController::new(GameConfig::default(), 99).unwrap();
        let mut bot = AutoPlayer::new(7, accuracy, 500);
        let dt = 100;

        ctrl.start_round();
        let mut played = 0;
        let mut wins = 0;
        while played < rounds {
            if let BotAction::Add(ingredient) = bot.next_action(&ctrl, dt) {
                ctrl.player_add_ingredient(ingredient).unwrap();
            }
            ctrl.advance(dt);
            wins += ctrl
                .drain_events()
                .filter(|e| matches!(e, GameEvent::RoundResolved(r) if r.outcome == Outcome::Success))
                .count();
            if ctrl.phase() == RoundPhase::Idle {
                played += 1;
                ctrl.start_round();
            }
        }
        (ctrl, wins)
    }

    #[test]
    fn test_perfect_bot_always_succeeds() {
        let (ctrl, wins) = play(1.0, 10);
        assert_eq!(wins, 10);
        assert_eq!(ctrl.stats().orders_completed, 10);
    }

    #[test]
    fn test_hopeless_bot_never_succeeds() {
        let (ctrl, wins) = play(0.0, 5);
        assert_eq!(wins, 0);
        assert_eq!(ctrl.stats().orders_completed, 0);
        assert_eq!(ctrl.stats().wrong_orders, 5);
        assert_eq!(ctrl.score(), 0);
    }

    #[test]
    fn test_waits_between_clicks() {
        let mut ctrl = RoundController::new(GameConfig::default(), 1).unwrap();
        let mut bot = AutoPlayer::new(1, 1.0, 500);
        assert_eq!(bot.next_action(&ctrl, 1000), BotAction::Wait);

        ctrl.start_round();
        assert_eq!(bot.next_action(&ctrl, 200), BotAction::Wait);
        assert_eq!(
            bot.next_action(&ctrl, 300),
            BotAction::Add(Ingredient::BreadBottom)
        );
    }
}
