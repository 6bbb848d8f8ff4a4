//! Per-session statistics
//!
//! Kept in memory only; a new session starts from zero.

use serde::{Deserialize, Serialize};

use crate::sim::{FailureReason, Outcome};

/// Running tally for the current session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rounds that reached a verdict
    pub rounds_played: u32,
    pub orders_completed: u32,
    pub wrong_orders: u32,
    pub expired_orders: u32,
    /// Consecutive correct sandwiches
    pub streak: u32,
    pub best_streak: u32,
    pub best_score: u64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verdict and the score it left behind
    pub fn record(&mut self, outcome: Outcome, score: u64) {
        self.rounds_played += 1;
        match outcome {
            Outcome::Success => {
                self.orders_completed += 1;
                self.streak += 1;
                self.best_streak = self.best_streak.max(self.streak);
            }
            Outcome::Failure(reason) => {
                match reason {
                    FailureReason::WrongOrder => self.wrong_orders += 1,
                    FailureReason::TimeExpired => self.expired_orders += 1,
                }
                self.streak = 0;
            }
        }
        self.best_score = self.best_score.max(score);
    }

    /// Fraction of rounds served correctly (0 when nothing was played)
    pub fn accuracy(&self) -> f32 {
        if self.rounds_played == 0 {
            return 0.0;
        }
        self.orders_completed as f32 / self.rounds_played as f32
    }
}

/// What the game-over screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub final_score: u64,
    pub stats: SessionStats,
}
