//! Error types for the round engine and its configuration

use thiserror::Error;

use crate::sim::RoundPhase;

/// Errors reported back to the caller of a player action.
///
/// None of these are fatal: the game state is left untouched and the loop
/// carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Tried to remove a stack position that does not exist
    #[error("stack index {index} out of range (stack holds {len})")]
    InvalidStackIndex { index: usize, len: usize },
    /// An input arrived while no order was active
    #[error("no active round (phase: {phase:?})")]
    RoundNotActive { phase: RoundPhase },
}

/// Errors raised while building or loading a [`GameConfig`](crate::GameConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("interior range {min}..={max} is empty")]
    InvalidRange { min: u32, max: u32 },
    #[error("time limit must be greater than zero")]
    ZeroTimeLimit,
    #[error("urgent threshold {0} is outside 0..=1")]
    InvalidThreshold(f32),
    #[error("{name} of {value} points is too large")]
    PointsTooLarge { name: &'static str, value: u64 },
    #[error("an order needs at least one ingredient")]
    EmptyOrder,
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
