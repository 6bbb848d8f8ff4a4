//! Sandwich Rush - a sandwich-stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic round engine (orders, stack, countdown, scoring)
//! - `config`: Data-driven game tuning
//! - `stats`: Per-session statistics
//! - `platform`: Browser bindings for the presentation layer

pub mod config;
pub mod error;
pub mod platform;
pub mod sim;
pub mod stats;

pub use config::{GameConfig, OrderConfig, Preset};
pub use error::{ConfigError, GameError};
pub use stats::{SessionStats, SessionSummary};

/// Game configuration constants
pub mod consts {
    /// Fixed update step for headless play (60 Hz)
    pub const TICK_MS: u64 = 16;

    /// Order shape: fillings between the buns
    pub const MIN_INTERIOR: u32 = 3;
    pub const MAX_INTERIOR: u32 = 6;
    /// Countdown per order
    pub const DEFAULT_TIME_LIMIT_MS: u64 = 30_000;

    /// Scoring
    pub const SUCCESS_POINTS: u64 = 100;
    pub const FAILURE_PENALTY: u64 = 50;

    /// Timer bar turns red past this fraction of the countdown
    pub const URGENT_THRESHOLD: f32 = 0.7;
    /// Pause between a verdict and the next order (success/fail text fade)
    pub const RESOLVE_DELAY_MS: u64 = 1_000;
    /// Largest frame delta fed to the engine (tab switches, debugger pauses)
    pub const MAX_FRAME_MS: u64 = 100;
}
