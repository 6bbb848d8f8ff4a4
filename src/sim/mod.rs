//! Deterministic round engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-driven clock only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod event;
pub mod ingredient;
pub mod order;
pub mod round;
pub mod stack;
pub mod timer;
pub mod validate;

pub use autoplay::{AutoPlayer, BotAction};
pub use event::{FailureReason, GameEvent, GameListener, Outcome, Resolution};
pub use ingredient::Ingredient;
pub use order::{Order, OrderGenerator};
pub use round::{InputOutcome, RoundController, RoundPhase};
pub use stack::Stack;
pub use timer::{RoundTimer, TimerHandle};
pub use validate::{ValidationPolicy, Verdict, evaluate, is_complete, is_correct};
