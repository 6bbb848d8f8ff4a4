//! Events the engine reports to the presentation layer

use serde::{Deserialize, Serialize};

use super::ingredient::Ingredient;
use super::order::Order;
use crate::stats::SessionSummary;

/// Why a round failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// Stack did not match the order
    WrongOrder,
    /// Countdown ran out
    TimeExpired,
}

/// Verdict of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure(FailureReason),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// How a round ended and what it did to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// 1-based round number within the session
    pub round: u32,
    pub outcome: Outcome,
    /// Nominal change (+success points or -penalty), before the 0 floor
    pub score_delta: i64,
    pub new_score: u64,
}

/// Notification queued by the controller, drained by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum GameEvent {
    OrderChanged(Order),
    StackChanged(Vec<Ingredient>),
    Tick {
        remaining_ms: u64,
        progress: f32,
        urgent: bool,
    },
    RoundResolved(Resolution),
    SessionEnded(SessionSummary),
}

impl GameEvent {
    /// Forward this event to the matching listener hook
    pub fn dispatch<L: GameListener + ?Sized>(&self, listener: &mut L) {
        match self {
            GameEvent::OrderChanged(order) => listener.on_order_changed(order),
            GameEvent::StackChanged(stack) => listener.on_stack_changed(stack),
            GameEvent::Tick {
                remaining_ms,
                progress,
                urgent,
            } => listener.on_tick(*remaining_ms, *progress, *urgent),
            GameEvent::RoundResolved(resolution) => listener.on_round_resolved(resolution),
            GameEvent::SessionEnded(summary) => listener.on_session_ended(summary),
        }
    }
}

/// Subscriber for engine events; implement only the hooks you care about
pub trait GameListener {
    fn on_order_changed(&mut self, _order: &Order) {}
    fn on_stack_changed(&mut self, _stack: &[Ingredient]) {}
    fn on_tick(&mut self, _remaining_ms: u64, _progress: f32, _urgent: bool) {}
    fn on_round_resolved(&mut self, _resolution: &Resolution) {}
    fn on_session_ended(&mut self, _summary: &SessionSummary) {}
}
