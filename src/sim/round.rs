//! Round controller
//!
//! Drives the create-order -> stack -> verdict -> reset cycle and owns the
//! score. Inputs and timer expiry are serialized through `&mut self`. Only
//! `OrderActive` accepts a verdict, and resolving disarms the timer before
//! leaving that phase, so each round resolves exactly once.

use serde::{Deserialize, Serialize};

use super::event::{FailureReason, GameEvent, Outcome, Resolution};
use super::ingredient::Ingredient;
use super::order::{Order, OrderGenerator};
use super::stack::Stack;
use super::timer::RoundTimer;
use super::validate::{Verdict, evaluate};
use crate::config::GameConfig;
use crate::error::{ConfigError, GameError};
use crate::stats::{SessionStats, SessionSummary};

/// Where the controller is in the round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the caller to start the next round
    Idle,
    /// An order is on the board and the clock is running
    OrderActive,
    /// Verdict reached, score and stack being settled
    Resolving,
    /// Session quit; the next round starts a new session
    Ended,
}

/// What a player input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// No round was active; nothing changed
    Ignored,
    /// Stack changed, no verdict yet (carries the new height)
    Pending(usize),
    /// The input ended the round
    Resolved(Resolution),
}

/// The game-state engine for one session
#[derive(Debug, Clone)]
pub struct RoundController {
    config: GameConfig,
    generator: OrderGenerator,
    phase: RoundPhase,
    order: Option<Order>,
    stack: Stack,
    timer: RoundTimer,
    score: u64,
    round: u32,
    stats: SessionStats,
    events: Vec<GameEvent>,
}

impl RoundController {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = OrderGenerator::new(config.order.clone(), seed)?;
        Ok(Self {
            config,
            generator,
            phase: RoundPhase::Idle,
            order: None,
            stack: Stack::new(),
            timer: RoundTimer::new(),
            score: 0,
            round: 0,
            stats: SessionStats::new(),
            events: Vec::new(),
        })
    }

    /// Begin a round with a freshly generated order
    pub fn start_round(&mut self) -> &Order {
        let order = self.generator.generate();
        self.begin(order)
    }

    /// Presentation-layer name for [`Self::start_round`]
    pub fn request_new_round(&mut self) -> &Order {
        self.start_round()
    }

    /// Begin a round with a specific order instead of a generated one
    pub fn start_round_with(&mut self, order: Order) -> &Order {
        self.begin(order)
    }

    fn begin(&mut self, order: Order) -> &Order {
        if self.phase == RoundPhase::Ended {
            self.new_session();
        }

        // Old timer must be gone before the new one is armed
        self.timer.cancel();
        self.stack.clear();
        self.round += 1;

        log::info!(
            "Round {}: {} ({} ms)",
            self.round,
            order.describe(),
            order.time_limit_ms()
        );

        self.timer.start(order.time_limit_ms());
        self.phase = RoundPhase::OrderActive;
        self.events.push(GameEvent::OrderChanged(order.clone()));
        self.events.push(GameEvent::StackChanged(Vec::new()));
        self.order.insert(order)
    }

    /// Err with [`GameError::RoundNotActive`] unless an order is live
    pub fn require_active(&self) -> Result<(), GameError> {
        if self.phase == RoundPhase::OrderActive {
            Ok(())
        } else {
            Err(GameError::RoundNotActive { phase: self.phase })
        }
    }

    /// Player clicked an ingredient
    pub fn player_add_ingredient(
        &mut self,
        ingredient: Ingredient,
    ) -> Result<InputOutcome, GameError> {
        if let Err(err) = self.require_active() {
            log::debug!("Ignoring {}: {}", ingredient, err);
            return Ok(InputOutcome::Ignored);
        }

        self.stack.append(ingredient);
        Ok(self.after_mutation())
    }

    /// Player took the ingredient at `index` back off the stack
    pub fn player_remove_ingredient(&mut self, index: usize) -> Result<InputOutcome, GameError> {
        if let Err(err) = self.require_active() {
            log::debug!("Ignoring removal at {}: {}", index, err);
            return Ok(InputOutcome::Ignored);
        }

        self.stack.remove_at(index)?;
        Ok(self.after_mutation())
    }

    fn after_mutation(&mut self) -> InputOutcome {
        self.events.push(GameEvent::StackChanged(self.stack.snapshot()));

        let Some(order) = &self.order else {
            return InputOutcome::Pending(self.stack.len());
        };
        match evaluate(self.stack.as_slice(), order, self.config.validation) {
            Verdict::Pending => InputOutcome::Pending(self.stack.len()),
            Verdict::Correct => InputOutcome::Resolved(self.resolve(Outcome::Success)),
            Verdict::Incorrect => {
                InputOutcome::Resolved(self.resolve(Outcome::Failure(FailureReason::WrongOrder)))
            }
        }
    }

    /// Advance the countdown by `dt_ms`. Returns the resolution if the
    /// order ran out of time during this step.
    ///
    /// Queues one `Tick` per call while an order is active; call
    /// [`Self::drain_events`] every frame or the queue keeps growing.
    pub fn advance(&mut self, dt_ms: u64) -> Option<Resolution> {
        if let Some(handle) = self.timer.advance(dt_ms) {
            if self.phase == RoundPhase::OrderActive {
                return Some(self.resolve(Outcome::Failure(FailureReason::TimeExpired)));
            }
            log::debug!("Timer {:?} expired outside a round in {:?}", handle, self.phase);
        }

        if self.phase == RoundPhase::OrderActive {
            self.events.push(GameEvent::Tick {
                remaining_ms: self.timer.remaining_ms(),
                progress: self.timer.progress(),
                urgent: self.timer.is_urgent(self.config.urgent_threshold),
            });
        }
        None
    }

    fn resolve(&mut self, outcome: Outcome) -> Resolution {
        self.phase = RoundPhase::Resolving;

        let score_delta = match outcome {
            Outcome::Success => {
                self.score = self.score.saturating_add(self.config.success_points);
                i64::try_from(self.config.success_points).unwrap_or(i64::MAX)
            }
            Outcome::Failure(_) => {
                self.score = self.score.saturating_sub(self.config.failure_penalty);
                -i64::try_from(self.config.failure_penalty).unwrap_or(i64::MAX)
            }
        };
        self.stats.record(outcome, self.score);

        self.stack.clear();
        self.timer.cancel();
        self.order = None;

        let resolution = Resolution {
            round: self.round,
            outcome,
            score_delta,
            new_score: self.score,
        };
        log::info!(
            "Round {} resolved: {:?} ({:+}) -> score {}",
            self.round,
            outcome,
            score_delta,
            self.score
        );

        self.events.push(GameEvent::StackChanged(Vec::new()));
        self.events.push(GameEvent::RoundResolved(resolution));
        self.phase = RoundPhase::Idle;
        resolution
    }

    /// Leave the game: stop the clock and drop the round
    pub fn request_quit(&mut self) -> SessionSummary {
        self.timer.cancel();
        self.order = None;
        self.stack.clear();
        self.phase = RoundPhase::Ended;

        let summary = SessionSummary {
            final_score: self.score,
            stats: self.stats.clone(),
        };
        log::info!(
            "Session ended: score {} after {} rounds",
            summary.final_score,
            summary.stats.rounds_played
        );
        self.events.push(GameEvent::SessionEnded(summary.clone()));
        summary
    }

    /// Reset score and stats for a fresh session
    pub fn new_session(&mut self) {
        self.timer.cancel();
        self.order = None;
        self.stack.clear();
        self.score = 0;
        self.round = 0;
        self.stats = SessionStats::new();
        self.phase = RoundPhase::Idle;
    }

    /// Take all queued events, oldest first.
    ///
    /// Events accumulate until drained; the presentation layer should drain
    /// once per frame after feeding input and calling [`Self::advance`].
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// 1-based number of the current (or last) round; 0 before the first
    pub fn round_number(&self) -> u32 {
        self.round
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn stack(&self) -> &[Ingredient] {
        self.stack.as_slice()
    }

    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    pub fn remaining_ms(&self) -> u64 {
        self.timer.remaining_ms()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
