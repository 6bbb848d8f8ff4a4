//! Round countdown
//!
//! Time only moves when the owner calls [`RoundTimer::advance`], so the
//! countdown is independent of frame rate and of any animation system.
//! Each `start` hands out a new [`TimerHandle`]; expiry reports the handle
//! that fired so the owner can ignore timers it has already moved past.

/// Identifies one arming of a [`RoundTimer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Armed {
    handle: TimerHandle,
    duration_ms: u64,
    elapsed_ms: u64,
}

/// Single-shot countdown, at most one armed at a time
#[derive(Debug, Clone, Default)]
pub struct RoundTimer {
    armed: Option<Armed>,
    generation: u64,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, cancelling whatever was armed before
    pub fn start(&mut self, duration_ms: u64) -> TimerHandle {
        if self.cancel() {
            log::debug!("Timer restarted before expiry");
        }
        self.generation += 1;
        let handle = TimerHandle(self.generation);
        self.armed = Some(Armed {
            handle,
            duration_ms,
            elapsed_ms: 0,
        });
        handle
    }

    /// Disarm; returns whether a timer was armed
    pub fn cancel(&mut self) -> bool {
        self.armed.take().is_some()
    }

    /// Move time forward. Returns the handle of the timer if it expired
    /// during this step; the timer is disarmed afterwards so it fires once.
    pub fn advance(&mut self, dt_ms: u64) -> Option<TimerHandle> {
        let armed = self.armed.as_mut()?;
        armed.elapsed_ms = armed.elapsed_ms.saturating_add(dt_ms);
        if armed.elapsed_ms >= armed.duration_ms {
            return self.armed.take().map(|a| a.handle);
        }
        None
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Handle of the currently armed timer
    pub fn handle(&self) -> Option<TimerHandle> {
        self.armed.as_ref().map(|a| a.handle)
    }

    /// Fraction elapsed: 0 = just started, 1 = fully elapsed
    pub fn progress(&self) -> f32 {
        match &self.armed {
            Some(a) if a.duration_ms > 0 => {
                (a.elapsed_ms as f64 / a.duration_ms as f64).clamp(0.0, 1.0) as f32
            }
            Some(_) => 1.0,
            None => 0.0,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.armed.as_ref().map(|a| a.elapsed_ms).unwrap_or(0)
    }

    pub fn remaining_ms(&self) -> u64 {
        self.armed
            .as_ref()
            .map(|a| a.duration_ms.saturating_sub(a.elapsed_ms))
            .unwrap_or(0)
    }

    /// Countdown has passed `threshold` of its duration
    pub fn is_urgent(&self, threshold: f32) -> bool {
        self.is_armed() && self.progress() > threshold
    }
}
