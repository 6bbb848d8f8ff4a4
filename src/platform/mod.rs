//! Platform abstraction layer
//!
//! The engine itself never touches the browser. On wasm32 the `web` module
//! exposes it to the JavaScript scene: player input comes in, queued
//! [`GameEvent`](crate::sim::GameEvent)s go out as JSON.

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::consts::MAX_FRAME_MS;

/// Tracks the previous frame timestamp and turns it into a clamped delta
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous call. The first call returns 0; long
    /// gaps are clamped so a backgrounded tab does not eat a whole order.
    pub fn delta(&mut self, now_ms: f64) -> u64 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => (now_ms - last).round() as u64,
            _ => 0,
        };
        self.last_ms = Some(now_ms);
        dt.min(MAX_FRAME_MS)
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
