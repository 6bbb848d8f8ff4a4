//! Browser bindings
//!
//! The JavaScript scene owns rendering and input. It calls into [`WebGame`]
//! on clicks and once per frame, then drains events to update the display.

use wasm_bindgen::prelude::*;

use super::FrameClock;
use crate::config::{GameConfig, Preset};
use crate::sim::{Ingredient, InputOutcome, RoundController};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Sandwich Rush starting...");
}

/// Current time from the page's high-resolution clock
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Game instance handed to the JavaScript scene
#[wasm_bindgen]
pub struct WebGame {
    controller: RoundController,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game. `preset` is "classic" or "rush"; unknown names fall
    /// back to the default config.
    #[wasm_bindgen(constructor)]
    pub fn new(preset: Option<String>) -> Result<WebGame, JsValue> {
        let config = match preset.as_deref().and_then(Preset::from_name) {
            Some(preset) => GameConfig::from_preset(preset),
            None => GameConfig::load(),
        };
        let seed = js_sys::Date::now() as u64;
        let controller = RoundController::new(config, seed).map_err(js_error)?;
        Ok(WebGame {
            controller,
            clock: FrameClock::new(),
        })
    }

    /// Scene entry or "next order" after the verdict fade
    #[wasm_bindgen(js_name = startRound)]
    pub fn start_round(&mut self) {
        self.clock.reset();
        self.controller.start_round();
    }

    /// Returns true if the click ended the round
    #[wasm_bindgen(js_name = addIngredient)]
    pub fn add_ingredient(&mut self, id: &str) -> Result<bool, JsValue> {
        let ingredient = Ingredient::from_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("unknown ingredient: {}", id)))?;
        let outcome = self
            .controller
            .player_add_ingredient(ingredient)
            .map_err(js_error)?;
        Ok(matches!(outcome, InputOutcome::Resolved(_)))
    }

    #[wasm_bindgen(js_name = removeIngredient)]
    pub fn remove_ingredient(&mut self, index: usize) -> Result<bool, JsValue> {
        let outcome = self
            .controller
            .player_remove_ingredient(index)
            .map_err(js_error)?;
        Ok(matches!(outcome, InputOutcome::Resolved(_)))
    }

    /// Call once per frame
    pub fn update(&mut self) {
        let dt = self.clock.delta(now_ms());
        self.controller.advance(dt);
    }

    /// Leave to the game-over screen; returns the summary as JSON
    pub fn quit(&mut self) -> Result<String, JsValue> {
        let summary = self.controller.request_quit();
        serde_json::to_string(&summary).map_err(js_error)
    }

    pub fn score(&self) -> f64 {
        self.controller.score() as f64
    }

    /// Timer bar fill, 0 = full time left
    pub fn progress(&self) -> f32 {
        self.controller.progress()
    }

    /// How long the scene should wait before starting the next round
    #[wasm_bindgen(js_name = resolveDelayMs)]
    pub fn resolve_delay_ms(&self) -> f64 {
        self.controller.config().resolve_delay_ms as f64
    }

    /// All queued events as a JSON array
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        let events: Vec<_> = self.controller.drain_events().collect();
        serde_json::to_string(&events).map_err(js_error)
    }
}
