//! Sandwich Rush entry point
//!
//! The browser build starts from `platform::web`. Natively there is no
//! renderer, so the binary plays a headless demo session with the idle bot.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sandwich_rush::GameConfig;

    env_logger::init();
    log::info!("Sandwich Rush (native) starting...");
    log::info!("Native mode runs the idle bot - serve the wasm build for the real game");

    let config = GameConfig::load();
    match demo::run(config, 12345, 10) {
        Ok(summary) => {
            println!("\nFinal score: {}", summary.final_score);
            println!(
                "Orders: {} correct, {} wrong, {} late (best streak {})",
                summary.stats.orders_completed,
                summary.stats.wrong_orders,
                summary.stats.expired_orders,
                summary.stats.best_streak
            );
        }
        Err(err) => {
            log::error!("Invalid config: {}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use sandwich_rush::consts::TICK_MS;
    use sandwich_rush::sim::{AutoPlayer, BotAction, GameEvent, Outcome, RoundController};
    use sandwich_rush::{ConfigError, GameConfig, SessionSummary};

    /// Play `rounds` rounds at a fixed timestep and return the summary
    pub fn run(config: GameConfig, seed: u64, rounds: u32) -> Result<SessionSummary, ConfigError> {
        let resolve_delay = config.resolve_delay_ms;
        let mut controller = RoundController::new(config, seed)?;
        let mut bot = AutoPlayer::new(seed ^ 0x5eed, 0.85, 400);

        controller.start_round();
        let mut played = 0;
        let mut cooldown_ms: u64 = 0;

        while played < rounds {
            if cooldown_ms > 0 {
                // Verdict text is on screen; the next order waits
                cooldown_ms = cooldown_ms.saturating_sub(TICK_MS);
                if cooldown_ms == 0 {
                    controller.start_round();
                }
                continue;
            }

            if let BotAction::Add(ingredient) = bot.next_action(&controller, TICK_MS) {
                if let Err(err) = controller.player_add_ingredient(ingredient) {
                    log::warn!("Bot input rejected: {}", err);
                }
            }
            controller.advance(TICK_MS);

            for event in controller.drain_events() {
                match event {
                    GameEvent::OrderChanged(order) => println!("Order: {}", order.describe()),
                    GameEvent::RoundResolved(r) => {
                        let verdict = match r.outcome {
                            Outcome::Success => "Perfect!".to_string(),
                            Outcome::Failure(reason) => format!("Wrong Order! ({:?})", reason),
                        };
                        println!("  {} {:+} -> {}", verdict, r.score_delta, r.new_score);
                        played += 1;
                        cooldown_ms = resolve_delay.max(TICK_MS);
                    }
                    _ => {}
                }
            }
        }

        Ok(controller.request_quit())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use sandwich_rush::GameConfig;

    #[test]
    fn test_demo_plays_requested_rounds() {
        let summary = super::demo::run(GameConfig::default(), 42, 3).unwrap();
        assert_eq!(summary.stats.rounds_played, 3);
        assert_eq!(
            summary.stats.orders_completed + summary.stats.wrong_orders + summary.stats.expired_orders,
            3
        );
    }

    #[test]
    fn test_demo_rejects_bad_config() {
        let mut config = GameConfig::default();
        config.order.time_limit_ms = 0;
        assert!(super::demo::run(config, 1, 1).is_err());
    }
}
