//! Game configuration
//!
//! Order shape, scoring and timing live here so variants of the game can be
//! expressed as data instead of code.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{Ingredient, ValidationPolicy};

/// Named configurations matching the two ways the game has been tuned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Randomized 3-6 fillings, 30 seconds per order
    #[default]
    Classic,
    /// Fixed 3 fillings, 20 seconds per order
    Rush,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Rush => "Rush",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "rush" => Some(Preset::Rush),
            _ => None,
        }
    }
}

/// Shape of generated orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    /// Fewest fillings between the buns
    pub min_interior: u32,
    /// Most fillings between the buns (inclusive)
    pub max_interior: u32,
    /// Countdown for each order
    pub time_limit_ms: u64,
    /// Always the first ingredient of an order
    pub bottom: Ingredient,
    /// Always the last ingredient of an order
    pub top: Ingredient,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            min_interior: MIN_INTERIOR,
            max_interior: MAX_INTERIOR,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            bottom: Ingredient::BreadBottom,
            top: Ingredient::BreadTop,
        }
    }
}

impl OrderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_interior > self.max_interior {
            return Err(ConfigError::InvalidRange {
                min: self.min_interior,
                max: self.max_interior,
            });
        }
        if self.time_limit_ms == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub order: OrderConfig,

    // === Scoring ===
    /// Points for a correct sandwich
    pub success_points: u64,
    /// Points lost for a wrong or late sandwich (score floors at 0)
    pub failure_penalty: u64,

    // === Rules ===
    /// When a wrong sandwich is detected
    pub validation: ValidationPolicy,
    /// Progress past which the countdown counts as running out
    pub urgent_threshold: f32,

    // === Presentation ===
    /// Pause the caller should leave between a verdict and the next order
    pub resolve_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            order: OrderConfig::default(),
            success_points: SUCCESS_POINTS,
            failure_penalty: FAILURE_PENALTY,
            validation: ValidationPolicy::default(),
            urgent_threshold: URGENT_THRESHOLD,
            resolve_delay_ms: RESOLVE_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Create config from a preset
    pub fn from_preset(preset: Preset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Apply a preset's order shape and timing
    pub fn apply_preset(&mut self, preset: Preset) {
        match preset {
            Preset::Classic => {
                self.order.min_interior = MIN_INTERIOR;
                self.order.max_interior = MAX_INTERIOR;
                self.order.time_limit_ms = DEFAULT_TIME_LIMIT_MS;
            }
            Preset::Rush => {
                self.order.min_interior = 3;
                self.order.max_interior = 3;
                self.order.time_limit_ms = 20_000;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.order.validate()?;
        // Deltas are reported as i64
        for (name, value) in [
            ("success_points", self.success_points),
            ("failure_penalty", self.failure_penalty),
        ] {
            if i64::try_from(value).is_err() {
                return Err(ConfigError::PointsTooLarge { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.urgent_threshold) {
            return Err(ConfigError::InvalidThreshold(self.urgent_threshold));
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Environment variable naming a JSON config file
    pub const CONFIG_ENV: &'static str = "SANDWICH_RUSH_CONFIG";

    /// Read and validate a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load config from the environment, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(std::env::var(Self::CONFIG_ENV).ok())
    }

    /// Load from an optional config path; a missing or broken file logs a
    /// warning and yields defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<String>) -> Self {
        let Some(path) = path else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::from_path(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    /// Browser builds always start from defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}
