//! Order generation
//!
//! An order is bottom bun, a random run of fillings, top bun. Generation is
//! a pure function of the RNG so a seed fully determines a session's orders.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ingredient::Ingredient;
use crate::config::OrderConfig;
use crate::error::ConfigError;

/// The sandwich a customer asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOrder")]
pub struct Order {
    ingredients: Vec<Ingredient>,
    time_limit_ms: u64,
}

/// Wire shape of an [`Order`], checked before it becomes one
#[derive(Deserialize)]
struct RawOrder {
    ingredients: Vec<Ingredient>,
    time_limit_ms: u64,
}

impl TryFrom<RawOrder> for Order {
    type Error = ConfigError;

    fn try_from(raw: RawOrder) -> Result<Self, Self::Error> {
        Order::fixed(raw.ingredients, raw.time_limit_ms)
    }
}

impl Order {
    /// Build a specific order (scripted rounds, tests)
    pub fn fixed(ingredients: Vec<Ingredient>, time_limit_ms: u64) -> Result<Self, ConfigError> {
        if ingredients.is_empty() {
            return Err(ConfigError::EmptyOrder);
        }
        if time_limit_ms == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(Self {
            ingredients,
            time_limit_ms,
        })
    }

    /// Ingredients from bottom to top
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn time_limit_ms(&self) -> u64 {
        self.time_limit_ms
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Fillings between the first and last ingredient
    pub fn interior(&self) -> &[Ingredient] {
        match self.ingredients.len() {
            0..=2 => &[],
            n => &self.ingredients[1..n - 1],
        }
    }

    /// Human-readable recipe, e.g. `bread_bottom + cheese + bread_top`
    pub fn describe(&self) -> String {
        self.ingredients
            .iter()
            .map(Ingredient::as_str)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Generate one order from the given random source.
///
/// `config` must already have passed [`OrderConfig::validate`].
pub(crate) fn generate_order<R: Rng>(rng: &mut R, config: &OrderConfig) -> Order {
    let interior = rng.random_range(config.min_interior..=config.max_interior) as usize;

    let mut ingredients = Vec::with_capacity(interior + 2);
    ingredients.push(config.bottom);
    for _ in 0..interior {
        let pick = rng.random_range(0..Ingredient::FILLINGS.len());
        ingredients.push(Ingredient::FILLINGS[pick]);
    }
    ingredients.push(config.top);

    Order {
        ingredients,
        time_limit_ms: config.time_limit_ms,
    }
}

/// Seeded order source for a session
#[derive(Debug, Clone)]
pub struct OrderGenerator {
    config: OrderConfig,
    rng: Pcg32,
}

impl OrderGenerator {
    pub fn new(config: OrderConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn generate(&mut self) -> Order {
        generate_order(&mut self.rng, &self.config)
    }

    pub fn config(&self) -> &OrderConfig {
        &self.config
    }
}
