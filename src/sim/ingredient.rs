//! Ingredient catalog

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every ingredient the kitchen offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    BreadTop,
    BreadBottom,
    Lettuce,
    Cheese,
    Tomato,
    Meat,
    Bacon,
    Egg,
    Mayo,
    Mustard,
    Ketchup,
    Onion,
}

impl Ingredient {
    /// Full catalog, in button order (left column then right column)
    pub const ALL: [Ingredient; 12] = [
        Ingredient::BreadTop,
        Ingredient::BreadBottom,
        Ingredient::Lettuce,
        Ingredient::Cheese,
        Ingredient::Tomato,
        Ingredient::Meat,
        Ingredient::Bacon,
        Ingredient::Egg,
        Ingredient::Mayo,
        Ingredient::Mustard,
        Ingredient::Ketchup,
        Ingredient::Onion,
    ];

    /// Everything that can go between the buns
    pub const FILLINGS: [Ingredient; 10] = [
        Ingredient::Lettuce,
        Ingredient::Cheese,
        Ingredient::Tomato,
        Ingredient::Meat,
        Ingredient::Bacon,
        Ingredient::Egg,
        Ingredient::Mayo,
        Ingredient::Mustard,
        Ingredient::Ketchup,
        Ingredient::Onion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ingredient::BreadTop => "bread_top",
            Ingredient::BreadBottom => "bread_bottom",
            Ingredient::Lettuce => "lettuce",
            Ingredient::Cheese => "cheese",
            Ingredient::Tomato => "tomato",
            Ingredient::Meat => "meat",
            Ingredient::Bacon => "bacon",
            Ingredient::Egg => "egg",
            Ingredient::Mayo => "mayo",
            Ingredient::Mustard => "mustard",
            Ingredient::Ketchup => "ketchup",
            Ingredient::Onion => "onion",
        }
    }

    /// Look up an ingredient by its asset identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == id)
    }

    pub fn is_bun(&self) -> bool {
        matches!(self, Ingredient::BreadTop | Ingredient::BreadBottom)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
