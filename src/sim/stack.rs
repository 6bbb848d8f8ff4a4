//! The sandwich being built

use serde::{Deserialize, Serialize};

use super::ingredient::Ingredient;
use crate::error::GameError;

/// Player's in-progress sandwich, bottom first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    items: Vec<Ingredient>,
}

impl Stack {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Place an ingredient on top, returning the new height
    pub fn append(&mut self, ingredient: Ingredient) -> usize {
        self.items.push(ingredient);
        self.items.len()
    }

    /// Pull out the ingredient at `index`; everything above it drops by one
    pub fn remove_at(&mut self, index: usize) -> Result<Ingredient, GameError> {
        if index >= self.items.len() {
            return Err(GameError::InvalidStackIndex {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn snapshot(&self) -> Vec<Ingredient> {
        self.items.clone()
    }

    pub fn as_slice(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
