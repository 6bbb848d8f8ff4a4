//! Checking a stack against its order

use serde::{Deserialize, Serialize};

use super::ingredient::Ingredient;
use super::order::Order;

/// When a wrong sandwich gets called out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValidationPolicy {
    /// Only judge once the stack is as tall as the order
    #[default]
    AtParity,
    /// Fail as soon as any placed ingredient is out of place
    FailFast,
}

/// Result of checking the stack after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pending,
    Correct,
    Incorrect,
}

/// Stack is as tall as the order
pub fn is_complete(stack: &[Ingredient], order: &Order) -> bool {
    stack.len() == order.len()
}

/// Stack matches the order exactly, position by position
pub fn is_correct(stack: &[Ingredient], order: &Order) -> bool {
    stack == order.ingredients()
}

pub fn evaluate(stack: &[Ingredient], order: &Order, policy: ValidationPolicy) -> Verdict {
    if is_complete(stack, order) {
        return if is_correct(stack, order) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
    }

    match policy {
        ValidationPolicy::AtParity => Verdict::Pending,
        ValidationPolicy::FailFast => {
            let prefix_ok = stack.len() < order.len()
                && stack.iter().zip(order.ingredients()).all(|(a, b)| a == b);
            if prefix_ok {
                Verdict::Pending
            } else {
                Verdict::Incorrect
            }
        }
    }
}
