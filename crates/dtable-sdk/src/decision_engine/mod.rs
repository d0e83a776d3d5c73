//! Decision engine over a set of named decision tables

mod engine;
mod types;

pub use engine::DecisionEngine;
pub use types::DecisionResponse;
