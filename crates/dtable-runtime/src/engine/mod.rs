//! Evaluation engine
//!
//! Evaluator → rule matcher → hit policy strategy → aggregation / output
//! normalization.

pub mod aggregate;
pub mod evaluator;
pub mod hit_policy;
pub mod matcher;
pub mod normalize;

#[cfg(test)]
mod tests;

// Re-export for convenience
pub use evaluator::{evaluate, DecisionTableEvaluator};
pub use matcher::MatchedRule;
