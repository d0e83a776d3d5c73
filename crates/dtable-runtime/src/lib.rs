//! dtable Runtime - Evaluation engine for decision tables
//!
//! Given an evaluated input tuple, this crate finds the matching rules of
//! a decision table and combines their outputs according to the table's
//! hit policy. Evaluation is a pure function of its inputs: nothing is
//! cached or shared between calls, so tables can be evaluated from any
//! number of threads without coordination.

pub mod config;
pub mod engine;
pub mod error;
pub mod result;

// Re-export main types
pub use config::EvaluatorConfig;
pub use engine::{evaluate, DecisionTableEvaluator, MatchedRule};
pub use error::{Result, RuntimeError};
pub use result::{DecisionValue, Evaluation};
