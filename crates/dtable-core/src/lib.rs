//! dtable Core - Core types for decision table evaluation
//!
//! This crate provides the data side of a decision table:
//! - Value types for inputs and outputs
//! - Input/output clause descriptors with optional ordered domains
//! - Decision rules and the predicate seam used to test input entries
//! - The closed set of hit policies
//! - Validated, immutable decision tables
//!
//! Evaluation lives in `dtable-runtime`.

pub mod error;
pub mod model;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use model::{
    CompareOp, DecisionRule, DecisionTable, HitPolicy, InputClause, InputTest, OutputClause,
    UnaryTest,
};
pub use types::Value;
