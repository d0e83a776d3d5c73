//! Runtime error types

use dtable_core::{HitPolicy, Value};
use thiserror::Error;

/// Runtime error
///
/// Each variant ends a single evaluation call. None of them is retryable:
/// evaluating the same table with the same inputs fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// The matched rules violate the hit policy (UNIQUE with several
    /// matches, ANY with diverging outputs)
    #[error("{policy} hit policy conflict on rules {matches:?}: {reason}")]
    Conflict {
        policy: HitPolicy,
        /// 1-based positions of the conflicting rules
        matches: Vec<usize>,
        reason: String,
    },

    /// The hit policy is not enabled for this evaluator
    #[error("Hit policy {0} is not supported by this evaluator")]
    UnsupportedPolicy(HitPolicy),

    /// The input tuple is not aligned with the input clauses
    #[error("Expected {expected} input values, got {actual}")]
    InputArity { expected: usize, actual: usize },

    /// COLLECT MIN/MAX over values without a natural order
    #[error("Output '{column}' has no natural order between {left} and {right}")]
    Incomparable {
        column: String,
        left: Value,
        right: Value,
        /// 1-based positions of the matched rules
        matches: Vec<usize>,
    },
}

impl RuntimeError {
    /// Returns true for hit policy conflicts
    pub fn is_conflict(&self) -> bool {
        matches!(self, RuntimeError::Conflict { .. })
    }

    /// Rule positions involved in the failure, if any
    pub fn matches(&self) -> &[usize] {
        match self {
            RuntimeError::Conflict { matches, .. } | RuntimeError::Incomparable { matches, .. } => {
                matches
            }
            _ => &[],
        }
    }

    /// Attach the positions of the matched rules to an aggregation failure
    pub(crate) fn with_matches(mut self, positions: Vec<usize>) -> Self {
        if let RuntimeError::Incomparable { matches, .. } = &mut self {
            *matches = positions;
        }
        self
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
