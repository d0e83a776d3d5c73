//! Error types for dtable Core
//!
//! Everything here is a configuration problem detected while a table is
//! being built. None of these errors can occur during evaluation.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown hit policy: {0}")]
    UnknownHitPolicy(String),

    #[error("Decision table '{table}' declares no output clauses")]
    NoOutputs { table: String },

    #[error(
        "Rule {rule} of decision table '{table}' has {actual} {kind} entries, expected {expected}"
    )]
    RuleArity {
        table: String,
        /// 1-based rule position
        rule: usize,
        kind: EntryKind,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Which side of a rule an arity error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Input,
    Output,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Input => f.write_str("input"),
            EntryKind::Output => f.write_str("output"),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
