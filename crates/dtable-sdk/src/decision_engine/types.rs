//! Type definitions for DecisionEngine

use crate::message::{DecisionMessage, Severity};
use dtable_core::Value;
use serde::Serialize;

/// Decision response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionResponse {
    /// Name of the evaluated decision table
    pub table: String,

    /// Flattened result: `Null` when nothing matched or evaluation failed,
    /// a list for multi-valued results
    pub result: Value,

    /// 1-based positions of the matched rules
    pub matches: Vec<usize>,

    /// Messages raised while evaluating
    pub messages: Vec<DecisionMessage>,
}

impl DecisionResponse {
    /// Returns true if any message has `Error` severity
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(DecisionMessage::is_error)
    }

    /// Messages of the given severity
    pub fn messages_with(&self, severity: Severity) -> impl Iterator<Item = &DecisionMessage> {
        self.messages.iter().filter(move |m| m.severity == severity)
    }
}
