//! Decision table evaluation listeners
//!
//! Listeners observe every evaluation performed through a
//! [`DecisionEngine`](crate::DecisionEngine). They are notified before the
//! rules are matched and after the hit policy has run, whether it
//! succeeded or not.

use dtable_core::Value;

/// Raised before a decision table is evaluated
#[derive(Debug, Clone, Copy)]
pub struct BeforeEvaluateDecisionTableEvent<'a> {
    pub table_name: &'a str,
    pub inputs: &'a [Value],
}

/// Raised after a decision table has been evaluated
#[derive(Debug, Clone, Copy)]
pub struct AfterEvaluateDecisionTableEvent<'a> {
    pub table_name: &'a str,
    pub inputs: &'a [Value],
    /// 1-based positions of the matched rules
    pub matches: &'a [usize],
    /// Flattened result, `Null` when evaluation failed
    pub result: &'a Value,
    /// Error text when evaluation failed
    pub error: Option<&'a str>,
}

impl AfterEvaluateDecisionTableEvent<'_> {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Observer of decision table evaluations
pub trait DecisionTableListener: Send + Sync {
    fn before_evaluate_decision_table(&self, _event: &BeforeEvaluateDecisionTableEvent<'_>) {}

    fn after_evaluate_decision_table(&self, _event: &AfterEvaluateDecisionTableEvent<'_>) {}
}
