//! Evaluator configuration

use dtable_core::HitPolicy;
use serde::{Deserialize, Serialize};

/// Options for [`DecisionTableEvaluator`](crate::DecisionTableEvaluator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Hit policies this evaluator will run. Tables using any other
    /// policy fail with `UnsupportedPolicy` before rules are matched.
    pub enabled_policies: Vec<HitPolicy>,

    /// Reject input tuples whose length differs from the input clauses
    pub check_input_arity: bool,

    /// Emit a debug event listing the matched rule positions
    pub log_matches: bool,
}

impl EvaluatorConfig {
    /// Create a configuration with every hit policy enabled
    pub fn new() -> Self {
        Self {
            enabled_policies: HitPolicy::ALL.to_vec(),
            check_input_arity: true,
            log_matches: true,
        }
    }

    /// Restrict the evaluator to the given hit policies
    pub fn with_enabled_policies(mut self, policies: Vec<HitPolicy>) -> Self {
        self.enabled_policies = policies;
        self
    }

    /// Enable or disable the input arity check
    pub fn check_input_arity(mut self, enable: bool) -> Self {
        self.check_input_arity = enable;
        self
    }

    /// Enable or disable match logging
    pub fn log_matches(mut self, enable: bool) -> Self {
        self.log_matches = enable;
        self
    }

    /// Returns true if `policy` may be evaluated
    pub fn is_enabled(&self, policy: HitPolicy) -> bool {
        self.enabled_policies.contains(&policy)
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
