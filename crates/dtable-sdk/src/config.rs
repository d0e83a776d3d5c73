//! Configuration types for DecisionEngine

use crate::error::Result;
use crate::message::Severity;
use dtable_runtime::EvaluatorConfig;
use serde::{Deserialize, Serialize};

/// Main engine configuration
///
/// ```yaml
/// evaluator:
///   enabled_policies: [UNIQUE, FIRST, "COLLECT SUM"]
///   check_input_arity: true
/// empty_result_severity: warn
/// fail_fast: false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Evaluator options
    pub evaluator: EvaluatorConfig,

    /// Severity of the message added when no rule matched. No message is
    /// added when unset.
    pub empty_result_severity: Option<Severity>,

    /// Return evaluation errors instead of recording them as messages
    pub fail_fast: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            evaluator: EvaluatorConfig::default(),
            empty_result_severity: None,
            fail_fast: false,
        }
    }

    /// Parse a configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set evaluator options
    pub fn with_evaluator(mut self, evaluator: EvaluatorConfig) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Report evaluations without matches at the given severity
    pub fn with_empty_result_severity(mut self, severity: Severity) -> Self {
        self.empty_result_severity = Some(severity);
        self
    }

    /// Enable fail-fast mode
    pub fn fail_fast(mut self, enable: bool) -> Self {
        self.fail_fast = enable;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
