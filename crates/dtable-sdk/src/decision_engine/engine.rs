//! DecisionEngine implementation

use super::types::DecisionResponse;
use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use crate::listener::{
    AfterEvaluateDecisionTableEvent, BeforeEvaluateDecisionTableEvent, DecisionTableListener,
};
use crate::message::{DecisionMessage, Severity};
use dtable_core::{DecisionTable, Value};
use dtable_runtime::DecisionTableEvaluator;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Main decision engine
///
/// Holds a fixed set of named decision tables. Evaluations are
/// independent of each other, so a failing table never affects the
/// result of another, and the engine can be shared across threads.
pub struct DecisionEngine {
    config: EngineConfig,
    evaluator: DecisionTableEvaluator,
    tables: HashMap<String, DecisionTable>,
    listeners: Vec<Arc<dyn DecisionTableListener>>,
}

impl DecisionEngine {
    pub(crate) fn new(
        config: EngineConfig,
        evaluator: DecisionTableEvaluator,
        tables: HashMap<String, DecisionTable>,
        listeners: Vec<Arc<dyn DecisionTableListener>>,
    ) -> Self {
        Self {
            config,
            evaluator,
            tables,
            listeners,
        }
    }

    /// Get engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Look up a registered table
    pub fn table(&self, name: &str) -> Option<&DecisionTable> {
        self.tables.get(name)
    }

    /// Names of all registered tables, sorted
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Evaluate a table against an input tuple aligned with its input
    /// clauses.
    ///
    /// Evaluation errors (conflicts, disabled hit policies, arity
    /// mismatches) are reported as an `Error` message with a `Null` result,
    /// unless `fail_fast` is set. An unknown table name is always an error.
    pub fn evaluate(&self, table_name: &str, inputs: &[Value]) -> Result<DecisionResponse> {
        let table = self.lookup(table_name)?;
        self.evaluate_table(table, inputs)
    }

    /// Evaluate a table against named inputs.
    ///
    /// Inputs are picked by input clause name; missing names evaluate as
    /// `Null`.
    pub fn evaluate_context(
        &self,
        table_name: &str,
        context: &BTreeMap<String, Value>,
    ) -> Result<DecisionResponse> {
        let table = self.lookup(table_name)?;
        let inputs: Vec<Value> = table
            .inputs()
            .iter()
            .map(|clause| context.get(&clause.name).cloned().unwrap_or(Value::Null))
            .collect();
        self.evaluate_table(table, &inputs)
    }

    fn lookup(&self, table_name: &str) -> Result<&DecisionTable> {
        self.tables.get(table_name).ok_or_else(|| {
            tracing::warn!("Decision table '{}' is not registered", table_name);
            SdkError::UnknownTable(table_name.to_string())
        })
    }

    fn evaluate_table(&self, table: &DecisionTable, inputs: &[Value]) -> Result<DecisionResponse> {
        let before = BeforeEvaluateDecisionTableEvent {
            table_name: table.name(),
            inputs,
        };
        for listener in &self.listeners {
            listener.before_evaluate_decision_table(&before);
        }

        let (result, matches, error) = match self.evaluator.evaluate(table, inputs) {
            Ok(evaluation) => (evaluation.result.into_value(), evaluation.matches, None),
            Err(e) => (Value::Null, e.matches().to_vec(), Some(e)),
        };
        let error_text = error.as_ref().map(ToString::to_string);

        let after = AfterEvaluateDecisionTableEvent {
            table_name: table.name(),
            inputs,
            matches: &matches,
            result: &result,
            error: error_text.as_deref(),
        };
        for listener in &self.listeners {
            listener.after_evaluate_decision_table(&after);
        }

        let mut messages = Vec::new();
        match (error, error_text) {
            (Some(e), _) if self.config.fail_fast => return Err(e.into()),
            (Some(_), Some(text)) => {
                tracing::warn!("Decision table '{}' failed: {}", table.name(), text);
                messages.push(DecisionMessage::new(Severity::Error, table.name(), text));
            }
            _ if matches.is_empty() => {
                if let Some(severity) = self.config.empty_result_severity {
                    messages.push(DecisionMessage::new(
                        severity,
                        table.name(),
                        format!("No rule matched in decision table '{}'", table.name()),
                    ));
                }
            }
            _ => {}
        }

        tracing::debug!(
            "Decision table '{}' evaluated: result={}, matches={:?}",
            table.name(),
            result,
            matches
        );

        Ok(DecisionResponse {
            table: table.name().to_string(),
            result,
            matches,
            messages,
        })
    }
}
