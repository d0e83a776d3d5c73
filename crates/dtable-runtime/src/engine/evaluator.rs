//! Decision table evaluator
//!
//! The single entry point the surrounding runtime calls. It checks the
//! request against its configuration, matches rules, hands the matches to
//! the table's hit policy, and returns the result together with the
//! 1-based positions of the matched rules.

use crate::config::EvaluatorConfig;
use crate::engine::hit_policy;
use crate::engine::matcher::{matching_rules, positions};
use crate::error::{Result, RuntimeError};
use crate::result::Evaluation;
use dtable_core::{DecisionRule, DecisionTable, HitPolicy, InputClause, OutputClause, Value};

/// Stateless decision table evaluator
#[derive(Debug, Clone, Default)]
pub struct DecisionTableEvaluator {
    config: EvaluatorConfig,
}

impl DecisionTableEvaluator {
    /// Create an evaluator with the given configuration
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate a validated table against an input tuple
    pub fn evaluate(&self, table: &DecisionTable, inputs: &[Value]) -> Result<Evaluation> {
        tracing::trace!(
            "Evaluating decision table '{}' ({})",
            table.name(),
            table.hit_policy()
        );
        self.evaluate_parts(
            inputs,
            table.rules(),
            table.inputs(),
            table.outputs(),
            table.hit_policy(),
        )
    }

    /// Evaluate loose table parts.
    ///
    /// `inputs` must be aligned with `input_clauses`, and every rule must
    /// carry one output entry per output clause. Only the former is
    /// checked here.
    pub fn evaluate_parts(
        &self,
        inputs: &[Value],
        rules: &[DecisionRule],
        input_clauses: &[InputClause],
        output_clauses: &[OutputClause],
        hit_policy: HitPolicy,
    ) -> Result<Evaluation> {
        if !self.config.is_enabled(hit_policy) {
            return Err(RuntimeError::UnsupportedPolicy(hit_policy));
        }

        if self.config.check_input_arity && inputs.len() != input_clauses.len() {
            return Err(RuntimeError::InputArity {
                expected: input_clauses.len(),
                actual: inputs.len(),
            });
        }

        let matches = matching_rules(inputs, rules);
        let matched = positions(&matches);

        if self.config.log_matches {
            tracing::debug!(
                "{} of {} rules matched under {}: {:?}",
                matched.len(),
                rules.len(),
                hit_policy,
                matched
            );
        }

        let result = hit_policy::apply(hit_policy, &matches, output_clauses).map_err(|e| {
            tracing::warn!("Decision table evaluation failed: {}", e);
            e
        })?;

        tracing::debug!("{} result: {:?}", hit_policy, result);

        Ok(Evaluation {
            result,
            matches: matched,
        })
    }
}

/// Evaluate with the default configuration
pub fn evaluate(
    inputs: &[Value],
    rules: &[DecisionRule],
    input_clauses: &[InputClause],
    output_clauses: &[OutputClause],
    hit_policy: HitPolicy,
) -> Result<Evaluation> {
    DecisionTableEvaluator::default().evaluate_parts(
        inputs,
        rules,
        input_clauses,
        output_clauses,
        hit_policy,
    )
}
