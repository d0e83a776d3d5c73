//! Common test utilities for runtime integration tests

#![allow(dead_code)]

use dtable_core::{
    DecisionRule, DecisionTable, HitPolicy, InputClause, OutputClause, UnaryTest, Value,
};
use dtable_runtime::{DecisionTableEvaluator, Evaluation};

/// Test helper to assemble a decision table row by row
pub struct TestTable {
    name: String,
    policy: String,
    inputs: Vec<InputClause>,
    outputs: Vec<OutputClause>,
    rules: Vec<DecisionRule>,
}

impl TestTable {
    /// Start a table with a hit policy token such as `"U"` or `"C+"`
    pub fn new(name: &str, policy: &str) -> Self {
        Self {
            name: name.to_string(),
            policy: policy.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn input(mut self, name: &str) -> Self {
        self.inputs.push(InputClause::new(name));
        self
    }

    pub fn output(mut self, name: &str) -> Self {
        self.outputs.push(OutputClause::new(name));
        self
    }

    /// Output column with an ordered domain
    pub fn ranked_output(mut self, name: &str, domain: &[&str]) -> Self {
        self.outputs.push(
            OutputClause::new(name)
                .with_output_values(domain.iter().map(|v| Value::from(*v)).collect()),
        );
        self
    }

    pub fn rule(mut self, tests: Vec<UnaryTest>, outputs: Vec<Value>) -> Self {
        self.rules.push(DecisionRule::from_tests(tests, outputs));
        self
    }

    pub fn build(self) -> DecisionTable {
        DecisionTable::with_policy_name(
            self.name,
            &self.policy,
            self.inputs,
            self.outputs,
            self.rules,
        )
        .expect("test table should be valid")
    }
}

/// Evaluate with the default evaluator
pub fn run(table: &DecisionTable, inputs: Vec<Value>) -> dtable_runtime::Result<Evaluation> {
    DecisionTableEvaluator::default().evaluate(table, &inputs)
}

pub fn policy(token: &str) -> HitPolicy {
    token.parse().expect("valid hit policy token")
}
