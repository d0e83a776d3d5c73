//! Validated decision table

use crate::error::{CoreError, EntryKind, Result};
use crate::model::clause::{InputClause, OutputClause};
use crate::model::hit_policy::HitPolicy;
use crate::model::rule::DecisionRule;

/// A decision table: clauses, rules and the hit policy combining them.
///
/// Construction checks that every rule is aligned with the declared
/// clauses, so evaluation can index output entries by column without
/// re-validating. The table is immutable once built.
#[derive(Debug, Clone)]
pub struct DecisionTable {
    name: String,
    hit_policy: HitPolicy,
    inputs: Vec<InputClause>,
    outputs: Vec<OutputClause>,
    rules: Vec<DecisionRule>,
}

impl DecisionTable {
    /// Build a table, rejecting rules whose arity does not match the clauses
    pub fn new(
        name: impl Into<String>,
        hit_policy: HitPolicy,
        inputs: Vec<InputClause>,
        outputs: Vec<OutputClause>,
        rules: Vec<DecisionRule>,
    ) -> Result<Self> {
        let name = name.into();

        if outputs.is_empty() {
            return Err(CoreError::NoOutputs { table: name });
        }

        for (i, rule) in rules.iter().enumerate() {
            check_arity(&name, i + 1, EntryKind::Input, inputs.len(), rule.input_entries.len())?;
            check_arity(
                &name,
                i + 1,
                EntryKind::Output,
                outputs.len(),
                rule.output_entries.len(),
            )?;
        }

        if hit_policy.uses_output_domain() {
            for output in outputs.iter().filter(|o| !o.has_domain()) {
                log::warn!(
                    "Decision table '{}' uses {} but output '{}' declares no output values; \
                     that column will never contribute to the result",
                    name,
                    hit_policy,
                    output.name
                );
            }
        }

        log::debug!(
            "Built decision table '{}' ({}, {} inputs, {} outputs, {} rules)",
            name,
            hit_policy.short_name(),
            inputs.len(),
            outputs.len(),
            rules.len()
        );

        Ok(Self {
            name,
            hit_policy,
            inputs,
            outputs,
            rules,
        })
    }

    /// Build a table from a hit policy token such as `"C+"` or `"rule order"`
    pub fn with_policy_name(
        name: impl Into<String>,
        hit_policy: &str,
        inputs: Vec<InputClause>,
        outputs: Vec<OutputClause>,
        rules: Vec<DecisionRule>,
    ) -> Result<Self> {
        let hit_policy = hit_policy.parse::<HitPolicy>()?;
        Self::new(name, hit_policy, inputs, outputs, rules)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hit_policy(&self) -> HitPolicy {
        self.hit_policy
    }

    pub fn inputs(&self) -> &[InputClause] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[OutputClause] {
        &self.outputs
    }

    pub fn rules(&self) -> &[DecisionRule] {
        &self.rules
    }
}

fn check_arity(
    table: &str,
    rule: usize,
    kind: EntryKind,
    expected: usize,
    actual: usize,
) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    Err(CoreError::RuleArity {
        table: table.to_string(),
        rule,
        kind,
        expected,
        actual,
    })
}
