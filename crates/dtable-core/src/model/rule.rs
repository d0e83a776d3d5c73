//! Decision rule definitions

use crate::types::Value;
use std::fmt;
use std::sync::Arc;

/// Test applied to one input entry of a rule.
///
/// This is the seam to the expression language: a rule never looks at
/// how an input entry was written, it only asks whether the entry accepts
/// the already-evaluated input value.
pub trait InputTest: Send + Sync {
    /// Returns true if `input` satisfies this entry
    fn matches(&self, input: &Value) -> bool;
}

impl<F> InputTest for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn matches(&self, input: &Value) -> bool {
        self(input)
    }
}

/// One row of a decision table
#[derive(Clone)]
pub struct DecisionRule {
    /// One test per input clause, in column order
    pub input_entries: Vec<Arc<dyn InputTest>>,

    /// One value per output clause, in column order
    pub output_entries: Vec<Value>,

    /// Optional annotation shown in diagnostics
    pub description: Option<String>,
}

impl DecisionRule {
    /// Create a new rule
    pub fn new(input_entries: Vec<Arc<dyn InputTest>>, output_entries: Vec<Value>) -> Self {
        Self {
            input_entries,
            output_entries,
            description: None,
        }
    }

    /// Create a rule from concrete input tests
    pub fn from_tests<T>(tests: Vec<T>, output_entries: Vec<Value>) -> Self
    where
        T: InputTest + 'static,
    {
        let input_entries = tests
            .into_iter()
            .map(|t| Arc::new(t) as Arc<dyn InputTest>)
            .collect();
        Self::new(input_entries, output_entries)
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if every input entry accepts the value in the same position.
    ///
    /// `inputs` must be aligned with the table's input clauses.
    pub fn matches(&self, inputs: &[Value]) -> bool {
        self.input_entries
            .iter()
            .zip(inputs)
            .all(|(test, input)| test.matches(input))
    }
}

impl fmt::Debug for DecisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionRule")
            .field("input_entries", &self.input_entries.len())
            .field("output_entries", &self.output_entries)
            .field("description", &self.description)
            .finish()
    }
}
