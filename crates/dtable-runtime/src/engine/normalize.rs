//! Output normalization
//!
//! A rule's output is a single value when the table has one output column
//! and the ordered list of its output entries otherwise. A finished
//! per-column sequence collapses to its sole element when it has exactly
//! one.

use crate::engine::matcher::MatchedRule;
use crate::result::DecisionValue;
use dtable_core::Value;

/// Project a matched rule to one value
pub fn hit_to_output(hit: &MatchedRule<'_>) -> Value {
    match hit.rule.output_entries.as_slice() {
        [single] => single.clone(),
        entries => Value::List(entries.to_vec()),
    }
}

/// Collapse a one-element sequence to that element, keep anything else as a list
pub fn single_value_or_list(mut values: Vec<Value>) -> DecisionValue {
    if values.len() == 1 {
        match values.pop() {
            Some(value) => DecisionValue::single(value),
            None => DecisionValue::Absent,
        }
    } else {
        DecisionValue::List(values)
    }
}
