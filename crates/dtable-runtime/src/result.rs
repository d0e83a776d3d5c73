//! Evaluation result types

use dtable_core::Value;
use serde::Serialize;

/// Normalized outcome of a decision table
///
/// A table either produces nothing, one value, or an ordered list.
/// Per-rule structure never leaks out of the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecisionValue {
    /// No rule matched (or the single result is null)
    Absent,
    /// Exactly one value
    Single(Value),
    /// Ordered list of values
    List(Vec<Value>),
}

impl DecisionValue {
    /// Wrap a single value, mapping `Null` to `Absent`
    pub fn single(value: Value) -> Self {
        if value.is_null() {
            DecisionValue::Absent
        } else {
            DecisionValue::Single(value)
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DecisionValue::Absent)
    }

    /// Returns the single value, if this is one
    pub fn as_single(&self) -> Option<&Value> {
        match self {
            DecisionValue::Single(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the list, if this is one
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            DecisionValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Flatten into a plain value (`Absent` becomes `Null`)
    pub fn into_value(self) -> Value {
        match self {
            DecisionValue::Absent => Value::Null,
            DecisionValue::Single(v) => v,
            DecisionValue::List(items) => Value::List(items),
        }
    }
}

/// Result of evaluating one decision table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Combined output according to the hit policy
    pub result: DecisionValue,

    /// 1-based positions of the matched rules, in rule order
    pub matches: Vec<usize>,
}
