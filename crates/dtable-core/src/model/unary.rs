//! Built-in unary tests
//!
//! A minimal, already-structured stand-in for an expression language's
//! unary tests (`-`, `< 60`, `[1..10]`, `"a", "b"`, `not("x")`). Useful
//! for callers that build tables programmatically. Nothing here parses
//! text.

use crate::model::rule::InputTest;
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareOp {
    /// Equal (=)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Le,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
}

impl CompareOp {
    /// Get the operator symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

/// Structured unary test against a single input value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnaryTest {
    /// Matches any input (`-`)
    Any,

    /// `input <op> value`
    Compare { op: CompareOp, value: Value },

    /// Interval test, e.g. `[18..65)`
    Range {
        low: Value,
        high: Value,
        #[serde(default = "default_inclusive")]
        low_inclusive: bool,
        #[serde(default = "default_inclusive")]
        high_inclusive: bool,
    },

    /// Matches if any of the nested tests match
    OneOf { tests: Vec<UnaryTest> },

    /// Matches if none of the nested tests match
    Not { tests: Vec<UnaryTest> },
}

fn default_inclusive() -> bool {
    true
}

impl UnaryTest {
    /// `input <op> value`
    pub fn compare(op: CompareOp, value: impl Into<Value>) -> Self {
        UnaryTest::Compare {
            op,
            value: value.into(),
        }
    }

    /// `input = value`
    pub fn equals(value: impl Into<Value>) -> Self {
        Self::compare(CompareOp::Eq, value)
    }

    /// Closed interval `[low..high]`
    pub fn between(low: impl Into<Value>, high: impl Into<Value>) -> Self {
        UnaryTest::Range {
            low: low.into(),
            high: high.into(),
            low_inclusive: true,
            high_inclusive: true,
        }
    }

    /// Disjunction of equality tests, e.g. `"Fall", "Winter"`
    pub fn one_of<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        UnaryTest::OneOf {
            tests: values.into_iter().map(Self::equals).collect(),
        }
    }

    /// Negation of the given tests
    pub fn negate(tests: Vec<UnaryTest>) -> Self {
        UnaryTest::Not { tests }
    }
}

impl InputTest for UnaryTest {
    fn matches(&self, input: &Value) -> bool {
        match self {
            UnaryTest::Any => true,
            UnaryTest::Compare { op, value } => compare(input, *op, value),
            UnaryTest::Range {
                low,
                high,
                low_inclusive,
                high_inclusive,
            } => {
                let low_op = if *low_inclusive {
                    CompareOp::Ge
                } else {
                    CompareOp::Gt
                };
                let high_op = if *high_inclusive {
                    CompareOp::Le
                } else {
                    CompareOp::Lt
                };
                compare(input, low_op, low) && compare(input, high_op, high)
            }
            UnaryTest::OneOf { tests } => tests.iter().any(|t| t.matches(input)),
            UnaryTest::Not { tests } => !tests.iter().any(|t| t.matches(input)),
        }
    }
}

/// Null compared to anything is false, as is ordering across kinds.
fn compare(input: &Value, op: CompareOp, expected: &Value) -> bool {
    if input.is_null() || expected.is_null() {
        return false;
    }

    match op {
        CompareOp::Eq => input == expected,
        CompareOp::Ne => input != expected,
        _ => match input.try_cmp(expected) {
            Some(ordering) => match op {
                CompareOp::Lt => ordering == Ordering::Less,
                CompareOp::Le => ordering != Ordering::Greater,
                CompareOp::Gt => ordering == Ordering::Greater,
                CompareOp::Ge => ordering != Ordering::Less,
                CompareOp::Eq | CompareOp::Ne => false,
            },
            None => {
                log::debug!(
                    "Cannot order {} against {} with {}, treating as no match",
                    input.kind(),
                    expected.kind(),
                    op.symbol()
                );
                false
            }
        },
    }
}
