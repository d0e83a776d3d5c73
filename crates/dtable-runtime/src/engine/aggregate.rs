//! Aggregation functions for the COLLECT family
//!
//! Each function reduces the values of one output column across all
//! matched rules.

use crate::error::{Result, RuntimeError};
use bigdecimal::{BigDecimal, Zero};
use dtable_core::Value;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Number of distinct values (structural equality).
///
/// This counts distinct outputs, not matched rules: `10, 10, 20` is 2.
pub fn count_distinct<'a>(values: impl IntoIterator<Item = &'a Value>) -> Value {
    let distinct: HashSet<&Value> = values.into_iter().collect();
    Value::from(distinct.len() as u64)
}

/// Exact decimal sum of the numeric values; anything else is skipped
pub fn sum<'a>(values: impl IntoIterator<Item = &'a Value>) -> Value {
    let total = values
        .into_iter()
        .filter_map(Value::as_number)
        .fold(BigDecimal::zero(), |acc, n| acc + n);
    Value::Number(total)
}

/// Smallest value in natural order, `Null` when there is none
pub fn min<'a>(column: &str, values: impl IntoIterator<Item = &'a Value>) -> Result<Value> {
    extremum(column, values, Ordering::Less)
}

/// Largest value in natural order, `Null` when there is none
pub fn max<'a>(column: &str, values: impl IntoIterator<Item = &'a Value>) -> Result<Value> {
    extremum(column, values, Ordering::Greater)
}

/// Null entries are ignored. On ties the earliest value wins.
fn extremum<'a>(
    column: &str,
    values: impl IntoIterator<Item = &'a Value>,
    keep: Ordering,
) -> Result<Value> {
    let mut best: Option<&Value> = None;

    for value in values.into_iter().filter(|v| !v.is_null()) {
        let current = match best {
            None => {
                if value.try_cmp(value).is_none() {
                    return Err(incomparable(column, value, value));
                }
                value
            }
            Some(current) => match value.try_cmp(current) {
                Some(ordering) if ordering == keep => value,
                Some(_) => current,
                None => return Err(incomparable(column, current, value)),
            },
        };
        best = Some(current);
    }

    Ok(best.cloned().unwrap_or(Value::Null))
}

fn incomparable(column: &str, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::Incomparable {
        column: column.to_string(),
        left: left.clone(),
        right: right.clone(),
        matches: Vec::new(),
    }
}
