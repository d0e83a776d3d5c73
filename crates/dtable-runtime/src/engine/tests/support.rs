//! Shared table builders for engine tests

use dtable_core::{DecisionRule, DecisionTable, HitPolicy, InputClause, OutputClause, UnaryTest, Value};

/// Single-input table; each row is (input test, output entries)
pub(super) fn table(
    policy: HitPolicy,
    outputs: Vec<OutputClause>,
    rows: Vec<(UnaryTest, Vec<Value>)>,
) -> DecisionTable {
    let rules = rows
        .into_iter()
        .map(|(test, out)| DecisionRule::from_tests(vec![test], out))
        .collect();
    DecisionTable::new("test", policy, vec![InputClause::new("x")], outputs, rules).unwrap()
}

/// Rows that all match, with one output column
pub(super) fn matching_rows<V: Into<Value>>(values: Vec<V>) -> Vec<(UnaryTest, Vec<Value>)> {
    values
        .into_iter()
        .map(|v| (UnaryTest::Any, vec![v.into()]))
        .collect()
}

pub(super) fn risk_clause() -> OutputClause {
    OutputClause::new("Risk").with_output_values(vec![
        Value::from("HIGH"),
        Value::from("MEDIUM"),
        Value::from("LOW"),
    ])
}

pub(super) fn strings(values: &[&str]) -> Vec<Value> {
    values.iter().map(|s| Value::from(*s)).collect()
}
