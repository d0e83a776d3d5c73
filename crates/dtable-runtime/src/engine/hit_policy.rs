//! Hit policy strategies
//!
//! One pure function per hit policy, selected by an exhaustive match. Every
//! strategy receives the already-matched rules (in rule order) and the
//! output clauses, and either produces a normalized result or reports a
//! conflict.

use crate::engine::aggregate;
use crate::engine::matcher::{positions, MatchedRule};
use crate::engine::normalize::{hit_to_output, single_value_or_list};
use crate::error::{Result, RuntimeError};
use crate::result::DecisionValue;
use dtable_core::{HitPolicy, OutputClause, Value};

/// Combine the matched rules according to `policy`
pub fn apply(
    policy: HitPolicy,
    matches: &[MatchedRule<'_>],
    outputs: &[OutputClause],
) -> Result<DecisionValue> {
    match policy {
        HitPolicy::Unique => unique(matches),
        HitPolicy::First => Ok(first(matches)),
        HitPolicy::Priority => Ok(priority(matches, outputs)),
        HitPolicy::Any => any(matches),
        // COLLECT has no defined order; rule order is as good as any
        HitPolicy::Collect | HitPolicy::RuleOrder => Ok(rule_order(matches)),
        HitPolicy::OutputOrder => Ok(output_order(matches, outputs)),
        HitPolicy::CollectSum => collect_by_column(matches, outputs, |_, values| {
            Ok(aggregate::sum(values))
        }),
        HitPolicy::CollectCount => collect_by_column(matches, outputs, |_, values| {
            Ok(aggregate::count_distinct(values))
        }),
        HitPolicy::CollectMin => collect_by_column(matches, outputs, |column, values| {
            aggregate::min(column, values)
        }),
        HitPolicy::CollectMax => collect_by_column(matches, outputs, |column, values| {
            aggregate::max(column, values)
        }),
    }
}

/// UNIQUE: at most one rule may match
fn unique(matches: &[MatchedRule<'_>]) -> Result<DecisionValue> {
    match matches {
        [] => Ok(DecisionValue::Absent),
        [hit] => Ok(DecisionValue::single(hit_to_output(hit))),
        _ => Err(RuntimeError::Conflict {
            policy: HitPolicy::Unique,
            matches: positions(matches),
            reason: "only a single rule can be matched".to_string(),
        }),
    }
}

/// FIRST: output of the first match in rule order
fn first(matches: &[MatchedRule<'_>]) -> DecisionValue {
    matches
        .first()
        .map(|hit| DecisionValue::single(hit_to_output(hit)))
        .unwrap_or(DecisionValue::Absent)
}

/// ANY: several rules may match as long as their outputs are identical
fn any(matches: &[MatchedRule<'_>]) -> Result<DecisionValue> {
    let Some(head) = matches.first() else {
        return Ok(DecisionValue::Absent);
    };

    let diverging = matches
        .iter()
        .any(|hit| hit.rule.output_entries != head.rule.output_entries);
    if diverging {
        return Err(RuntimeError::Conflict {
            policy: HitPolicy::Any,
            matches: positions(matches),
            reason: "multiple rules can match, but they must all have the same output"
                .to_string(),
        });
    }

    Ok(DecisionValue::single(hit_to_output(head)))
}

/// PRIORITY: per output column, the first domain value present among the
/// matched rules.
///
/// Columns are ranked independently, so with several output columns the
/// combined result need not equal any single matched row. A column with no
/// domain value among the matches contributes nothing; if no column
/// contributes, the result is absent.
fn priority(matches: &[MatchedRule<'_>], outputs: &[OutputClause]) -> DecisionValue {
    let result: Vec<Value> = outputs
        .iter()
        .enumerate()
        .filter_map(|(column, clause)| {
            clause
                .output_values
                .iter()
                .find(|value| column_contains(matches, column, value))
                .cloned()
        })
        .collect();

    if result.is_empty() {
        return DecisionValue::Absent;
    }
    single_value_or_list(result)
}

/// OUTPUT ORDER: per output column, every domain value present among the
/// matched rules, in domain order. Columns are concatenated in order.
fn output_order(matches: &[MatchedRule<'_>], outputs: &[OutputClause]) -> DecisionValue {
    let result = outputs
        .iter()
        .enumerate()
        .flat_map(|(column, clause)| {
            clause
                .output_values
                .iter()
                .filter(move |value| column_contains(matches, column, value))
                .cloned()
        })
        .collect();

    DecisionValue::List(result)
}

/// RULE ORDER / COLLECT: every matched output, in rule order
fn rule_order(matches: &[MatchedRule<'_>]) -> DecisionValue {
    DecisionValue::List(matches.iter().map(hit_to_output).collect())
}

/// Reduce each output column independently, then normalize the per-column
/// results (one column yields a single value).
fn collect_by_column<'a, F>(
    matches: &[MatchedRule<'a>],
    outputs: &[OutputClause],
    reduce: F,
) -> Result<DecisionValue>
where
    F: Fn(&str, Vec<&'a Value>) -> Result<Value>,
{
    let result = outputs
        .iter()
        .enumerate()
        .map(|(column, clause)| {
            let values = matches.iter().map(|hit| hit.output(column)).collect();
            reduce(&clause.name, values)
        })
        .collect::<Result<Vec<_>>>()
        .map_err(|e| e.with_matches(positions(matches)))?;

    Ok(single_value_or_list(result))
}

fn column_contains(matches: &[MatchedRule<'_>], column: usize, value: &Value) -> bool {
    matches.iter().any(|hit| hit.output(column) == value)
}
