//! Rule matching
//!
//! Finds the rules whose every input entry accepts the corresponding input
//! value. Rule order is preserved: FIRST, RULE ORDER, COLLECT and the
//! reported match positions all depend on it.

use dtable_core::{DecisionRule, Value};

static NULL: Value = Value::Null;

/// A rule that matched the current inputs
#[derive(Debug, Clone, Copy)]
pub struct MatchedRule<'a> {
    /// 1-based position of the rule in its table
    pub position: usize,
    pub rule: &'a DecisionRule,
}

impl<'a> MatchedRule<'a> {
    /// Output entry of this rule for column `index`.
    ///
    /// Tables built through `DecisionTable::new` always have one entry per
    /// column; a missing entry reads as null.
    pub fn output(&self, index: usize) -> &'a Value {
        self.rule.output_entries.get(index).unwrap_or(&NULL)
    }
}

/// Return the matching rules, in original rule order
pub fn matching_rules<'a>(inputs: &[Value], rules: &'a [DecisionRule]) -> Vec<MatchedRule<'a>> {
    rules
        .iter()
        .enumerate()
        .filter(|(_, rule)| rule.matches(inputs))
        .map(|(i, rule)| MatchedRule {
            position: i + 1,
            rule,
        })
        .collect()
}

/// 1-based positions of the matched rules
pub fn positions(matches: &[MatchedRule<'_>]) -> Vec<usize> {
    matches.iter().map(|m| m.position).collect()
}
