//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use dtable_core::{CompareOp, DecisionRule, DecisionTable, InputClause, OutputClause};
use dtable_sdk::{
    AfterEvaluateDecisionTableEvent, BeforeEvaluateDecisionTableEvent, DecisionTableListener,
    UnaryTest, Value,
};
use std::sync::Mutex;

/// An owned copy of a listener notification
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Before {
        table: String,
        inputs: Vec<Value>,
    },
    After {
        table: String,
        matches: Vec<usize>,
        result: Value,
        error: Option<String>,
    },
}

/// Listener that records every event it receives
#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<Recorded>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }

    /// Matches reported by the after-events, in order
    pub fn after_matches(&self) -> Vec<(String, Vec<usize>)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Recorded::After { table, matches, .. } => Some((table, matches)),
                Recorded::Before { .. } => None,
            })
            .collect()
    }
}

impl DecisionTableListener for RecordingListener {
    fn before_evaluate_decision_table(&self, event: &BeforeEvaluateDecisionTableEvent<'_>) {
        self.events.lock().unwrap().push(Recorded::Before {
            table: event.table_name.to_string(),
            inputs: event.inputs.to_vec(),
        });
    }

    fn after_evaluate_decision_table(&self, event: &AfterEvaluateDecisionTableEvent<'_>) {
        self.events.lock().unwrap().push(Recorded::After {
            table: event.table_name.to_string(),
            matches: event.matches.to_vec(),
            result: event.result.clone(),
            error: event.error.map(str::to_string),
        });
    }
}

pub fn s(v: &str) -> Value {
    Value::from(v)
}

fn rule(tests: Vec<UnaryTest>, outputs: Vec<Value>) -> DecisionRule {
    DecisionRule::from_tests(tests, outputs)
}

fn inputs(names: &[&str]) -> Vec<InputClause> {
    names.iter().map(|n| InputClause::new(*n)).collect()
}

fn outputs(names: &[&str]) -> Vec<OutputClause> {
    names.iter().map(|n| OutputClause::new(*n)).collect()
}

/// Two output columns, mutually exclusive rules
pub fn car_damage_responsibility() -> DecisionTable {
    DecisionTable::with_policy_name(
        "Car Damage Responsibility",
        "U",
        inputs(&["Membership Level", "Damage Types", "Responsible"]),
        outputs(&["EU Rent", "Renter"]),
        vec![
            rule(
                vec![UnaryTest::equals("Gold"), UnaryTest::Any, UnaryTest::Any],
                vec![Value::from(100), Value::from(0)],
            ),
            rule(
                vec![UnaryTest::equals("Silver"), UnaryTest::equals("Glass"), UnaryTest::Any],
                vec![Value::from(100), Value::from(0)],
            ),
            rule(
                vec![
                    UnaryTest::equals("Silver"),
                    UnaryTest::equals("Body"),
                    UnaryTest::equals("Renter"),
                ],
                vec![Value::from(0), Value::from(100)],
            ),
            rule(
                vec![
                    UnaryTest::equals("Silver"),
                    UnaryTest::equals("Body"),
                    UnaryTest::equals("Driver"),
                ],
                vec![Value::from(40), Value::from(60)],
            ),
            rule(
                vec![UnaryTest::equals("Silver"), UnaryTest::equals("Engine"), UnaryTest::Any],
                vec![Value::from(50), Value::from(50)],
            ),
        ],
    )
    .expect("valid table")
}

pub fn payment_method() -> DecisionTable {
    DecisionTable::with_policy_name(
        "Payment method",
        "UNIQUE",
        inputs(&["Membership Level"]),
        outputs(&["Payment method"]),
        vec![
            rule(vec![UnaryTest::equals("Platinum")], vec![s("Invoice")]),
            rule(vec![UnaryTest::equals("Gold")], vec![s("Invoice")]),
            rule(vec![UnaryTest::equals("Silver")], vec![s("Credit Card")]),
            rule(vec![UnaryTest::equals("Bronze")], vec![s("Cash")]),
        ],
    )
    .expect("valid table")
}

pub fn dish() -> DecisionTable {
    DecisionTable::with_policy_name(
        "Dish",
        "U",
        inputs(&["Season", "How many guests"]),
        outputs(&["Dish"]),
        vec![
            rule(
                vec![UnaryTest::equals("Fall"), UnaryTest::compare(CompareOp::Le, 8)],
                vec![s("Spareribs")],
            ),
            rule(
                vec![UnaryTest::equals("Winter"), UnaryTest::compare(CompareOp::Le, 8)],
                vec![s("Roastbeef")],
            ),
            rule(
                vec![
                    UnaryTest::one_of(["Fall", "Winter"]),
                    UnaryTest::compare(CompareOp::Gt, 8),
                ],
                vec![s("Stew")],
            ),
        ],
    )
    .expect("valid table")
}

pub fn drinks() -> DecisionTable {
    DecisionTable::with_policy_name(
        "Drinks",
        "RULE ORDER",
        inputs(&["Dish", "Guests with children"]),
        outputs(&["Drinks"]),
        vec![
            rule(vec![UnaryTest::Any, UnaryTest::Any], vec![s("Apero")]),
            rule(vec![UnaryTest::equals("Stew"), UnaryTest::Any], vec![s("Guiness")]),
            rule(vec![UnaryTest::equals("Spareribs"), UnaryTest::Any], vec![s("Ale")]),
            rule(
                vec![
                    UnaryTest::negate(vec![
                        UnaryTest::equals("Spareribs"),
                        UnaryTest::equals("Stew"),
                    ]),
                    UnaryTest::Any,
                ],
                vec![s("Bordeaux")],
            ),
            rule(vec![UnaryTest::Any, UnaryTest::equals(true)], vec![s("Juice Boxes")]),
        ],
    )
    .expect("valid table")
}

/// Overlapping rules under UNIQUE: any age over 21 conflicts
pub fn broken_unique() -> DecisionTable {
    DecisionTable::with_policy_name(
        "Broken",
        "U",
        inputs(&["Age"]),
        outputs(&["Status"]),
        vec![
            rule(vec![UnaryTest::compare(CompareOp::Ge, 18)], vec![s("Adult")]),
            rule(vec![UnaryTest::compare(CompareOp::Ge, 21)], vec![s("Adult")]),
        ],
    )
    .expect("valid table")
}

/// COLLECT MIN over a number and a string: both rules always match
pub fn mixed_minimum() -> DecisionTable {
    DecisionTable::with_policy_name(
        "Lowest",
        "C<",
        inputs(&["x"]),
        outputs(&["y"]),
        vec![
            rule(vec![UnaryTest::Any], vec![Value::from(1)]),
            rule(vec![UnaryTest::Any], vec![s("one")]),
        ],
    )
    .expect("valid table")
}
