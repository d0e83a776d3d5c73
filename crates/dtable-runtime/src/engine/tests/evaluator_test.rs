//! Evaluator entry point: configuration checks, idempotence, end-to-end

use super::support::{matching_rows, table};
use crate::config::EvaluatorConfig;
use crate::engine::{evaluate, DecisionTableEvaluator};
use crate::error::RuntimeError;
use crate::result::DecisionValue;
use dtable_core::{
    CompareOp, DecisionRule, DecisionTable, HitPolicy, InputClause, OutputClause, UnaryTest,
    Value,
};

fn ship_table(policy: HitPolicy, first_row: UnaryTest) -> DecisionTable {
    DecisionTable::new(
        "Ship can enter",
        policy,
        vec![InputClause::new("Size")],
        vec![OutputClause::new("Decision")],
        vec![
            DecisionRule::from_tests(vec![first_row], vec![Value::from("Allowed")]),
            DecisionRule::from_tests(
                vec![UnaryTest::compare(CompareOp::Ge, 60)],
                vec![Value::from("Denied")],
            ),
        ],
    )
    .unwrap()
}

#[test]
fn test_end_to_end_ship_size() {
    let evaluator = DecisionTableEvaluator::default();
    let size = [Value::from(70)];
    let small = || UnaryTest::compare(CompareOp::Lt, 60);

    let first = evaluator
        .evaluate(&ship_table(HitPolicy::First, small()), &size)
        .unwrap();
    assert_eq!(first.result, DecisionValue::Single(Value::from("Denied")));

    let unique = evaluator
        .evaluate(&ship_table(HitPolicy::Unique, small()), &size)
        .unwrap();
    assert_eq!(unique.result, DecisionValue::Single(Value::from("Denied")));
    assert_eq!(unique.matches, vec![2]);

    // Both rows now accept a size of 70
    let overlapping = ship_table(HitPolicy::Unique, UnaryTest::compare(CompareOp::Le, 70));
    let err = evaluator.evaluate(&overlapping, &size).unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.matches(), &[1, 2]);

    // FIRST tolerates the overlap
    let first = evaluator
        .evaluate(
            &ship_table(HitPolicy::First, UnaryTest::compare(CompareOp::Le, 70)),
            &size,
        )
        .unwrap();
    assert_eq!(first.result, DecisionValue::Single(Value::from("Allowed")));
}

#[test]
fn test_evaluation_is_idempotent() {
    let t = table(
        HitPolicy::Collect,
        vec![OutputClause::new("d")],
        matching_rows(vec!["a", "b", "c"]),
    );
    let evaluator = DecisionTableEvaluator::default();

    let once = evaluator.evaluate(&t, &[Value::Null]).unwrap();
    let twice = evaluator.evaluate(&t, &[Value::Null]).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_parallel_evaluation_of_shared_table() {
    let t = table(
        HitPolicy::CollectSum,
        vec![OutputClause::new("n")],
        vec![
            (UnaryTest::compare(CompareOp::Ge, 0), vec![Value::from(1)]),
            (UnaryTest::compare(CompareOp::Ge, 10), vec![Value::from(10)]),
        ],
    );
    let evaluator = DecisionTableEvaluator::default();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4i64)
            .map(|i| {
                let (t, evaluator) = (&t, &evaluator);
                s.spawn(move || evaluator.evaluate(t, &[Value::from(i * 10)]).unwrap())
            })
            .collect();

        let sums: Vec<DecisionValue> = handles
            .into_iter()
            .map(|h| h.join().unwrap().result)
            .collect();
        assert_eq!(sums[0], DecisionValue::Single(Value::from(1)));
        assert_eq!(sums[3], DecisionValue::Single(Value::from(11)));
    });
}

#[test]
fn test_disabled_policy_is_unsupported() {
    let t = table(
        HitPolicy::OutputOrder,
        vec![OutputClause::new("d")],
        matching_rows(vec!["a"]),
    );
    let evaluator = DecisionTableEvaluator::new(
        EvaluatorConfig::new().with_enabled_policies(vec![HitPolicy::Unique, HitPolicy::First]),
    );

    let err = evaluator.evaluate(&t, &[Value::Null]).unwrap_err();
    assert_eq!(err, RuntimeError::UnsupportedPolicy(HitPolicy::OutputOrder));
}

#[test]
fn test_input_arity_checked() {
    let t = table(
        HitPolicy::First,
        vec![OutputClause::new("d")],
        matching_rows(vec!["a"]),
    );

    let err = DecisionTableEvaluator::default()
        .evaluate(&t, &[Value::Null, Value::Null])
        .unwrap_err();
    assert_eq!(
        err,
        RuntimeError::InputArity {
            expected: 1,
            actual: 2
        }
    );

    let lenient = DecisionTableEvaluator::new(
        EvaluatorConfig::new().check_input_arity(false).log_matches(false),
    );
    assert!(lenient.evaluate(&t, &[Value::Null, Value::Null]).is_ok());
}

#[test]
fn test_evaluate_loose_parts() {
    let rules = vec![
        DecisionRule::from_tests(vec![UnaryTest::equals("Silver")], vec![Value::from("Check")]),
        DecisionRule::from_tests(vec![UnaryTest::equals("Gold")], vec![Value::from("Card")]),
    ];

    let evaluation = evaluate(
        &[Value::from("Gold")],
        &rules,
        &[InputClause::new("Membership Level")],
        &[OutputClause::new("Payment method")],
        HitPolicy::Unique,
    )
    .unwrap();

    assert_eq!(evaluation.result, DecisionValue::Single(Value::from("Card")));
    assert_eq!(evaluation.matches, vec![2]);
}
