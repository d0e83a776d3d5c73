//! Dinner decisions example
//!
//! This example demonstrates:
//! - Registering decision tables with a DecisionEngine
//! - Chaining one table's result into another
//! - Observing evaluations with a listener

use dtable_core::{CompareOp, DecisionRule, DecisionTable, InputClause, OutputClause};
use dtable_sdk::{
    AfterEvaluateDecisionTableEvent, DecisionEngineBuilder, DecisionTableListener, EngineConfig,
    Severity, UnaryTest, Value,
};
use std::collections::BTreeMap;
use std::sync::Arc;

struct PrintingListener;

impl DecisionTableListener for PrintingListener {
    fn after_evaluate_decision_table(&self, event: &AfterEvaluateDecisionTableEvent<'_>) {
        println!(
            "  [{}] matched rules {:?} -> {}",
            event.table_name, event.matches, event.result
        );
    }
}

fn dish() -> Result<DecisionTable, Box<dyn std::error::Error>> {
    let rule = |season: &str, guests: UnaryTest, dish: &str| {
        DecisionRule::from_tests(vec![UnaryTest::equals(season), guests], vec![dish.into()])
    };

    Ok(DecisionTable::with_policy_name(
        "Dish",
        "U",
        vec![InputClause::new("Season"), InputClause::new("How many guests")],
        vec![OutputClause::new("Dish")],
        vec![
            rule("Fall", UnaryTest::compare(CompareOp::Le, 8), "Spareribs"),
            rule("Winter", UnaryTest::compare(CompareOp::Le, 8), "Roastbeef"),
            rule("Spring", UnaryTest::compare(CompareOp::Le, 4), "Dry aged gourmet steak"),
            rule("Spring", UnaryTest::between(5, 8), "Steak"),
            rule("Summer", UnaryTest::Any, "Light Salad and a nice Steak"),
        ],
    )?)
}

fn drinks() -> Result<DecisionTable, Box<dyn std::error::Error>> {
    let rule = |dish: UnaryTest, children: UnaryTest, drink: &str| {
        DecisionRule::from_tests(vec![dish, children], vec![drink.into()])
    };

    Ok(DecisionTable::with_policy_name(
        "Drinks",
        "R",
        vec![InputClause::new("Dish"), InputClause::new("Guests with children")],
        vec![OutputClause::new("Drinks")],
        vec![
            rule(UnaryTest::Any, UnaryTest::Any, "Apero"),
            rule(UnaryTest::equals("Stew"), UnaryTest::Any, "Guiness"),
            rule(UnaryTest::equals("Spareribs"), UnaryTest::Any, "Ale"),
            rule(
                UnaryTest::negate(vec![UnaryTest::equals("Spareribs"), UnaryTest::equals("Stew")]),
                UnaryTest::Any,
                "Bordeaux",
            ),
            rule(UnaryTest::Any, UnaryTest::equals(true), "Juice Boxes"),
        ],
    )?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    println!("=== Dinner Decisions Example ===\n");

    let engine = DecisionEngineBuilder::new()
        .with_config(EngineConfig::new().with_empty_result_severity(Severity::Warn))
        .add_table(dish()?)
        .add_table(drinks()?)
        .add_listener(Arc::new(PrintingListener))
        .build()?;

    for (season, guests) in [("Fall", 4), ("Spring", 6), ("Winter", 12)] {
        println!("{} with {} guests:", season, guests);

        let dish = engine.evaluate("Dish", &[Value::from(season), Value::from(guests)])?;
        for message in &dish.messages {
            println!("  {}", message);
        }

        let mut context = BTreeMap::new();
        context.insert("Dish".to_string(), dish.result);
        context.insert("Guests with children".to_string(), Value::from(true));
        let drinks = engine.evaluate_context("Drinks", &context)?;

        println!("  response: {}\n", serde_json::to_string(&drinks)?);
    }

    Ok(())
}
