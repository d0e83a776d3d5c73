//! Builder pattern for DecisionEngine

use crate::config::EngineConfig;
use crate::decision_engine::DecisionEngine;
use crate::error::{Result, SdkError};
use crate::listener::DecisionTableListener;
use dtable_core::DecisionTable;
use dtable_runtime::DecisionTableEvaluator;
use std::collections::HashMap;
use std::sync::Arc;

/// Builder for DecisionEngine
///
/// # Example
///
/// ```rust,ignore
/// use dtable_sdk::{DecisionEngineBuilder, EngineConfig, Severity};
///
/// let engine = DecisionEngineBuilder::new()
///     .with_config(EngineConfig::new().with_empty_result_severity(Severity::Warn))
///     .add_table(dish_table)
///     .add_table(drinks_table)
///     .add_listener(Arc::new(AuditListener::default()))
///     .build()?;
/// ```
pub struct DecisionEngineBuilder {
    config: EngineConfig,
    tables: Vec<DecisionTable>,
    listeners: Vec<Arc<dyn DecisionTableListener>>,
}

impl DecisionEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            tables: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Replace the engine configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a decision table under its own name
    pub fn add_table(mut self, table: DecisionTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Register several decision tables
    pub fn add_tables(mut self, tables: impl IntoIterator<Item = DecisionTable>) -> Self {
        self.tables.extend(tables);
        self
    }

    /// Register a listener. Listeners are notified in registration order.
    pub fn add_listener(mut self, listener: Arc<dyn DecisionTableListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Build the engine
    pub fn build(self) -> Result<DecisionEngine> {
        let mut tables = HashMap::with_capacity(self.tables.len());

        for table in self.tables {
            let name = table.name().to_string();
            if tables.contains_key(&name) {
                return Err(SdkError::ConfigError(format!(
                    "Duplicate decision table name '{}'",
                    name
                )));
            }
            tracing::info!(
                "Registered decision table '{}' ({}, {} rules)",
                name,
                table.hit_policy(),
                table.rules().len()
            );
            tables.insert(name, table);
        }

        let evaluator = DecisionTableEvaluator::new(self.config.evaluator.clone());

        Ok(DecisionEngine::new(
            self.config,
            evaluator,
            tables,
            self.listeners,
        ))
    }
}

impl Default for DecisionEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
