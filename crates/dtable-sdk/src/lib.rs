//! dtable SDK
//!
//! High-level API for registering named decision tables and evaluating
//! them with listeners and caller-facing messages.

pub mod builder;
pub mod config;
pub mod decision_engine;
pub mod error;
pub mod listener;
pub mod message;

// Re-export main types
pub use builder::DecisionEngineBuilder;
pub use config::EngineConfig;
pub use decision_engine::{DecisionEngine, DecisionResponse};
pub use error::{Result, SdkError};
pub use listener::{
    AfterEvaluateDecisionTableEvent, BeforeEvaluateDecisionTableEvent, DecisionTableListener,
};
pub use message::{DecisionMessage, Severity};

// Re-export commonly used types from dependencies
pub use dtable_core::{DecisionRule, DecisionTable, HitPolicy, UnaryTest, Value};
pub use dtable_runtime::{EvaluatorConfig, RuntimeError};
