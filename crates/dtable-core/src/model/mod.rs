//! Decision table model
//!
//! Clause descriptors, rules, hit policies and the validated table that
//! ties them together. Everything here is built once when a table is
//! loaded and is immutable afterwards.

pub mod clause;
pub mod hit_policy;
pub mod rule;
pub mod table;
pub mod unary;

pub use clause::{InputClause, OutputClause};
pub use hit_policy::HitPolicy;
pub use rule::{DecisionRule, InputTest};
pub use table::DecisionTable;
pub use unary::{CompareOp, UnaryTest};
