//! Type system for dtable
//!
//! Runtime values flowing into and out of decision tables.

pub mod value;

pub use value::Value;
