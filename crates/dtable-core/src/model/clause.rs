//! Input and output clause descriptors

use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Input column of a decision table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputClause {
    /// Column name (usually the input expression text)
    pub name: String,

    /// Ordered list of allowed input values.
    ///
    /// Informational only; evaluation never checks inputs against it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_values: Vec<Value>,
}

/// Output column of a decision table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputClause {
    /// Column name
    pub name: String,

    /// Ordered list of allowed output values.
    ///
    /// The order defines precedence for the `PRIORITY` and `OUTPUT ORDER`
    /// hit policies: earlier values rank higher.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_values: Vec<Value>,
}

impl InputClause {
    /// Create an input clause without a domain
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_values: Vec::new(),
        }
    }

    /// Set the allowed input values
    pub fn with_input_values(mut self, values: Vec<Value>) -> Self {
        self.input_values = values;
        self
    }
}

impl OutputClause {
    /// Create an output clause without a domain
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output_values: Vec::new(),
        }
    }

    /// Set the ordered output domain
    pub fn with_output_values(mut self, values: Vec<Value>) -> Self {
        self.output_values = values;
        self
    }

    /// Returns true if this column declares an output domain
    pub fn has_domain(&self) -> bool {
        !self.output_values.is_empty()
    }
}
