//! Caller-facing decision messages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// A message attached to a decision response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionMessage {
    pub severity: Severity,
    /// Name of the decision table that raised the message
    pub source: String,
    pub text: String,
}

impl DecisionMessage {
    pub fn new(severity: Severity, source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            severity,
            source: source.into(),
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for DecisionMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.source, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_message_display() {
        let msg = DecisionMessage::new(Severity::Warn, "Dish", "no rule matched");
        assert_eq!(msg.to_string(), "[WARN] Dish: no rule matched");
        assert!(!msg.is_error());
    }

    #[test]
    fn test_severity_serde() {
        let json = serde_json::to_string(&Severity::Error).unwrap();
        assert_eq!(json, "\"error\"");
        let back: Severity = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(back, Severity::Warn);
    }
}
