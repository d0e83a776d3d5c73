//! Hit policies
//!
//! The closed set of algorithms for combining the outputs of matching
//! rules. Each policy has a short token (`U`, `C+`, ...) and a long name
//! (`UNIQUE`, `COLLECT SUM`, ...); both are accepted case-insensitively.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hit policy of a decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HitPolicy {
    /// Only a single rule can be matched
    Unique,
    /// Return the first match in rule order
    First,
    /// Return the output with the highest output priority, per output column
    Priority,
    /// Multiple rules can match, but they must all have the same output
    Any,
    /// Return a list of the outputs (in rule order)
    Collect,
    /// Return the sum of the outputs
    CollectSum,
    /// Return the number of distinct outputs
    CollectCount,
    /// Return the minimum-valued output
    CollectMin,
    /// Return the maximum-valued output
    CollectMax,
    /// Return a list of outputs in rule order
    RuleOrder,
    /// Return a list of outputs in the order of the output values list
    OutputOrder,
}

impl HitPolicy {
    /// Every hit policy, in declaration order
    pub const ALL: [HitPolicy; 11] = [
        HitPolicy::Unique,
        HitPolicy::First,
        HitPolicy::Priority,
        HitPolicy::Any,
        HitPolicy::Collect,
        HitPolicy::CollectSum,
        HitPolicy::CollectCount,
        HitPolicy::CollectMin,
        HitPolicy::CollectMax,
        HitPolicy::RuleOrder,
        HitPolicy::OutputOrder,
    ];

    /// Single-token form, e.g. `C#`
    pub fn short_name(&self) -> &'static str {
        match self {
            HitPolicy::Unique => "U",
            HitPolicy::First => "F",
            HitPolicy::Priority => "P",
            HitPolicy::Any => "A",
            HitPolicy::Collect => "C",
            HitPolicy::CollectSum => "C+",
            HitPolicy::CollectCount => "C#",
            HitPolicy::CollectMin => "C<",
            HitPolicy::CollectMax => "C>",
            HitPolicy::RuleOrder => "R",
            HitPolicy::OutputOrder => "O",
        }
    }

    /// Long form, e.g. `COLLECT COUNT`
    pub fn long_name(&self) -> &'static str {
        match self {
            HitPolicy::Unique => "UNIQUE",
            HitPolicy::First => "FIRST",
            HitPolicy::Priority => "PRIORITY",
            HitPolicy::Any => "ANY",
            HitPolicy::Collect => "COLLECT",
            HitPolicy::CollectSum => "COLLECT SUM",
            HitPolicy::CollectCount => "COLLECT COUNT",
            HitPolicy::CollectMin => "COLLECT MIN",
            HitPolicy::CollectMax => "COLLECT MAX",
            HitPolicy::RuleOrder => "RULE ORDER",
            HitPolicy::OutputOrder => "OUTPUT ORDER",
        }
    }

    /// Returns true for the policies ranked by output-clause domains
    pub fn uses_output_domain(&self) -> bool {
        matches!(self, HitPolicy::Priority | HitPolicy::OutputOrder)
    }
}

impl FromStr for HitPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let policy = s.trim().to_uppercase();
        HitPolicy::ALL
            .iter()
            .copied()
            .find(|p| p.short_name() == policy || p.long_name() == policy)
            .ok_or_else(|| CoreError::UnknownHitPolicy(s.to_string()))
    }
}

impl TryFrom<String> for HitPolicy {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HitPolicy> for String {
    fn from(policy: HitPolicy) -> Self {
        policy.long_name().to_string()
    }
}

impl fmt::Display for HitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}
