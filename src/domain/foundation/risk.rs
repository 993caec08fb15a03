//! Escalating-only risk classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity classification produced by pattern analysis.
///
/// Within one analysis pass the level may only move upward; [`RiskLevel::escalate`]
/// is the sole mutation path and enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Raises the level to `to` if that is higher; lowering is a no-op.
    pub fn escalate(&mut self, to: RiskLevel) {
        if to > *self {
            *self = to;
        }
    }

    /// Returns the display label for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Low
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
