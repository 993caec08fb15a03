//! Pattern analysis output.

use serde::Serialize;

use crate::domain::foundation::RiskLevel;

/// Warnings, observed patterns, and recommendations derived from one pass
/// over a user's event history.
///
/// List order is deterministic: entries appear in rule-evaluation order, so
/// identical input always produces identical output.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternInsight {
    pub warnings: Vec<String>,
    pub patterns: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
}
