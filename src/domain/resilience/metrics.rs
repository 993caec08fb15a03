//! Resilience metrics and the growth-state bands derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Narrative tier for a resilience score.
///
/// Bands are fixed, inclusive below and exclusive above, and together
/// cover the whole 0-100 scale; the top band is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthState {
    Sprout,
    Sapling,
    YoungTree,
    Flourishing,
}

impl GrowthState {
    /// Maps a composite score onto its band.
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            GrowthState::Sprout
        } else if score < 60.0 {
            GrowthState::Sapling
        } else if score < 80.0 {
            GrowthState::YoungTree
        } else {
            GrowthState::Flourishing
        }
    }

    /// Returns the storage/display label for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthState::Sprout => "sprout",
            GrowthState::Sapling => "sapling",
            GrowthState::YoungTree => "young_tree",
            GrowthState::Flourishing => "flourishing",
        }
    }
}

impl fmt::Display for GrowthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GrowthState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sprout" => Ok(GrowthState::Sprout),
            "sapling" => Ok(GrowthState::Sapling),
            "young_tree" => Ok(GrowthState::YoungTree),
            "flourishing" => Ok(GrowthState::Flourishing),
            _ => Err(ValidationError::invalid_format(
                "growth_state",
                format!("unknown state '{}'", s),
            )),
        }
    }
}

/// Composite resilience snapshot for one trailing week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResilienceMetrics {
    /// Composite score on the 0-100 scale.
    pub score: f64,
    /// Fraction of adjacent label changes.
    pub volatility: f64,
    /// Fraction of negative moments followed directly by a positive one.
    pub recovery_speed: f64,
    /// Fraction of positive-labeled events.
    pub positive_ratio: f64,
    pub growth_state: GrowthState,
}

impl ResilienceMetrics {
    /// Fixed low-confidence baseline used below the sample minimum.
    ///
    /// A deliberate default for sparse data, not an error value.
    pub fn baseline() -> Self {
        Self {
            score: 30.0,
            volatility: 0.5,
            recovery_speed: 0.3,
            positive_ratio: 0.4,
            growth_state: GrowthState::Sprout,
        }
    }
}
