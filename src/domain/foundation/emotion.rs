//! The closed emotion label set recognized by the analytics core.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// An emotion label from the fixed detection vocabulary.
///
/// The taxonomy is closed: labels the detector emits outside this set are
/// degraded to [`Emotion::Neutral`] at the store boundary rather than
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Joyful,
    Excited,
    Surprised,
    Neutral,
    Calm,
    Tired,
    Anxious,
    Stressed,
    Angry,
    Sad,
    Fear,
}

impl Emotion {
    /// All labels, in declaration order.
    pub const ALL: [Emotion; 12] = [
        Emotion::Happy,
        Emotion::Joyful,
        Emotion::Excited,
        Emotion::Surprised,
        Emotion::Neutral,
        Emotion::Calm,
        Emotion::Tired,
        Emotion::Anxious,
        Emotion::Stressed,
        Emotion::Angry,
        Emotion::Sad,
        Emotion::Fear,
    ];

    /// Returns the canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Joyful => "joyful",
            Emotion::Excited => "excited",
            Emotion::Surprised => "surprised",
            Emotion::Neutral => "neutral",
            Emotion::Calm => "calm",
            Emotion::Tired => "tired",
            Emotion::Anxious => "anxious",
            Emotion::Stressed => "stressed",
            Emotion::Angry => "angry",
            Emotion::Sad => "sad",
            Emotion::Fear => "fear",
        }
    }

    /// Parses a label, mapping anything outside the vocabulary to `Neutral`.
    ///
    /// Matching is case-insensitive.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Emotion::Neutral)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Emotion::Happy),
            "joyful" => Ok(Emotion::Joyful),
            "excited" => Ok(Emotion::Excited),
            "surprised" => Ok(Emotion::Surprised),
            "neutral" => Ok(Emotion::Neutral),
            "calm" => Ok(Emotion::Calm),
            "tired" => Ok(Emotion::Tired),
            "anxious" => Ok(Emotion::Anxious),
            "stressed" => Ok(Emotion::Stressed),
            "angry" => Ok(Emotion::Angry),
            "sad" => Ok(Emotion::Sad),
            "fear" => Ok(Emotion::Fear),
            _ => Err(ValidationError::invalid_format(
                "emotion",
                format!("unknown label '{}'", s),
            )),
        }
    }
}
