//! Weekly goal generation from resilience metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GoalId, UserId, WeekKey};

use super::ResilienceMetrics;

/// One entry of the goal cascade.
pub struct GoalRule {
    pub name: &'static str,
    pub applies: fn(&ResilienceMetrics) -> bool,
    pub text: &'static str,
}

/// The cascade, highest priority first. First match wins.
pub static GOAL_RULES: [GoalRule; 4] = [
    GoalRule {
        name: "fast_recovery",
        applies: |m| m.recovery_speed > 0.7,
        text: "You bounced back faster this week. Try one gratitude reflection today.",
    },
    GoalRule {
        name: "positive_streak",
        applies: |m| m.positive_ratio > 0.6,
        text: "You kept a positive streak going this week. Celebrate with something you enjoy.",
    },
    GoalRule {
        name: "high_volatility",
        applies: |m| m.volatility > 0.6,
        text: "Mood swings increased. Do a 2-minute grounding exercise.",
    },
    GoalRule {
        name: "low_score",
        applies: |m| m.score < 40.0,
        text: "Start small: take 3 deep breaths when you feel overwhelmed.",
    },
];

/// Fallback when no cascade rule applies.
pub static DEFAULT_GOAL: GoalRule = GoalRule {
    name: "keep_building",
    applies: |_| true,
    text: "Keep building resilience. Try a 5-minute mindfulness break today.",
};

/// Picks the goal text for the given metrics. Pure function.
pub fn goal_text(metrics: &ResilienceMetrics) -> &'static str {
    GOAL_RULES
        .iter()
        .find(|rule| (rule.applies)(metrics))
        .unwrap_or(&DEFAULT_GOAL)
        .text
}

/// A generated weekly goal.
///
/// The goal log is append-only: every generator invocation produces a new
/// row. Consumers display the most recent goal per (user, week).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGoal {
    pub id: GoalId,
    pub user_id: UserId,
    pub week: WeekKey,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl WeeklyGoal {
    /// Generates the goal for a user's current metrics.
    pub fn generate(
        user_id: UserId,
        week: WeekKey,
        metrics: &ResilienceMetrics,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: GoalId::new(),
            user_id,
            week,
            text: goal_text(metrics).to_string(),
            completed: false,
            created_at,
        }
    }
}
