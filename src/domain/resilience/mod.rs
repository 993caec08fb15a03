//! Resilience scoring, growth states, and weekly goal generation.

mod goals;
mod metrics;
mod scorer;

pub use goals::{goal_text, GoalRule, WeeklyGoal, DEFAULT_GOAL, GOAL_RULES};
pub use metrics::{GrowthState, ResilienceMetrics};
pub use scorer::{
    compute, compute_window, MIN_SAMPLES, NEGATIVE_LABELS, POSITIVE_LABELS,
};
