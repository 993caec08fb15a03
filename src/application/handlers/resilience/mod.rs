//! Resilience query and command handlers.

mod generate_weekly_goal;
mod get_resilience;
mod get_weekly_trend;

pub use generate_weekly_goal::{
    GenerateWeeklyGoalCommand, GenerateWeeklyGoalHandler, GenerateWeeklyGoalResult,
};
pub use get_resilience::{GetResilienceHandler, GetResilienceQuery, GetResilienceResult};
pub use get_weekly_trend::{GetWeeklyTrendHandler, GetWeeklyTrendQuery, GetWeeklyTrendResult};
