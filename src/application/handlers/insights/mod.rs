//! Insight and outlook query handlers.

mod get_insights;
mod get_today_outlook;
mod get_weekly_outlook;

pub use get_insights::{GetInsightsHandler, GetInsightsQuery, GetInsightsResult};
pub use get_today_outlook::{GetTodayOutlookHandler, GetTodayOutlookQuery, GetTodayOutlookResult};
pub use get_weekly_outlook::{
    GetWeeklyOutlookHandler, GetWeeklyOutlookQuery, GetWeeklyOutlookResult,
};
