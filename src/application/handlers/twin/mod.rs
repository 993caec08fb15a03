//! Twin query handlers.

mod get_twin_profile;
mod get_weekly_reflection;
mod twin_response;

pub use get_twin_profile::{GetTwinProfileHandler, GetTwinProfileQuery, GetTwinProfileResult};
pub use get_weekly_reflection::{
    GetWeeklyReflectionHandler, GetWeeklyReflectionQuery, GetWeeklyReflectionResult,
};
pub use twin_response::{TwinResponseHandler, TwinResponseQuery, TwinResponseResult};
