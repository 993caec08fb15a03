//! Forecast query handlers.

mod get_daily_forecast;
mod get_three_day_forecast;

pub use get_daily_forecast::{
    GetDailyForecastHandler, GetDailyForecastQuery, GetDailyForecastResult,
};
pub use get_three_day_forecast::{
    GetThreeDayForecastHandler, GetThreeDayForecastQuery, GetThreeDayForecastResult,
};
