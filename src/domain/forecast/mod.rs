//! Rule-based 1- and 3-day mood forecasting.

mod features;
mod forecaster;

pub use features::{EmotionFeatures, MIN_SAMPLES, POSITIVE_LABELS};
pub use forecaster::{
    forecast_next_day, forecast_three_day, DayForecast, ForecastDay, ForecastResult, ForecastRule,
    SkySymbol, DEFAULT_RULE, FORECAST_RULES,
};
