//! Rule-based mood forecasting over 1- and 3-day horizons.
//!
//! The cascade is an explicit ordered rule table rather than nested
//! conditionals, so the priority between rules is data tests can assert.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::emotion::{trailing_window, EmotionEvent};
use crate::domain::foundation::Emotion;

use super::EmotionFeatures;

/// Weather-style symbol attached to a forecast (presentation metadata).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkySymbol {
    Sunny,
    Rainy,
    Stormy,
    PartlyCloudy,
    Overcast,
}

impl SkySymbol {
    /// Returns the emoji rendering used by the presentation layer.
    pub fn as_emoji(&self) -> &'static str {
        match self {
            SkySymbol::Sunny => "☀️",
            SkySymbol::Rainy => "🌧️",
            SkySymbol::Stormy => "⛈️",
            SkySymbol::PartlyCloudy => "🌤️",
            SkySymbol::Overcast => "🌥️",
        }
    }
}

/// Which day of the horizon a forecast entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastDay {
    Today,
    Tomorrow,
    DayAfter,
}

impl ForecastDay {
    /// Returns the display label for this day.
    pub fn label(&self) -> &'static str {
        match self {
            ForecastDay::Today => "Today",
            ForecastDay::Tomorrow => "Tomorrow",
            ForecastDay::DayAfter => "Day After",
        }
    }
}

/// Forecast for a single day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayForecast {
    pub day: ForecastDay,
    pub mood: Emotion,
    pub confidence: f64,
    pub symbol: SkySymbol,
    pub advice: String,
}

/// A 1- or 3-day forecast.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub days: Vec<DayForecast>,
}

impl ForecastResult {
    /// Wraps a single-day forecast.
    pub fn single(day: DayForecast) -> Self {
        Self { days: vec![day] }
    }

    /// Number of forecast days.
    pub fn horizon(&self) -> usize {
        self.days.len()
    }
}

/// One entry of the forecast cascade.
pub struct ForecastRule {
    pub name: &'static str,
    pub applies: fn(&EmotionFeatures) -> bool,
    pub mood: Emotion,
    pub confidence: f64,
    pub symbol: SkySymbol,
    pub advice: &'static str,
}

/// The cascade, highest priority first. First match wins.
pub static FORECAST_RULES: [ForecastRule; 3] = [
    ForecastRule {
        name: "mostly_positive",
        applies: |f| f.positive_ratio > 0.7,
        mood: Emotion::Happy,
        confidence: 0.85,
        symbol: SkySymbol::Sunny,
        advice: "Your outlook is bright! Capture the good mood with some journaling.",
    },
    ForecastRule {
        name: "mostly_negative",
        applies: |f| f.positive_ratio < 0.3,
        mood: Emotion::Sad,
        confidence: 0.78,
        symbol: SkySymbol::Rainy,
        advice: "Plan self-care early and take a short evening walk.",
    },
    ForecastRule {
        name: "high_volatility",
        applies: |f| f.volatility > 0.6,
        mood: Emotion::Stressed,
        confidence: 0.72,
        symbol: SkySymbol::Stormy,
        advice: "Large emotional shifts detected. Try grounding exercises.",
    },
];

/// Fallback when no cascade rule applies.
pub static DEFAULT_RULE: ForecastRule = ForecastRule {
    name: "steady",
    applies: |_| true,
    mood: Emotion::Calm,
    confidence: 0.68,
    symbol: SkySymbol::PartlyCloudy,
    advice: "A steady day ahead. Perfect for reflection or reading.",
};

/// Confidence attached to the trend-continuation third day.
const TREND_CONFIDENCE: f64 = 0.6;
/// 14-day positive ratio above which the trend is called positive.
const TREND_POSITIVE_RATIO: f64 = 0.6;

const START_LOGGING_ADVICE: &str = "Start logging emotions to get personalized forecasts!";

/// Forecasts tomorrow's mood from the trailing 7-day window.
///
/// Below the sample minimum this returns a fixed neutral placeholder
/// rather than an error.
pub fn forecast_next_day(events: &[EmotionEvent], now: DateTime<Utc>) -> DayForecast {
    let window = trailing_window(events, now, 7);
    match EmotionFeatures::extract(&window) {
        Some(features) => {
            let rule = match_rule(&features);
            day_forecast(ForecastDay::Tomorrow, rule)
        }
        None => placeholder(ForecastDay::Tomorrow),
    }
}

/// Forecasts today, tomorrow, and the day after from the trailing 14-day
/// window.
///
/// Day one reflects the window's dominant label, day two the next-day
/// cascade, day three a coarse trend continuation. Below the sample
/// minimum all three days are identical neutral placeholders.
pub fn forecast_three_day(events: &[EmotionEvent], now: DateTime<Utc>) -> ForecastResult {
    let window = trailing_window(events, now, 14);
    let Some(features) = EmotionFeatures::extract(&window) else {
        return ForecastResult {
            days: vec![
                placeholder(ForecastDay::Today),
                placeholder(ForecastDay::Tomorrow),
                placeholder(ForecastDay::DayAfter),
            ],
        };
    };

    let tomorrow = forecast_next_day(events, now);

    let today = DayForecast {
        day: ForecastDay::Today,
        mood: features.dominant,
        confidence: tomorrow.confidence,
        symbol: tomorrow.symbol,
        advice: "Current emotional state detected.".to_string(),
    };

    let day_after = if features.positive_ratio > TREND_POSITIVE_RATIO {
        DayForecast {
            day: ForecastDay::DayAfter,
            mood: Emotion::Happy,
            confidence: TREND_CONFIDENCE,
            symbol: SkySymbol::Sunny,
            advice: "Positive trend continuing!".to_string(),
        }
    } else {
        DayForecast {
            day: ForecastDay::DayAfter,
            mood: Emotion::Calm,
            confidence: TREND_CONFIDENCE,
            symbol: SkySymbol::Overcast,
            advice: "A stabilizing period ahead.".to_string(),
        }
    };

    ForecastResult {
        days: vec![today, tomorrow, day_after],
    }
}

/// First matching cascade rule, falling back to the default.
fn match_rule(features: &EmotionFeatures) -> &'static ForecastRule {
    FORECAST_RULES
        .iter()
        .find(|rule| (rule.applies)(features))
        .unwrap_or(&DEFAULT_RULE)
}

fn day_forecast(day: ForecastDay, rule: &ForecastRule) -> DayForecast {
    DayForecast {
        day,
        mood: rule.mood,
        confidence: rule.confidence,
        symbol: rule.symbol,
        advice: rule.advice.to_string(),
    }
}

fn placeholder(day: ForecastDay) -> DayForecast {
    DayForecast {
        day,
        mood: Emotion::Neutral,
        confidence: 0.5,
        symbol: SkySymbol::PartlyCloudy,
        advice: START_LOGGING_ADVICE.to_string(),
    }
}
