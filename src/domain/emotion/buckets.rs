//! Temporal bucketing - groups scored events by weekday and time of day.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use super::{score_events, EmotionEvent};

/// Weekdays in calendar order, Monday first.
pub const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Returns the full English name of a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Fixed time-of-day periods by hour range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// [05:00, 12:00)
    Morning,
    /// [12:00, 17:00)
    Afternoon,
    /// [17:00, 21:00)
    Evening,
    /// [21:00, 05:00), wrapping past midnight
    Night,
}

impl TimeOfDay {
    /// Classifies an hour of day (0-23) into its period.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    /// Returns the display label for this period.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    fn index(self) -> usize {
        match self {
            TimeOfDay::Morning => 0,
            TimeOfDay::Afternoon => 1,
            TimeOfDay::Evening => 2,
            TimeOfDay::Night => 3,
        }
    }
}

/// Mean of a slice, or None when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Confidence-weighted valence scores grouped along the temporal axes the
/// pattern rules evaluate: weekday, time-of-day period, and calendar date.
#[derive(Debug, Clone, Default)]
pub struct TemporalBuckets {
    day_scores: [Vec<f64>; 7],
    period_scores: [Vec<f64>; 4],
    daily_series: Vec<(NaiveDate, f64)>,
}

impl TemporalBuckets {
    /// Buckets the given events, scoring them on the way in.
    pub fn from_events(events: &[EmotionEvent]) -> Self {
        let scored = score_events(events);

        let mut day_scores: [Vec<f64>; 7] = Default::default();
        let mut period_scores: [Vec<f64>; 4] = Default::default();
        let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();

        for event in &scored {
            let day_idx = event.timestamp.weekday().num_days_from_monday() as usize;
            day_scores[day_idx].push(event.valence);

            let period = TimeOfDay::from_hour(event.timestamp.hour());
            period_scores[period.index()].push(event.valence);

            by_date
                .entry(event.timestamp.date_naive())
                .or_default()
                .push(event.valence);
        }

        let daily_series = by_date
            .into_iter()
            .map(|(date, scores)| {
                let avg = scores.iter().sum::<f64>() / scores.len() as f64;
                (date, avg)
            })
            .collect();

        Self {
            day_scores,
            period_scores,
            daily_series,
        }
    }

    /// Mean valence for a weekday, None if that day has no samples.
    pub fn weekday_mean(&self, day: Weekday) -> Option<f64> {
        mean(&self.day_scores[day.num_days_from_monday() as usize])
    }

    /// Mean valence for a time-of-day period, None if it has no samples.
    pub fn period_mean(&self, period: TimeOfDay) -> Option<f64> {
        mean(&self.period_scores[period.index()])
    }

    /// Chronological (date, mean valence) series.
    pub fn daily_series(&self) -> &[(NaiveDate, f64)] {
        &self.daily_series
    }

    /// Mean over every scored sample, None when there are no events.
    pub fn overall_mean(&self) -> Option<f64> {
        let (sum, count) = self
            .day_scores
            .iter()
            .flatten()
            .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
        if count == 0 {
            return None;
        }
        Some(sum / count as f64)
    }

    /// Weekday with the lowest mean; ties break to the earliest day.
    pub fn lowest_weekday(&self) -> Option<(Weekday, f64)> {
        self.extreme_weekday(|candidate, best| candidate < best)
    }

    /// Weekday with the highest mean; ties break to the earliest day.
    pub fn best_weekday(&self) -> Option<(Weekday, f64)> {
        self.extreme_weekday(|candidate, best| candidate > best)
    }

    fn extreme_weekday(&self, better: impl Fn(f64, f64) -> bool) -> Option<(Weekday, f64)> {
        let mut found: Option<(Weekday, f64)> = None;
        for day in DAYS {
            if let Some(avg) = self.weekday_mean(day) {
                match found {
                    Some((_, best)) if !better(avg, best) => {}
                    _ => found = Some((day, avg)),
                }
            }
        }
        found
    }
}
