//! Day-of-week outlooks built from historical weekday moods.
//!
//! Unlike the pattern analyzer these use the unweighted base valence per
//! label: a low-confidence detection still counts as that label's typical
//! mood for planning purposes.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::domain::emotion::{base_valence, day_name, mean, EmotionEvent, DAYS};

/// Weekday mean below which a day goes on the watch list.
const WATCH_DAY_MEAN: f64 = 2.5;
/// Weekday mean at or above which a day counts as a good day.
const GOOD_DAY_MEAN: f64 = 4.0;

/// Mood outlook for the upcoming week.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyOutlook {
    pub summary: String,
    pub watch_days: Vec<String>,
    pub good_days: Vec<String>,
    pub tips: Vec<String>,
}

/// Classifies each weekday by its historical mean into watch/good lists.
///
/// Days are reported in calendar order, Monday first. An empty history
/// yields an empty outlook.
pub fn weekly_outlook(events: &[EmotionEvent]) -> WeeklyOutlook {
    let mut outlook = WeeklyOutlook::default();
    if events.is_empty() {
        return outlook;
    }

    let mut day_scores: [Vec<f64>; 7] = Default::default();
    for event in events {
        let idx = event.timestamp.weekday().num_days_from_monday() as usize;
        day_scores[idx].push(base_valence(event.emotion));
    }

    for day in DAYS {
        let idx = day.num_days_from_monday() as usize;
        if let Some(avg) = mean(&day_scores[idx]) {
            if avg < WATCH_DAY_MEAN {
                outlook.watch_days.push(day_name(day).to_string());
            } else if avg >= GOOD_DAY_MEAN {
                outlook.good_days.push(day_name(day).to_string());
            }
        }
    }

    if !outlook.watch_days.is_empty() {
        outlook.summary = format!(
            "Watch out for: {}. Plan self-care activities.",
            outlook.watch_days.join(", ")
        );
        outlook
            .tips
            .push("Schedule lighter workload on challenging days.".to_string());
    }

    if !outlook.good_days.is_empty() {
        outlook.tips.push(format!(
            "Leverage your energy on {} for important tasks.",
            outlook.good_days.join(", ")
        ));
    }

    outlook
}

/// Expected mood class for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TodayMood {
    Positive,
    Challenging,
    Neutral,
}

/// Same-weekday historical forecast for today.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayOutlook {
    pub day: String,
    pub prediction: TodayMood,
    pub confidence: f64,
    pub advice: String,
}

/// Predicts today's mood from past events on the same weekday.
///
/// With no same-weekday history the prediction stays neutral with no
/// advice to give.
pub fn today_outlook(events: &[EmotionEvent], now: DateTime<Utc>) -> TodayOutlook {
    let today = now.weekday();
    let day = day_name(today).to_string();

    let same_day: Vec<f64> = events
        .iter()
        .filter(|e| e.timestamp.weekday() == today)
        .map(|e| base_valence(e.emotion))
        .collect();

    let Some(avg) = mean(&same_day) else {
        return TodayOutlook {
            day,
            prediction: TodayMood::Neutral,
            confidence: 0.7,
            advice: String::new(),
        };
    };

    if avg >= GOOD_DAY_MEAN {
        TodayOutlook {
            advice: format!("{}s are usually good for you! Enjoy your day.", day),
            day,
            prediction: TodayMood::Positive,
            confidence: 0.7,
        }
    } else if avg < WATCH_DAY_MEAN {
        TodayOutlook {
            advice: format!("{}s can be tough. Be kind to yourself today.", day),
            day,
            prediction: TodayMood::Challenging,
            confidence: 0.8,
        }
    } else {
        TodayOutlook {
            advice: format!("Your {} mood is typically balanced. Stay mindful.", day),
            day,
            prediction: TodayMood::Neutral,
            confidence: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Emotion;
    use chrono::{TimeZone, Utc};

    fn at(day: u32, hour: u32) -> chrono::DateTime<Utc> {
        // June 2026: the 1st is a Monday.
        Utc.with_ymd_and_hms(2026, 6, day, hour, 0, 0).unwrap()
    }

    fn event(emotion: Emotion, ts: chrono::DateTime<Utc>) -> EmotionEvent {
        EmotionEvent::new(emotion, 0.5, ts)
    }

    #[test]
    fn outlook_separates_watch_and_good_days() {
        let events = vec![
            event(Emotion::Sad, at(1, 9)),    // Monday, base 1.0
            event(Emotion::Happy, at(5, 9)),  // Friday, base 5.0
            event(Emotion::Calm, at(3, 9)),   // Wednesday, base 3.0
        ];

        let outlook = weekly_outlook(&events);

        assert_eq!(outlook.watch_days, vec!["Monday"]);
        assert_eq!(outlook.good_days, vec!["Friday"]);
        assert!(outlook.summary.contains("Watch out for: Monday"));
        assert_eq!(outlook.tips.len(), 2);
        assert!(outlook.tips[1].contains("Friday"));
    }

    #[test]
    fn outlook_uses_base_valence_not_confidence() {
        // A hesitant happy detection is still a good sign for that weekday.
        let events = vec![event(Emotion::Happy, at(5, 9))];
        let outlook = weekly_outlook(&events);
        assert_eq!(outlook.good_days, vec!["Friday"]);
    }

    #[test]
    fn outlook_lists_days_in_calendar_order() {
        let events = vec![
            event(Emotion::Sad, at(7, 9)), // Sunday
            event(Emotion::Sad, at(1, 9)), // Monday
        ];

        let outlook = weekly_outlook(&events);
        assert_eq!(outlook.watch_days, vec!["Monday", "Sunday"]);
    }

    #[test]
    fn empty_history_yields_empty_outlook() {
        let outlook = weekly_outlook(&[]);
        assert!(outlook.summary.is_empty());
        assert!(outlook.watch_days.is_empty());
        assert!(outlook.good_days.is_empty());
        assert!(outlook.tips.is_empty());
    }

    #[test]
    fn today_outlook_positive_on_historically_good_day() {
        let events = vec![
            event(Emotion::Happy, at(1, 9)),
            event(Emotion::Joyful, at(8, 10)), // following Monday
        ];

        let outlook = today_outlook(&events, at(15, 8)); // a Monday

        assert_eq!(outlook.day, "Monday");
        assert_eq!(outlook.prediction, TodayMood::Positive);
        assert_eq!(outlook.confidence, 0.7);
        assert!(outlook.advice.contains("usually good for you"));
    }

    #[test]
    fn today_outlook_challenging_raises_confidence() {
        let events = vec![event(Emotion::Sad, at(1, 9))];
        let outlook = today_outlook(&events, at(8, 8));

        assert_eq!(outlook.prediction, TodayMood::Challenging);
        assert_eq!(outlook.confidence, 0.8);
        assert!(outlook.advice.contains("Be kind to yourself"));
    }

    #[test]
    fn today_outlook_balanced_in_the_middle() {
        let events = vec![event(Emotion::Calm, at(1, 9))];
        let outlook = today_outlook(&events, at(8, 8));

        assert_eq!(outlook.prediction, TodayMood::Neutral);
        assert!(outlook.advice.contains("typically balanced"));
    }

    #[test]
    fn today_outlook_without_history_has_no_advice() {
        let events = vec![event(Emotion::Sad, at(1, 9))]; // Monday only
        let outlook = today_outlook(&events, at(2, 8)); // a Tuesday

        assert_eq!(outlook.prediction, TodayMood::Neutral);
        assert!(outlook.advice.is_empty());
    }
}
