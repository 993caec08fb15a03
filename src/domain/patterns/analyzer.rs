//! Pattern analyzer - fixed warning rules over temporal buckets.
//!
//! Rules run in a fixed order and only ever append to the insight lists;
//! the risk level starts low and can only escalate. Both properties are
//! part of the output contract.

use chrono::Weekday;

use crate::domain::emotion::{day_name, mean, EmotionEvent, TemporalBuckets, TimeOfDay};
use crate::domain::foundation::RiskLevel;

use super::PatternInsight;

/// Weekday mean below which a day is flagged as a stress pattern.
const LOW_DAY_MEAN: f64 = 2.5;
/// Sunday-specific threshold, slightly looser than the general one.
const SUNDAY_MEAN: f64 = 2.8;
/// Evening-period mean below which the evening dip fires.
const EVENING_MEAN: f64 = 2.5;
/// Drop between half-window means that counts as a declining trend.
const TREND_DROP: f64 = 0.5;
/// Trailing daily averages considered by the trend and severity rules.
const TREND_WINDOW: usize = 7;
/// Minimum daily averages before trend or severity conclusions are drawn.
const TREND_MIN_DAYS: usize = 3;
/// Trailing mean below which the sustained-severity rule fires.
const SEVERE_MEAN: f64 = 2.0;
/// Weekday mean above which the day is called out as a bright spot.
const BEST_DAY_MEAN: f64 = 4.0;
/// Overall mean below which general self-care recommendations are added.
const LOW_OVERALL_MEAN: f64 = 3.0;
/// Overall mean at or above which the positive-trend note is added.
const POSITIVE_OVERALL_MEAN: f64 = 4.0;

/// Ordered rule table; evaluation sequence is a contract.
const RULES: [fn(&TemporalBuckets, &mut PatternInsight); 8] = [
    rule_lowest_weekday,
    rule_sunday_stress,
    rule_monday_blues,
    rule_evening_dip,
    rule_declining_trend,
    rule_sustained_severity,
    rule_best_weekday,
    rule_overall_mood,
];

/// Runs every pattern rule, in order, over the given events.
pub fn analyze(events: &[EmotionEvent]) -> PatternInsight {
    let buckets = TemporalBuckets::from_events(events);
    let mut insight = PatternInsight::default();
    for rule in RULES {
        rule(&buckets, &mut insight);
    }
    insight
}

fn rule_lowest_weekday(buckets: &TemporalBuckets, insight: &mut PatternInsight) {
    if let Some((day, avg)) = buckets.lowest_weekday() {
        if avg < LOW_DAY_MEAN {
            let day = day_name(day);
            insight.warnings.push(format!(
                "You show increased stress on {}s. Consider scheduling lighter tasks on those days.",
                day
            ));
            insight
                .patterns
                .push(format!("Low mood detected on {}s (avg: {:.1}/5)", day, avg));
        }
    }
}

fn rule_sunday_stress(buckets: &TemporalBuckets, insight: &mut PatternInsight) {
    if let Some(avg) = buckets.weekday_mean(Weekday::Sun) {
        if avg < SUNDAY_MEAN {
            insight.warnings.push(
                "You seem more stressed every Sunday evening. Set aside some time to relax today."
                    .to_string(),
            );
        }
    }
}

fn rule_monday_blues(buckets: &TemporalBuckets, insight: &mut PatternInsight) {
    if let Some(avg) = buckets.weekday_mean(Weekday::Mon) {
        if avg < LOW_DAY_MEAN {
            insight.warnings.push(
                "Monday mornings tend to be tough for you. Start with something you enjoy!"
                    .to_string(),
            );
        }
    }
}

fn rule_evening_dip(buckets: &TemporalBuckets, insight: &mut PatternInsight) {
    if let Some(avg) = buckets.period_mean(TimeOfDay::Evening) {
        if avg < EVENING_MEAN {
            insight.warnings.push(
                "Your mood tends to drop in the evenings. Try a calming routine before bed."
                    .to_string(),
            );
            insight.recommendations.push(
                "Create a calming evening routine: dim lights, avoid screens, try meditation."
                    .to_string(),
            );
        }
    }
}

fn rule_declining_trend(buckets: &TemporalBuckets, insight: &mut PatternInsight) {
    let recent = trailing_daily_means(buckets);
    if recent.len() < TREND_MIN_DAYS {
        return;
    }

    let mid = recent.len() / 2;
    let first = mean(&recent[..mid]).unwrap_or(0.0);
    let second = mean(&recent[mid..]).unwrap_or(0.0);

    if second < first - TREND_DROP {
        insight.warnings.push(
            "Your mood has been declining over the past few days. Consider reaching out to someone you trust."
                .to_string(),
        );
        insight.risk_level.escalate(RiskLevel::Medium);
        insight
            .recommendations
            .push("Schedule time with friends or family this week.".to_string());
    }
}

fn rule_sustained_severity(buckets: &TemporalBuckets, insight: &mut PatternInsight) {
    let recent = trailing_daily_means(buckets);
    if recent.len() < TREND_MIN_DAYS {
        return;
    }

    if mean(&recent).unwrap_or(f64::MAX) < SEVERE_MEAN {
        insight.warnings.push(
            "High priority: a sustained low mood pattern was detected. Please consider talking to a mental health professional."
                .to_string(),
        );
        insight.risk_level.escalate(RiskLevel::High);
        insight.recommendations.extend([
            "Consider speaking with a mental health professional.".to_string(),
            "Reach out to a trusted friend or family member.".to_string(),
            "National Suicide Prevention Lifeline: 988".to_string(),
        ]);
    }
}

fn rule_best_weekday(buckets: &TemporalBuckets, insight: &mut PatternInsight) {
    if let Some((day, avg)) = buckets.best_weekday() {
        if avg > BEST_DAY_MEAN {
            insight.patterns.push(format!(
                "You feel best on {}s! Try to schedule enjoyable activities then.",
                day_name(day)
            ));
        }
    }
}

fn rule_overall_mood(buckets: &TemporalBuckets, insight: &mut PatternInsight) {
    let Some(overall) = buckets.overall_mean() else {
        return;
    };

    if overall < LOW_OVERALL_MEAN {
        insight.recommendations.extend([
            "Maintain a regular sleep schedule (7-9 hours).".to_string(),
            "Exercise for 20-30 minutes daily, even a short walk helps.".to_string(),
            "Practice gratitude: write down 3 good things each day.".to_string(),
        ]);
    } else if overall >= POSITIVE_OVERALL_MEAN {
        insight
            .patterns
            .push("Your overall mood is positive! Keep up your current routines.".to_string());
    }
}

/// The most recent `TREND_WINDOW` entries of the daily-average series.
fn trailing_daily_means(buckets: &TemporalBuckets) -> Vec<f64> {
    let series = buckets.daily_series();
    let start = series.len().saturating_sub(TREND_WINDOW);
    series[start..].iter().map(|(_, avg)| *avg).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Emotion;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        // June 2026: the 1st is a Monday, the 7th a Sunday.
        Utc.with_ymd_and_hms(2026, 6, day, hour, 0, 0).unwrap()
    }

    fn event(emotion: Emotion, confidence: f64, ts: DateTime<Utc>) -> EmotionEvent {
        EmotionEvent::new(emotion, confidence, ts)
    }

    /// Low Monday and Sunday moods with a happy Wednesday in between.
    fn rough_week() -> Vec<EmotionEvent> {
        vec![
            event(Emotion::Sad, 0.9, at(1, 8)),
            event(Emotion::Sad, 0.9, at(1, 18)),
            event(Emotion::Angry, 0.8, at(2, 9)),
            event(Emotion::Happy, 0.9, at(3, 10)),
            event(Emotion::Sad, 0.9, at(7, 19)),
        ]
    }

    #[test]
    fn low_monday_and_sunday_fire_their_warnings() {
        let insight = analyze(&rough_week());

        assert!(insight
            .warnings
            .iter()
            .any(|w| w.contains("Monday mornings tend to be tough")));
        assert!(insight
            .warnings
            .iter()
            .any(|w| w.contains("every Sunday evening")));
    }

    #[test]
    fn lowest_weekday_warning_names_the_day() {
        let insight = analyze(&rough_week());

        // Monday and Sunday tie at 0.9; the earlier day wins.
        assert!(insight
            .warnings
            .iter()
            .any(|w| w.contains("increased stress on Mondays")));
        assert!(insight
            .patterns
            .iter()
            .any(|p| p.contains("Low mood detected on Mondays (avg: 0.9/5)")));
    }

    #[test]
    fn evening_dip_adds_warning_and_recommendation() {
        let insight = analyze(&rough_week());

        assert!(insight
            .warnings
            .iter()
            .any(|w| w.contains("drop in the evenings")));
        assert!(insight
            .recommendations
            .iter()
            .any(|r| r.contains("calming evening routine")));
    }

    #[test]
    fn declining_week_escalates_and_recommends_reconnecting() {
        // All sad, confidence falling off sharply mid-week.
        let confidences = [1.0, 1.0, 1.0, 0.4, 0.4, 0.4, 0.4];
        let events: Vec<_> = confidences
            .iter()
            .enumerate()
            .map(|(i, c)| event(Emotion::Sad, *c, at(1 + i as u32, 10)))
            .collect();

        let insight = analyze(&events);

        assert!(insight
            .warnings
            .iter()
            .any(|w| w.contains("mood has been declining")));
        assert!(insight
            .warnings
            .iter()
            .any(|w| w.contains("sustained low mood pattern")));
        assert!(insight
            .recommendations
            .iter()
            .any(|r| r.contains("988")));
        assert_eq!(insight.risk_level, RiskLevel::High);
    }

    #[test]
    fn flat_low_week_flags_severity_but_not_decline() {
        let events: Vec<_> = (1..=7)
            .map(|d| event(Emotion::Sad, 0.9, at(d, 10)))
            .collect();

        let insight = analyze(&events);

        assert!(!insight
            .warnings
            .iter()
            .any(|w| w.contains("mood has been declining")));
        assert!(insight
            .warnings
            .iter()
            .any(|w| w.contains("sustained low mood pattern")));
        assert_eq!(insight.risk_level, RiskLevel::High);
    }

    #[test]
    fn severity_needs_a_minimum_of_daily_averages() {
        // Two very low days are not enough to conclude anything.
        let events = vec![
            event(Emotion::Sad, 1.0, at(1, 10)),
            event(Emotion::Sad, 1.0, at(2, 10)),
        ];

        let insight = analyze(&events);

        assert_eq!(insight.risk_level, RiskLevel::Low);
        assert!(!insight
            .warnings
            .iter()
            .any(|w| w.contains("sustained low mood pattern")));
    }

    #[test]
    fn good_week_notes_best_day_and_positive_mood() {
        let events = vec![
            event(Emotion::Happy, 1.0, at(1, 10)),
            event(Emotion::Joyful, 0.9, at(3, 12)),
            event(Emotion::Happy, 0.9, at(5, 15)),
        ];

        let insight = analyze(&events);

        assert!(insight.patterns.iter().any(|p| p.contains("You feel best on")));
        assert!(insight
            .patterns
            .iter()
            .any(|p| p.contains("overall mood is positive")));
        assert!(insight.warnings.is_empty());
        assert_eq!(insight.risk_level, RiskLevel::Low);
    }

    #[test]
    fn analysis_is_idempotent_for_identical_input() {
        let events = rough_week();
        let a = analyze(&events);
        let b = analyze(&events);

        assert_eq!(a.warnings, b.warnings);
        assert_eq!(a.patterns, b.patterns);
        assert_eq!(a.recommendations, b.recommendations);
        assert_eq!(a.risk_level, b.risk_level);
    }

    #[test]
    fn empty_history_produces_empty_insight() {
        let insight = analyze(&[]);
        assert!(insight.warnings.is_empty());
        assert!(insight.patterns.is_empty());
        assert!(insight.recommendations.is_empty());
        assert_eq!(insight.risk_level, RiskLevel::Low);
    }
}
