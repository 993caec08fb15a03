//! Contextual twin responses and the weekly reflection paragraph.

use serde::Serialize;

use crate::domain::emotion::{EmotionEvent, TimeOfDay};
use crate::domain::foundation::Emotion;

use super::{dominant_emotion, TwinProfile};

/// Rolling sad share above which the twin proactively offers a mood boost.
const SAD_SHARE_HIGH: f64 = 40.0;
/// Sad share above which a sad moment is treated as part of a pattern.
const SAD_SHARE_PATTERN: f64 = 20.0;

/// Coping action the twin can suggest alongside a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestedAction {
    Breathing,
    Break,
    Relaxation,
    Forecast,
}

/// A contextual message from the emotional twin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinResponse {
    pub message: String,
    /// Hex accent color for the presentation layer.
    pub accent_color: &'static str,
    pub suggestion: Option<SuggestedAction>,
}

/// Accent color associated with a label.
pub fn accent_color(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Sad => "#4FC3F7",
        Emotion::Happy | Emotion::Joyful | Emotion::Surprised => "#FFD54F",
        Emotion::Angry => "#EF5350",
        Emotion::Fear | Emotion::Anxious => "#BA68C8",
        _ => "#90A4AE",
    }
}

/// Picks the twin's response for the given profile.
///
/// Priority runs over (most-recent label, rolling sad share, rolling happy
/// share); the dominant-emotion prompt is the fallback.
pub fn twin_response(profile: Option<&TwinProfile>) -> TwinResponse {
    let Some(profile) = profile else {
        return TwinResponse {
            message: "I'm still learning about you. Let me observe your emotions for a while."
                .to_string(),
            accent_color: accent_color(Emotion::Neutral),
            suggestion: None,
        };
    };

    let recent = profile.most_recent_emotion;
    let sad_share = profile.share(Emotion::Sad);

    if sad_share > SAD_SHARE_HIGH {
        TwinResponse {
            message: format!(
                "I've noticed you've been feeling down {:.0}% of the time lately. Want to try a mood boost?",
                sad_share
            ),
            accent_color: accent_color(Emotion::Sad),
            suggestion: Some(SuggestedAction::Breathing),
        }
    } else if recent == Emotion::Sad && sad_share > SAD_SHARE_PATTERN {
        TwinResponse {
            message: "You seem low right now, and I've seen this pattern before. A short walk might help reset your energy."
                .to_string(),
            accent_color: accent_color(Emotion::Sad),
            suggestion: Some(SuggestedAction::Break),
        }
    } else if recent == Emotion::Angry {
        TwinResponse {
            message: "I sense some tension. Based on your patterns, a 2-minute breathing exercise usually helps you."
                .to_string(),
            accent_color: accent_color(Emotion::Angry),
            suggestion: Some(SuggestedAction::Breathing),
        }
    } else if recent == Emotion::Happy {
        TwinResponse {
            message: format!(
                "Love seeing that smile! You've been happy {:.0}% of the time. Keep it up!",
                profile.share(Emotion::Happy)
            ),
            accent_color: accent_color(Emotion::Happy),
            suggestion: None,
        }
    } else if recent == Emotion::Fear {
        TwinResponse {
            message: "You seem stressed. Let's try a relaxation session, it has worked for you before."
                .to_string(),
            accent_color: accent_color(Emotion::Fear),
            suggestion: Some(SuggestedAction::Relaxation),
        }
    } else {
        TwinResponse {
            message: format!(
                "Your dominant emotion lately has been {}. Want to check your weekly reflection?",
                profile.dominant_emotion
            ),
            accent_color: accent_color(profile.dominant_emotion),
            suggestion: Some(SuggestedAction::Forecast),
        }
    }
}

/// Composes the weekly mood summary from a 7-day event window.
pub fn weekly_reflection(events: &[EmotionEvent]) -> String {
    if events.is_empty() {
        return "Not enough data yet. Keep logging your emotions!".to_string();
    }

    let happy = events.iter().filter(|e| e.emotion == Emotion::Happy).count();
    let sad = events.iter().filter(|e| e.emotion == Emotion::Sad).count();

    let mut summary = format!("This week, I observed {} emotional moments. ", events.len());

    if happy > sad {
        summary.push_str(&format!("You seemed happiest {} times! ", happy));
    } else {
        summary.push_str(&format!("You had {} low moments. ", sad));
    }

    if let Some(morning) = period_dominant(events, TimeOfDay::Morning) {
        summary.push_str(&format!("Mornings were mostly {}. ", morning));
    }

    if let Some(evening) = period_dominant(events, TimeOfDay::Evening) {
        summary.push_str(&format!("Evenings were mostly {}.", evening));
    }

    summary.trim_end().to_string()
}

/// Dominant label among events in one time-of-day period.
fn period_dominant(events: &[EmotionEvent], period: TimeOfDay) -> Option<Emotion> {
    use chrono::Timelike;
    dominant_emotion(
        events
            .iter()
            .filter(|e| TimeOfDay::from_hour(e.timestamp.hour()) == period)
            .map(|e| e.emotion),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn sequence(labels: &[Emotion]) -> Vec<EmotionEvent> {
        let start = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();
        labels
            .iter()
            .enumerate()
            .map(|(i, &emotion)| {
                EmotionEvent::new(emotion, 0.9, start + Duration::minutes(i as i64))
            })
            .collect()
    }

    fn profile(labels: &[Emotion]) -> TwinProfile {
        TwinProfile::from_events(&sequence(labels)).unwrap()
    }

    #[test]
    fn no_profile_gets_the_learning_message() {
        let response = twin_response(None);
        assert!(response.message.contains("still learning"));
        assert_eq!(response.accent_color, "#90A4AE");
        assert!(response.suggestion.is_none());
    }

    #[test]
    fn heavy_sadness_offers_a_mood_boost() {
        let p = profile(&[Emotion::Sad, Emotion::Sad, Emotion::Sad, Emotion::Happy, Emotion::Calm]);
        let response = twin_response(Some(&p));

        assert!(response.message.contains("mood boost"));
        assert!(response.message.contains("60%"));
        assert_eq!(response.suggestion, Some(SuggestedAction::Breathing));
        assert_eq!(response.accent_color, "#4FC3F7");
    }

    #[test]
    fn recent_sadness_with_a_pattern_suggests_a_break() {
        // Sad share 25%: below the boost threshold, above the pattern one.
        let p = profile(&[Emotion::Happy, Emotion::Calm, Emotion::Calm, Emotion::Sad]);
        let response = twin_response(Some(&p));

        assert!(response.message.contains("short walk"));
        assert_eq!(response.suggestion, Some(SuggestedAction::Break));
    }

    #[test]
    fn recent_anger_suggests_breathing() {
        let p = profile(&[Emotion::Calm, Emotion::Calm, Emotion::Calm, Emotion::Angry]);
        let response = twin_response(Some(&p));

        assert!(response.message.contains("tension"));
        assert_eq!(response.suggestion, Some(SuggestedAction::Breathing));
        assert_eq!(response.accent_color, "#EF5350");
    }

    #[test]
    fn recent_happiness_is_celebrated_without_a_suggestion() {
        let p = profile(&[Emotion::Happy, Emotion::Calm, Emotion::Happy]);
        let response = twin_response(Some(&p));

        assert!(response.message.contains("Keep it up"));
        assert!(response.message.contains("67%"));
        assert!(response.suggestion.is_none());
    }

    #[test]
    fn recent_fear_suggests_relaxation() {
        let p = profile(&[Emotion::Calm, Emotion::Calm, Emotion::Fear]);
        let response = twin_response(Some(&p));

        assert_eq!(response.suggestion, Some(SuggestedAction::Relaxation));
        assert_eq!(response.accent_color, "#BA68C8");
    }

    #[test]
    fn fallback_prompts_with_the_dominant_emotion() {
        let p = profile(&[Emotion::Calm, Emotion::Calm, Emotion::Neutral]);
        let response = twin_response(Some(&p));

        assert!(response.message.contains("dominant emotion lately has been calm"));
        assert_eq!(response.suggestion, Some(SuggestedAction::Forecast));
    }

    #[test]
    fn reflection_needs_data() {
        assert!(weekly_reflection(&[]).contains("Not enough data"));
    }

    #[test]
    fn reflection_counts_moments_and_picks_the_brighter_side() {
        let events = sequence(&[Emotion::Happy, Emotion::Happy, Emotion::Sad]);
        let reflection = weekly_reflection(&events);

        assert!(reflection.contains("3 emotional moments"));
        assert!(reflection.contains("happiest 2 times"));
    }

    #[test]
    fn reflection_reports_low_moments_on_ties() {
        // Tie goes to the low-moments sentence.
        let events = sequence(&[Emotion::Happy, Emotion::Sad]);
        let reflection = weekly_reflection(&events);

        assert!(reflection.contains("1 low moments"));
    }

    #[test]
    fn reflection_mentions_morning_and_evening_moods() {
        fn at(hour: u32, emotion: Emotion) -> EmotionEvent {
            let ts: DateTime<Utc> = Utc.with_ymd_and_hms(2026, 6, 1, hour, 0, 0).unwrap();
            EmotionEvent::new(emotion, 0.9, ts)
        }

        let events = vec![
            at(8, Emotion::Calm),
            at(9, Emotion::Calm),
            at(18, Emotion::Sad),
            at(19, Emotion::Sad),
            at(23, Emotion::Happy), // night, in neither sentence
        ];

        let reflection = weekly_reflection(&events);

        assert!(reflection.contains("Mornings were mostly calm"));
        assert!(reflection.contains("Evenings were mostly sad"));
    }

    #[test]
    fn reflection_skips_periods_without_events() {
        let events = sequence(&[Emotion::Happy, Emotion::Happy]); // 09:00, morning only
        let reflection = weekly_reflection(&events);

        assert!(reflection.contains("Mornings were mostly"));
        assert!(!reflection.contains("Evenings"));
    }
}
