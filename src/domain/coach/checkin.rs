//! Productivity coaching check-ins driven by emotion observations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::foundation::Emotion;

use super::CoachSession;

/// Consecutive stress observations before the reset alert fires.
const STRESS_ALERT_COUNT: u32 = 3;
/// Consecutive fatigue observations before the recharge alert fires.
const FATIGUE_ALERT_COUNT: u32 = 4;
/// Minutes without a break after which fatigue alone triggers the alert.
const FATIGUE_BREAK_MINUTES: i64 = 50;
/// Minutes without a break after which a break is suggested regardless.
const LONG_SESSION_MINUTES: i64 = 60;
/// Minutes without a break before periodic tips start.
const TIP_MINUTES: i64 = 30;
/// Fatigue observations below this confidence are ignored.
const FATIGUE_CONFIDENCE: f64 = 0.7;

const STRESS_LABELS: [Emotion; 3] = [Emotion::Angry, Emotion::Anxious, Emotion::Stressed];
const FATIGUE_LABELS: [Emotion; 3] = [Emotion::Tired, Emotion::Sad, Emotion::Neutral];
const UPBEAT_LABELS: [Emotion; 2] = [Emotion::Happy, Emotion::Excited];

const MICRO_BREAKS: [&str; 5] = [
    "Take a 2-minute break: stand up, stretch your arms overhead, and roll your shoulders.",
    "Quick eye break: look at something 20 feet away for 20 seconds (the 20-20-20 rule).",
    "Desk stretch: interlace your fingers, push your palms away from you, and hold for 10 seconds.",
    "Neck relief: gently tilt your head to each side, holding for 5 seconds.",
    "Stand and walk around your desk for 1 minute to boost circulation.",
];

const BREATHING_EXERCISES: [&str; 5] = [
    "Box breathing: inhale 4 counts, hold 4, exhale 4, hold 4. Repeat 4 times.",
    "4-7-8 technique: breathe in for 4, hold for 7, exhale slowly for 8. Do 3 cycles.",
    "Deep belly breathing: place a hand on your belly and breathe so it rises. 5 breaths.",
    "Alternate nostril breathing: close one nostril, inhale, switch, exhale. Repeat 5 times.",
    "Calm breathing: in through the nose for 3, out through the mouth for 6. Repeat 5 times.",
];

const FOCUS_MUSIC: [&str; 5] = [
    "Try lo-fi beats: great for concentration without distraction.",
    "Classical music (Mozart, Bach) is a reliable focus aid.",
    "Nature sounds like rain or ocean waves are calming and focusing.",
    "Binaural beats at 40Hz support deep concentration.",
    "Ambient electronic music: minimal lyrics, maximum focus.",
];

const PRODUCTIVITY_TIPS: [&str; 5] = [
    "Pomodoro technique: work for 25 minutes, break for 5. You're doing great!",
    "Hydration check: have you had water in the last hour? Stay hydrated for better focus.",
    "Posture check: sit up straight, feet flat on the floor, screen at eye level.",
    "Task batching: group similar tasks together to minimize context switching.",
    "Two-minute rule: if a task takes less than 2 minutes, do it now.",
];

const STRESS_RELIEF: [&str; 5] = [
    "Progressive muscle relaxation: tense and release each muscle group for 5 seconds.",
    "Mindful moment: close your eyes and focus on 3 things you can hear right now.",
    "Quick meditation: sit quietly and follow your breath for just 2 minutes.",
    "Gratitude pause: think of 3 things you're grateful for right now.",
    "Visualization: imagine your favorite peaceful place for 30 seconds.",
];

/// How urgently the coach's message should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Outcome of one coaching check-in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachResponse {
    pub alert: bool,
    pub urgency: Urgency,
    pub message: String,
    pub suggestions: Vec<String>,
}

impl CoachResponse {
    fn quiet() -> Self {
        Self {
            alert: false,
            urgency: Urgency::Low,
            message: String::new(),
            suggestions: Vec::new(),
        }
    }
}

/// Processes one emotion observation against the session state.
///
/// Counters accumulate across calls and reset when their alert fires;
/// break-time bookkeeping is updated in place.
pub fn check_in(
    session: &mut CoachSession,
    emotion: Emotion,
    confidence: f64,
    now: DateTime<Utc>,
) -> CoachResponse {
    let since_break = session.minutes_since_break(now);

    if STRESS_LABELS.contains(&emotion) {
        session.stress_count += 1;
        if session.stress_count >= STRESS_ALERT_COUNT {
            session.stress_count = 0;
            return CoachResponse {
                alert: true,
                urgency: Urgency::High,
                message: "Elevated stress levels detected. Let's take a moment to reset."
                    .to_string(),
                suggestions: vec![
                    pick(session, &BREATHING_EXERCISES),
                    pick(session, &STRESS_RELIEF),
                    "Consider a 5-minute walk to clear your mind.".to_string(),
                ],
            };
        }
        return CoachResponse::quiet();
    }

    if FATIGUE_LABELS.contains(&emotion) && confidence > FATIGUE_CONFIDENCE {
        session.fatigue_count += 1;
        if session.fatigue_count >= FATIGUE_ALERT_COUNT || since_break > FATIGUE_BREAK_MINUTES {
            session.fatigue_count = 0;
            session.last_break_at = now;
            return CoachResponse {
                alert: true,
                urgency: Urgency::Medium,
                message: "You seem fatigued. Time for a quick recharge!".to_string(),
                suggestions: vec![
                    pick(session, &MICRO_BREAKS),
                    "Get some fresh air, even 2 minutes helps!".to_string(),
                    pick(session, &FOCUS_MUSIC),
                ],
            };
        }
        return CoachResponse::quiet();
    }

    if since_break > LONG_SESSION_MINUTES {
        session.last_break_at = now;
        return CoachResponse {
            alert: true,
            urgency: Urgency::Medium,
            message: "You've been working for over an hour. Break time!".to_string(),
            suggestions: vec![
                pick(session, &MICRO_BREAKS),
                pick(session, &BREATHING_EXERCISES),
                "Hydrate: drink a glass of water.".to_string(),
            ],
        };
    }

    if UPBEAT_LABELS.contains(&emotion) {
        let worked = session.work_minutes(now);
        if worked > 25 && worked % 25 < 5 {
            return CoachResponse {
                alert: false,
                urgency: Urgency::Low,
                message: "Great focus! Keep up the momentum.".to_string(),
                suggestions: vec![pick(session, &PRODUCTIVITY_TIPS)],
            };
        }
        return CoachResponse::quiet();
    }

    if since_break > TIP_MINUTES {
        return CoachResponse {
            alert: false,
            urgency: Urgency::Low,
            message: "Productivity tip:".to_string(),
            suggestions: vec![pick(session, &PRODUCTIVITY_TIPS)],
        };
    }

    CoachResponse::quiet()
}

fn pick(session: &mut CoachSession, library: &[&str]) -> String {
    library[session.next_pick(library.len())].to_string()
}
