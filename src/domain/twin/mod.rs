//! The emotional twin: 7-day profile, contextual responses, and the
//! weekly reflection.

mod narrator;
mod profile;

pub use narrator::{
    accent_color, twin_response, weekly_reflection, SuggestedAction, TwinResponse,
};
pub use profile::{dominant_emotion, TwinProfile};
