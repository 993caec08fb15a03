//! Coaching command handlers.

mod checkin;

pub use checkin::{CoachCheckinCommand, CoachCheckinHandler, CoachCheckinResult};
