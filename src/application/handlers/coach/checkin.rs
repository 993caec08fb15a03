//! CoachCheckinHandler - Command handler for productivity check-ins.
//!
//! The session state is caller-owned: it arrives with the command and
//! leaves with the result, so the handler itself holds nothing between
//! calls.

use chrono::Utc;

use crate::domain::coach::{check_in, CoachResponse, CoachSession};
use crate::domain::foundation::Emotion;

/// One emotion observation to run through the coach.
#[derive(Debug, Clone)]
pub struct CoachCheckinCommand {
    pub session: CoachSession,
    pub emotion: Emotion,
    pub confidence: f64,
}

/// The coach's response plus the updated session to carry forward.
#[derive(Debug)]
pub struct CoachCheckinResult {
    pub response: CoachResponse,
    pub session: CoachSession,
}

/// Runs coaching check-ins against caller-provided session state.
#[derive(Debug, Default)]
pub struct CoachCheckinHandler;

impl CoachCheckinHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: CoachCheckinCommand) -> CoachCheckinResult {
        let mut session = command.session;
        let response = check_in(&mut session, command.emotion, command.confidence, Utc::now());
        CoachCheckinResult { response, session }
    }
}
