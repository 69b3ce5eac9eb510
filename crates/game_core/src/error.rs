use thiserror::Error;

use crate::domain::ParticipantId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unknown participant {0}")]
    UnknownParticipant(ParticipantId),
    #[error("{operation} is not valid while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: &'static str,
    },
    #[error("{operation} requires the {expected} screen, current screen is {actual}")]
    WrongScreen {
        operation: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("name index {index} is out of range for {len} participants")]
    NameIndexOutOfRange { index: usize, len: usize },
    #[error("participant count {0} is outside 2..=30")]
    CountOutOfRange(i64),
    #[error("unknown outcome label '{0}'")]
    UnknownOutcome(String),
}
