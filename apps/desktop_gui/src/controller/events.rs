//! UI intents and error modeling for the desktop GUI controller.

use game_core::{GameError, Outcome, ParticipantId};

/// Everything a widget can ask the game to do. Produced while drawing a frame,
/// reduced onto the flow once the frame's widgets are done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Start,
    SetCount(i64),
    SubmitCount,
    SetName { index: usize, value: String },
    SubmitNames,
    Select(ParticipantId),
    Classify(Outcome),
    CancelClassification,
    Restart,
    DismissStatus,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::Start => "start",
            UiAction::SetCount(_) => "set_count",
            UiAction::SubmitCount => "submit_count",
            UiAction::SetName { .. } => "set_name",
            UiAction::SubmitNames => "submit_names",
            UiAction::Select(_) => "select",
            UiAction::Classify(_) => "classify",
            UiAction::CancelClassification => "cancel_classification",
            UiAction::Restart => "restart",
            UiAction::DismissStatus => "dismiss_status",
        }
    }

    pub fn context(&self) -> UiErrorContext {
        match self {
            UiAction::Start | UiAction::Restart | UiAction::DismissStatus => UiErrorContext::Navigation,
            UiAction::SetCount(_)
            | UiAction::SubmitCount
            | UiAction::SetName { .. }
            | UiAction::SubmitNames => UiErrorContext::Roster,
            UiAction::Select(_) | UiAction::Classify(_) | UiAction::CancelClassification => {
                UiErrorContext::Board
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transition,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Navigation,
    Roster,
    Board,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_game_error(context: UiErrorContext, err: &GameError) -> Self {
        let category = match err {
            GameError::InvalidPhase { .. } | GameError::WrongScreen { .. } => {
                UiErrorCategory::Transition
            }
            GameError::UnknownParticipant(_)
            | GameError::NameIndexOutOfRange { .. }
            | GameError::CountOutOfRange(_)
            | GameError::UnknownOutcome(_) => UiErrorCategory::Validation,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    /// Transition errors come from stale clicks racing a screen change and are not shown.
    pub fn is_user_visible(&self) -> bool {
        self.category == UiErrorCategory::Validation
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
