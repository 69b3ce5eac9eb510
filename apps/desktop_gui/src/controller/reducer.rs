//! Applies UI intents to the game flow.

use std::time::Instant;

use game_core::{FlowEvent, GameError, GameFlow};

use crate::controller::events::{UiAction, UiError};

#[derive(Debug, Default)]
pub struct Reduction {
    pub events: Vec<FlowEvent>,
    pub error: Option<UiError>,
    pub dismiss_status: bool,
}

pub fn reduce(flow: &mut GameFlow, action: UiAction, now: Instant) -> Reduction {
    let name = action.name();
    let context = action.context();

    let result: Result<Vec<FlowEvent>, GameError> = match action {
        UiAction::Start => flow.start(),
        UiAction::SetCount(value) => flow.roster_mut().map(|form| {
            form.set_count(value);
            Vec::new()
        }),
        UiAction::SubmitCount => flow.submit_count().map(|_| Vec::new()),
        UiAction::SetName { index, value } => flow
            .roster_mut()
            .and_then(|form| form.set_name(index, value))
            .map(|()| Vec::new()),
        UiAction::SubmitNames => flow.submit_names(),
        UiAction::Select(id) => flow.select(id),
        UiAction::Classify(outcome) => flow.classify(outcome, now),
        UiAction::CancelClassification => flow.cancel_classification(),
        UiAction::Restart => flow.restart(),
        UiAction::DismissStatus => {
            return Reduction {
                dismiss_status: true,
                ..Reduction::default()
            }
        }
    };

    match result {
        Ok(events) => {
            tracing::debug!(action = name, events = events.len(), "ui action applied");
            Reduction {
                events,
                ..Reduction::default()
            }
        }
        Err(err) => {
            let error = UiError::from_game_error(context, &err);
            if error.is_user_visible() {
                tracing::warn!(action = name, error = %err, "ui action rejected");
            } else {
                tracing::debug!(action = name, error = %err, "stale ui action dropped");
            }
            Reduction {
                error: Some(error),
                ..Reduction::default()
            }
        }
    }
}
