//! Turn engine: the nominate-then-classify state machine.
//!
//! The engine owns the roster while a game is in progress. Each turn the
//! current participant nominates someone who has not been nominated yet,
//! the throw outcome is recorded as an [`Edge`], and the nominee takes the
//! next turn. The participant picked by the very first selection starts the
//! chain and is never a valid nominee, so a finished game has exactly
//! `N - 1` edges.

use tracing::{debug, info};

use crate::{
    domain::{find_participant, Edge, Outcome, Participant, ParticipantId, PendingNomination},
    error::GameError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingFirstSelection,
    AwaitingNomination { current: ParticipantId },
    AwaitingClassification { pending: PendingNomination },
    Complete { last: ParticipantId },
}

impl TurnState {
    pub fn name(&self) -> &'static str {
        match self {
            TurnState::AwaitingFirstSelection => "awaiting the first selection",
            TurnState::AwaitingNomination { .. } => "awaiting a nomination",
            TurnState::AwaitingClassification { .. } => "awaiting a classification",
            TurnState::Complete { .. } => "complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    SelfNomination,
    AlreadyNominated,
    FirstSelector,
}

impl IgnoreReason {
    pub fn message(self) -> &'static str {
        match self {
            IgnoreReason::SelfNomination => "자기 자신은 지목할 수 없습니다.",
            IgnoreReason::AlreadyNominated => "이미 지목된 플레이어입니다.",
            IgnoreReason::FirstSelector => "처음 시작한 플레이어는 지목할 수 없습니다.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The first selection placed the turn cursor; no edge yet.
    Started(ParticipantId),
    /// A nomination is waiting for its outcome.
    Pending(PendingNomination),
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyOutcome {
    Continue { edge: Edge, next: ParticipantId },
    Complete { edges: Vec<Edge> },
}

/// True once every participant is either nominated or the first selector.
pub fn all_accounted_for(participants: &[Participant], first_selector: ParticipantId) -> bool {
    participants
        .iter()
        .all(|p| p.nominated || p.id == first_selector)
}

#[derive(Debug, Clone)]
pub struct TurnEngine {
    participants: Vec<Participant>,
    edges: Vec<Edge>,
    state: TurnState,
    first_selector: Option<ParticipantId>,
}

impl TurnEngine {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self {
            participants,
            edges: Vec::new(),
            state: TurnState::AwaitingFirstSelection,
            first_selector: None,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn first_selector(&self) -> Option<ParticipantId> {
        self.first_selector
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, TurnState::Complete { .. })
    }

    /// The participant whose turn it is (the nominator while a classification is pending).
    pub fn cursor(&self) -> Option<ParticipantId> {
        match self.state {
            TurnState::AwaitingFirstSelection => None,
            TurnState::AwaitingNomination { current } => Some(current),
            TurnState::AwaitingClassification { pending } => Some(pending.from),
            TurnState::Complete { last } => Some(last),
        }
    }

    pub fn pending(&self) -> Option<PendingNomination> {
        match self.state {
            TurnState::AwaitingClassification { pending } => Some(pending),
            _ => None,
        }
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        find_participant(&self.participants, id)
    }

    /// Whether `id` would be accepted as a nominee right now.
    pub fn is_selectable(&self, id: ParticipantId) -> bool {
        let TurnState::AwaitingNomination { current } = self.state else {
            return false;
        };
        self.nominee_check(current, id).is_ok()
    }

    pub fn instruction(&self) -> String {
        match self.state {
            TurnState::AwaitingFirstSelection => "시작할 플레이어를 선택하세요".to_string(),
            TurnState::AwaitingNomination { current } => format!(
                "{}님, 다음 플레이어를 지목하세요",
                self.display_name(current)
            ),
            TurnState::AwaitingClassification { .. } => "결과를 선택하세요".to_string(),
            TurnState::Complete { .. } => "모든 플레이어가 지목되었습니다".to_string(),
        }
    }

    pub fn select(&mut self, id: ParticipantId) -> Result<SelectOutcome, GameError> {
        if self.participant(id).is_none() {
            return Err(GameError::UnknownParticipant(id));
        }

        match self.state {
            TurnState::AwaitingFirstSelection => {
                self.first_selector = Some(id);
                self.state = TurnState::AwaitingNomination { current: id };
                debug!(participant = %id, "first selector chosen");
                if all_accounted_for(&self.participants, id) {
                    self.state = TurnState::Complete { last: id };
                    info!(edges = 0, "game complete without nominations");
                }
                Ok(SelectOutcome::Started(id))
            }
            TurnState::AwaitingNomination { current } => {
                if let Err(reason) = self.nominee_check(current, id) {
                    debug!(participant = %id, ?reason, "ignored nomination click");
                    return Ok(SelectOutcome::Ignored(reason));
                }
                let pending = PendingNomination {
                    from: current,
                    to: id,
                };
                self.state = TurnState::AwaitingClassification { pending };
                debug!(from = %pending.from, to = %pending.to, "nomination pending");
                Ok(SelectOutcome::Pending(pending))
            }
            state => Err(GameError::InvalidPhase {
                operation: "select",
                phase: state.name(),
            }),
        }
    }

    pub fn classify(&mut self, outcome: Outcome) -> Result<ClassifyOutcome, GameError> {
        let TurnState::AwaitingClassification { pending } = self.state else {
            return Err(GameError::InvalidPhase {
                operation: "classify",
                phase: self.state.name(),
            });
        };

        let edge = Edge {
            from: pending.from,
            to: pending.to,
            outcome,
        };
        self.edges.push(edge);
        if let Some(nominee) = self.participants.iter_mut().find(|p| p.id == pending.to) {
            nominee.nominated = true;
        }
        debug!(from = %edge.from, to = %edge.to, %outcome, "edge recorded");

        let first_selector = self.first_selector.unwrap_or(pending.from);
        if all_accounted_for(&self.participants, first_selector) {
            self.state = TurnState::Complete { last: pending.to };
            info!(edges = self.edges.len(), "game complete");
            return Ok(ClassifyOutcome::Complete {
                edges: self.edges.clone(),
            });
        }

        self.state = TurnState::AwaitingNomination {
            current: pending.to,
        };
        Ok(ClassifyOutcome::Continue {
            edge,
            next: pending.to,
        })
    }

    pub fn cancel_classification(&mut self) -> Result<ParticipantId, GameError> {
        let TurnState::AwaitingClassification { pending } = self.state else {
            return Err(GameError::InvalidPhase {
                operation: "cancel_classification",
                phase: self.state.name(),
            });
        };
        self.state = TurnState::AwaitingNomination {
            current: pending.from,
        };
        debug!(from = %pending.from, to = %pending.to, "nomination cancelled");
        Ok(pending.from)
    }

    pub fn into_parts(self) -> (Vec<Participant>, Vec<Edge>) {
        (self.participants, self.edges)
    }

    fn nominee_check(&self, current: ParticipantId, id: ParticipantId) -> Result<(), IgnoreReason> {
        if id == current {
            return Err(IgnoreReason::SelfNomination);
        }
        if self.first_selector == Some(id) {
            return Err(IgnoreReason::FirstSelector);
        }
        match self.participant(id) {
            Some(p) if p.nominated => Err(IgnoreReason::AlreadyNominated),
            _ => Ok(()),
        }
    }

    fn display_name(&self, id: ParticipantId) -> String {
        self.participant(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
