//! Screen flow: Entry → Roster → Game → Summary, with restart back to Entry.
//!
//! `GameFlow` is the single state container a front end owns. Every user
//! intent is a method call that returns the events the front end should react
//! to (sound cues, screen changes). Timers are deadlines checked by
//! [`GameFlow::poll`] with a caller-supplied `Instant`.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::{
    config::Settings,
    domain::{participants_from_names, Edge, Outcome, Participant, ParticipantId},
    engine::{ClassifyOutcome, IgnoreReason, SelectOutcome, TurnEngine},
    error::GameError,
    roster::RosterForm,
    summary::Summary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Entry,
    Roster,
    Game,
    Summary,
}

impl ScreenKind {
    pub fn name(self) -> &'static str {
        match self {
            ScreenKind::Entry => "entry",
            ScreenKind::Roster => "roster",
            ScreenKind::Game => "game",
            ScreenKind::Summary => "summary",
        }
    }
}

/// Sound cues. Front ends decide how (or whether) to play them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Select,
    Connect,
    Celebrate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    ScreenChanged(ScreenKind),
    Cue(Cue),
    Ignored(IgnoreReason),
    GameFinished { edges: usize },
    CelebrationEnded,
}

#[derive(Debug, Clone)]
pub struct GameStage {
    pub engine: TurnEngine,
    pub handoff_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct SummaryStage {
    pub participants: Vec<Participant>,
    pub edges: Vec<Edge>,
    pub summary: Summary,
    pub celebration_until: Option<Instant>,
}

#[derive(Debug, Clone)]
pub enum Screen {
    Entry,
    Roster(RosterForm),
    Game(GameStage),
    Summary(SummaryStage),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Entry => ScreenKind::Entry,
            Screen::Roster(_) => ScreenKind::Roster,
            Screen::Game(_) => ScreenKind::Game,
            Screen::Summary(_) => ScreenKind::Summary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSettings {
    pub default_participant_count: u32,
    pub handoff_delay: Duration,
    pub celebration: Duration,
}

impl From<&Settings> for FlowSettings {
    fn from(settings: &Settings) -> Self {
        Self {
            default_participant_count: settings.default_participant_count,
            handoff_delay: settings.handoff_delay(),
            celebration: settings.celebration_duration(),
        }
    }
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

#[derive(Debug, Clone)]
pub struct GameFlow {
    settings: FlowSettings,
    screen: Screen,
}

impl Default for GameFlow {
    fn default() -> Self {
        Self::new(FlowSettings::default())
    }
}

impl GameFlow {
    pub fn new(settings: FlowSettings) -> Self {
        Self {
            settings,
            screen: Screen::Entry,
        }
    }

    pub fn settings(&self) -> FlowSettings {
        self.settings
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn start(&mut self) -> Result<Vec<FlowEvent>, GameError> {
        self.expect_screen("start", ScreenKind::Entry)?;
        self.screen = Screen::Roster(RosterForm::new(self.settings.default_participant_count));
        Ok(self.changed())
    }

    pub fn roster_mut(&mut self) -> Result<&mut RosterForm, GameError> {
        match &mut self.screen {
            Screen::Roster(form) => Ok(form),
            other => Err(wrong_screen("edit roster", ScreenKind::Roster, other.kind())),
        }
    }

    pub fn submit_count(&mut self) -> Result<u32, GameError> {
        self.roster_mut()?.submit_count()
    }

    pub fn submit_names(&mut self) -> Result<Vec<FlowEvent>, GameError> {
        let names = self.roster_mut()?.submit_names()?;
        info!(participants = names.len(), "roster complete");
        self.screen = Screen::Game(GameStage {
            engine: TurnEngine::new(participants_from_names(names)),
            handoff_at: None,
        });
        Ok(self.changed())
    }

    pub fn engine(&self) -> Option<&TurnEngine> {
        match &self.screen {
            Screen::Game(stage) => Some(&stage.engine),
            _ => None,
        }
    }

    pub fn select(&mut self, id: ParticipantId) -> Result<Vec<FlowEvent>, GameError> {
        let stage = self.game_mut("select")?;
        let event = match stage.engine.select(id)? {
            SelectOutcome::Started(_) | SelectOutcome::Pending(_) => FlowEvent::Cue(Cue::Select),
            SelectOutcome::Ignored(reason) => FlowEvent::Ignored(reason),
        };
        Ok(vec![event])
    }

    pub fn classify(&mut self, outcome: Outcome, now: Instant) -> Result<Vec<FlowEvent>, GameError> {
        let delay = self.settings.handoff_delay;
        let stage = self.game_mut("classify")?;
        let mut events = vec![FlowEvent::Cue(Cue::Connect)];
        if let ClassifyOutcome::Complete { edges } = stage.engine.classify(outcome)? {
            stage.handoff_at = Some(now + delay);
            debug!(delay_ms = delay.as_millis() as u64, "summary handoff scheduled");
            events.push(FlowEvent::GameFinished { edges: edges.len() });
        }
        Ok(events)
    }

    pub fn cancel_classification(&mut self) -> Result<Vec<FlowEvent>, GameError> {
        self.game_mut("cancel_classification")?
            .engine
            .cancel_classification()?;
        Ok(Vec::new())
    }

    /// Fires any timer whose deadline is at or before `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<FlowEvent> {
        match &mut self.screen {
            Screen::Game(stage) if stage.handoff_at.is_some_and(|at| at <= now) => {
                let (participants, edges) = stage.engine.clone().into_parts();
                let summary = Summary::build(&participants, &edges);
                self.screen = Screen::Summary(SummaryStage {
                    participants,
                    edges,
                    summary,
                    celebration_until: Some(now + self.settings.celebration),
                });
                let mut events = self.changed();
                events.push(FlowEvent::Cue(Cue::Celebrate));
                events
            }
            Screen::Summary(stage) if stage.celebration_until.is_some_and(|at| at <= now) => {
                stage.celebration_until = None;
                vec![FlowEvent::CelebrationEnded]
            }
            _ => Vec::new(),
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.screen {
            Screen::Game(stage) => stage.handoff_at,
            Screen::Summary(stage) => stage.celebration_until,
            _ => None,
        }
    }

    pub fn is_celebrating(&self) -> bool {
        matches!(&self.screen, Screen::Summary(stage) if stage.celebration_until.is_some())
    }

    pub fn restart(&mut self) -> Result<Vec<FlowEvent>, GameError> {
        self.expect_screen("restart", ScreenKind::Summary)?;
        self.screen = Screen::Entry;
        info!("game restarted");
        Ok(self.changed())
    }

    fn game_mut(&mut self, operation: &'static str) -> Result<&mut GameStage, GameError> {
        match &mut self.screen {
            Screen::Game(stage) => Ok(stage),
            other => Err(wrong_screen(operation, ScreenKind::Game, other.kind())),
        }
    }

    fn expect_screen(&self, operation: &'static str, expected: ScreenKind) -> Result<(), GameError> {
        let actual = self.kind();
        if actual == expected {
            Ok(())
        } else {
            Err(wrong_screen(operation, expected, actual))
        }
    }

    fn changed(&self) -> Vec<FlowEvent> {
        let kind = self.kind();
        debug!(screen = kind.name(), "screen changed");
        vec![FlowEvent::ScreenChanged(kind)]
    }
}

fn wrong_screen(operation: &'static str, expected: ScreenKind, actual: ScreenKind) -> GameError {
    GameError::WrongScreen {
        operation,
        expected: expected.name(),
        actual: actual.name(),
    }
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod tests;
