//! Core rules for the yut nomination game: roster form, turn engine, summary,
//! board geometry, and the screen flow that ties them together. No UI
//! framework dependencies.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod flow;
pub mod geometry;
pub mod roster;
pub mod summary;
pub mod svg;

pub use config::{load_settings, ConfigError, Settings};
pub use domain::{Edge, Outcome, Participant, ParticipantId, PendingNomination};
pub use engine::{all_accounted_for, ClassifyOutcome, IgnoreReason, SelectOutcome, TurnEngine, TurnState};
pub use error::GameError;
pub use flow::{Cue, FlowEvent, FlowSettings, GameFlow, Screen, ScreenKind};
pub use summary::Summary;
