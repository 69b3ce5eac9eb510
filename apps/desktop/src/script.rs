//! Scripted replays: a roster plus a list of board actions, applied headlessly.

use std::{fs, path::Path, time::Instant};

use anyhow::{bail, Context, Result};
use game_core::{
    Edge, FlowEvent, FlowSettings, GameFlow, Outcome, Participant, ParticipantId, Screen, Summary,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub names: Vec<String>,
    #[serde(default)]
    pub actions: Vec<ScriptAction>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptAction {
    Select { participant: u32 },
    Classify { outcome: Outcome },
    Cancel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub complete: bool,
    pub participants: Vec<Participant>,
    pub edges: Vec<Edge>,
    #[serde(skip)]
    pub cursor: Option<ParticipantId>,
    pub summary: Summary,
}

pub fn load_script(path: &Path) -> Result<Script> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read script '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse script '{}'", path.display()))
}

pub fn replay(script: &Script, settings: FlowSettings) -> Result<ReplayReport> {
    let mut flow = GameFlow::new(settings);
    flow.start()?;

    let form = flow.roster_mut()?;
    form.set_count(script.names.len() as i64);
    if form.count() as usize != script.names.len() {
        bail!(
            "script lists {} names; a game needs between 2 and 30",
            script.names.len()
        );
    }
    form.submit_count()?;
    for (index, name) in script.names.iter().enumerate() {
        form.set_name(index, name.as_str())?;
    }
    flow.submit_names()?;

    let now = Instant::now();
    for (index, action) in script.actions.iter().enumerate() {
        let events = match action {
            ScriptAction::Select { participant } => flow.select(ParticipantId(*participant)),
            ScriptAction::Classify { outcome } => flow.classify(*outcome, now),
            ScriptAction::Cancel => flow.cancel_classification(),
        }
        .with_context(|| format!("action #{} ({action:?}) failed", index + 1))?;

        for event in events {
            if let FlowEvent::Ignored(reason) = event {
                tracing::warn!(action = index + 1, ?reason, "scripted click ignored");
            }
        }
    }

    if let Some(deadline) = flow.next_deadline() {
        flow.poll(deadline);
    }

    let report = match flow.screen() {
        Screen::Summary(stage) => ReplayReport {
            complete: true,
            participants: stage.participants.clone(),
            edges: stage.edges.clone(),
            cursor: stage.edges.last().map(|edge| edge.to),
            summary: stage.summary.clone(),
        },
        Screen::Game(stage) => {
            let participants = stage.engine.participants().to_vec();
            let edges = stage.engine.edges().to_vec();
            let summary = Summary::build(&participants, &edges);
            ReplayReport {
                complete: false,
                participants,
                edges,
                cursor: stage.engine.cursor(),
                summary,
            }
        }
        other => bail!("replay ended on unexpected screen {}", other.kind().name()),
    };
    Ok(report)
}
