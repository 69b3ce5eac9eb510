use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GameError;

macro_rules! id_newtype {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }
    };
}

id_newtype!(ParticipantId, "player");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub nominated: bool,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            nominated: false,
        }
    }
}

/// Builds the roster handed to the turn engine. Keys follow list order.
pub fn participants_from_names<I, S>(names: I) -> Vec<Participant>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| Participant::new(ParticipantId(index as u32), name))
        .collect()
}

pub fn find_participant(participants: &[Participant], id: ParticipantId) -> Option<&Participant> {
    participants.iter().find(|p| p.id == id)
}

/// Result of a yut stick throw, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "빽도", alias = "back_do")]
    BackDo,
    #[serde(rename = "도", alias = "do")]
    Do,
    #[serde(rename = "개", alias = "gae")]
    Gae,
    #[serde(rename = "걸", alias = "geol")]
    Geol,
    #[serde(rename = "윷", alias = "yut")]
    Yut,
    #[serde(rename = "모", alias = "mo")]
    Mo,
}

impl Outcome {
    pub const ALL: [Outcome; 6] = [
        Outcome::BackDo,
        Outcome::Do,
        Outcome::Gae,
        Outcome::Geol,
        Outcome::Yut,
        Outcome::Mo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Outcome::BackDo => "빽도",
            Outcome::Do => "도",
            Outcome::Gae => "개",
            Outcome::Geol => "걸",
            Outcome::Yut => "윷",
            Outcome::Mo => "모",
        }
    }

    pub fn romanized(self) -> &'static str {
        match self {
            Outcome::BackDo => "back_do",
            Outcome::Do => "do",
            Outcome::Gae => "gae",
            Outcome::Geol => "geol",
            Outcome::Yut => "yut",
            Outcome::Mo => "mo",
        }
    }

    pub fn position(self) -> usize {
        Outcome::ALL
            .iter()
            .position(|outcome| *outcome == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Outcome {
    type Err = GameError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Outcome::ALL
            .into_iter()
            .find(|outcome| {
                outcome.label() == raw
                    || outcome.romanized().eq_ignore_ascii_case(raw)
                    || (*outcome == Outcome::BackDo && raw.eq_ignore_ascii_case("backdo"))
            })
            .ok_or_else(|| GameError::UnknownOutcome(raw.to_string()))
    }
}

/// A recorded nomination: `from` pointed at `to` and threw `outcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingNomination {
    pub from: ParticipantId,
    pub to: ParticipantId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_ids_render_with_player_prefix() {
        assert_eq!(ParticipantId(0).to_string(), "player-0");
        assert_eq!(ParticipantId(12).to_string(), "player-12");
    }

    #[test]
    fn participants_from_names_keys_follow_input_order() {
        let roster = participants_from_names(["A", "B", "C"]);
        let ids: Vec<_> = roster.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ParticipantId(0), ParticipantId(1), ParticipantId(2)]);
        assert!(roster.iter().all(|p| !p.nominated));
    }

    #[test]
    fn outcome_parses_korean_and_romanized_labels() {
        assert_eq!("빽도".parse::<Outcome>().unwrap(), Outcome::BackDo);
        assert_eq!(" 윷 ".parse::<Outcome>().unwrap(), Outcome::Yut);
        assert_eq!("GEOL".parse::<Outcome>().unwrap(), Outcome::Geol);
        assert_eq!("backdo".parse::<Outcome>().unwrap(), Outcome::BackDo);
        assert!(matches!(
            "seven".parse::<Outcome>(),
            Err(GameError::UnknownOutcome(label)) if label == "seven"
        ));
    }

    #[test]
    fn outcome_serializes_as_korean_label() {
        let json = serde_json::to_string(&Outcome::Mo).expect("serialize");
        assert_eq!(json, "\"모\"");
        let parsed: Outcome = serde_json::from_str("\"gae\"").expect("alias");
        assert_eq!(parsed, Outcome::Gae);
    }

    #[test]
    fn outcome_positions_match_display_order() {
        for (index, outcome) in Outcome::ALL.into_iter().enumerate() {
            assert_eq!(outcome.position(), index);
        }
    }
}
