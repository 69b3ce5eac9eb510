//! Two-step roster form: participant count first, then one name per seat.

use std::num::IntErrorKind;

use tracing::debug;

use crate::error::GameError;

pub const MIN_PARTICIPANTS: u32 = 2;
pub const MAX_PARTICIPANTS: u32 = 30;
pub const DEFAULT_PARTICIPANTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterStep {
    Count,
    Names,
}

#[derive(Debug, Clone)]
pub struct RosterForm {
    step: RosterStep,
    count: u32,
    names: Vec<String>,
}

impl Default for RosterForm {
    fn default() -> Self {
        Self::new(DEFAULT_PARTICIPANTS)
    }
}

impl RosterForm {
    pub fn new(default_count: u32) -> Self {
        Self {
            step: RosterStep::Count,
            count: clamp_count(i64::from(default_count)),
            names: Vec::new(),
        }
    }

    pub fn step(&self) -> RosterStep {
        self.step
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn set_count(&mut self, value: i64) {
        self.count = clamp_count(value);
    }

    /// Applies raw text from the count field. Unparsable input falls back to the minimum.
    pub fn set_count_input(&mut self, raw: &str) {
        self.count = parse_count_input(raw);
    }

    pub fn submit_count(&mut self) -> Result<u32, GameError> {
        if self.step != RosterStep::Count {
            return Err(GameError::InvalidPhase {
                operation: "submit_count",
                phase: "collecting names",
            });
        }
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&self.count) {
            return Err(GameError::CountOutOfRange(i64::from(self.count)));
        }

        self.names = vec![String::new(); self.count as usize];
        self.step = RosterStep::Names;
        debug!(count = self.count, "roster count accepted");
        Ok(self.count)
    }

    pub fn set_name(&mut self, index: usize, value: impl Into<String>) -> Result<(), GameError> {
        let len = self.names.len();
        let slot = self
            .names
            .get_mut(index)
            .ok_or(GameError::NameIndexOutOfRange { index, len })?;
        *slot = value.into();
        Ok(())
    }

    pub fn name_mut(&mut self, index: usize) -> Option<&mut String> {
        self.names.get_mut(index)
    }

    pub fn submit_names(&self) -> Result<Vec<String>, GameError> {
        if self.step != RosterStep::Names {
            return Err(GameError::InvalidPhase {
                operation: "submit_names",
                phase: "collecting the participant count",
            });
        }
        Ok(finalize_names(&self.names))
    }
}

pub fn clamp_count(value: i64) -> u32 {
    value.clamp(i64::from(MIN_PARTICIPANTS), i64::from(MAX_PARTICIPANTS)) as u32
}

/// Reads the leading integer of `raw` (`"12 people"` is 12) and clamps it.
pub fn parse_count_input(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1_i64, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(0) => MIN_PARTICIPANTS,
        Ok(value) => clamp_count(sign * value),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
            if sign < 0 {
                MIN_PARTICIPANTS
            } else {
                MAX_PARTICIPANTS
            }
        }
        Err(_) => MIN_PARTICIPANTS,
    }
}

pub fn placeholder_name(index: usize) -> String {
    format!("Participant {}", index + 1)
}

pub fn finalize_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let name = name.trim();
            if name.is_empty() {
                placeholder_name(index)
            } else {
                name.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/roster_tests.rs"]
mod tests;
