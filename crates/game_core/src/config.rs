use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::roster::{clamp_count, DEFAULT_PARTICIPANTS};

pub const SETTINGS_FILE: &str = "yut.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_participant_count: u32,
    pub handoff_delay_ms: u64,
    pub celebration_ms: u64,
    pub title: String,
    pub subtitle: String,
    pub font_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_participant_count: DEFAULT_PARTICIPANTS,
            handoff_delay_ms: 500,
            celebration_ms: 3000,
            title: "편안한교회".into(),
            subtitle: "2026년 설맞이 사랑의 윷놀이".into(),
            font_path: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        let mut settings: Settings = toml::from_str(raw)?;
        settings.normalize();
        Ok(settings)
    }

    pub fn handoff_delay(&self) -> Duration {
        Duration::from_millis(self.handoff_delay_ms)
    }

    pub fn celebration_duration(&self) -> Duration {
        Duration::from_millis(self.celebration_ms)
    }

    /// Applies `APP__*` overrides. Values that fail to parse are logged and skipped.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("APP__DEFAULT_PARTICIPANT_COUNT") {
            match v.trim().parse::<i64>() {
                Ok(parsed) => self.default_participant_count = clamp_count(parsed),
                Err(_) => warn!(value = %v, "ignoring invalid APP__DEFAULT_PARTICIPANT_COUNT"),
            }
        }
        if let Some(v) = lookup("APP__HANDOFF_DELAY_MS") {
            match v.trim().parse::<u64>() {
                Ok(parsed) => self.handoff_delay_ms = parsed,
                Err(_) => warn!(value = %v, "ignoring invalid APP__HANDOFF_DELAY_MS"),
            }
        }
        if let Some(v) = lookup("APP__CELEBRATION_MS") {
            match v.trim().parse::<u64>() {
                Ok(parsed) => self.celebration_ms = parsed,
                Err(_) => warn!(value = %v, "ignoring invalid APP__CELEBRATION_MS"),
            }
        }
        if let Some(v) = lookup("APP__TITLE") {
            self.title = v;
        }
        if let Some(v) = lookup("APP__SUBTITLE") {
            self.subtitle = v;
        }
        if let Some(v) = lookup("APP__FONT_PATH") {
            if !v.trim().is_empty() {
                self.font_path = Some(PathBuf::from(v.trim()));
            }
        }
    }

    fn normalize(&mut self) {
        self.default_participant_count = clamp_count(i64::from(self.default_participant_count));
    }
}

/// Defaults, then `path` (or `yut.toml` in the working directory when present), then env.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => {
            let default_path = Path::new(SETTINGS_FILE);
            if default_path.exists() {
                Settings::from_file(default_path)?
            } else {
                Settings::default()
            }
        }
    };
    settings.apply_env_overrides(|name| std::env::var(name).ok());
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
