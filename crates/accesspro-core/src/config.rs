#![forbid(unsafe_code)]

//! Configuration-as-data for the toolbar.
//!
//! Every field has a default that reproduces the stock toolbar, so
//! `ToolbarConfig::default()` is what a plain `install()` runs with.
//!
//! ```json
//! {
//!   "font": { "step_percent": 10, "min_percent": 80 },
//!   "speech": { "rate": 0.8 },
//!   "panel": { "top_px": 10, "right_px": 10, "z_index": 999999 },
//!   "log_level": "info"
//! }
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;

/// Lowest utterance rate accepted by browser speech engines.
const MIN_SPEECH_RATE: f32 = 0.1;
/// Highest utterance rate accepted by browser speech engines.
const MAX_SPEECH_RATE: f32 = 10.0;

/// Top-level toolbar configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    pub font: FontConfig,
    pub speech: SpeechConfig,
    pub panel: PanelConfig,
    /// `tracing` level filter for the browser console subscriber.
    pub log_level: LogLevel,
}

/// Font scaling parameters. Scale is tracked in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Added or removed per click.
    pub step_percent: u32,
    /// Floor applied on every decrease. There is no ceiling.
    pub min_percent: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            step_percent: 10,
            min_percent: 80,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Utterance rate; 1.0 is the engine's normal speed.
    pub rate: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self { rate: 0.8 }
    }
}

/// Placement of the fixed-position panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub top_px: u32,
    pub right_px: u32,
    pub z_index: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            top_px: 10,
            right_px: 10,
            z_index: 999_999,
        }
    }
}

/// Log level kept as its textual form so configs round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        Self("info".to_owned())
    }
}

impl LogLevel {
    /// Parse into a `tracing` filter, `None` when the name is unknown.
    #[must_use]
    pub fn filter(&self) -> Option<LevelFilter> {
        LevelFilter::from_str(self.0.trim()).ok()
    }
}

impl ToolbarConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(ConfigError::Json)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.font.step_percent == 0 {
            errors.push("font.step_percent must be > 0".into());
        }

        if self.font.min_percent == 0 || self.font.min_percent > 100 {
            errors.push(format!(
                "font.min_percent must be in (0, 100], got {}",
                self.font.min_percent
            ));
        }

        if !(MIN_SPEECH_RATE..=MAX_SPEECH_RATE).contains(&self.speech.rate) {
            errors.push(format!(
                "speech.rate must be in [{MIN_SPEECH_RATE}, {MAX_SPEECH_RATE}], got {}",
                self.speech.rate
            ));
        }

        if self.log_level.filter().is_none() {
            errors.push(format!("log_level {:?} is not a level name", self.log_level.0));
        }

        errors
    }
}
