//! Configuration settings for studymate.
//!
//! Settings are loaded from `~/.studymate/config.yaml`. Missing sections
//! and fields fall back to their defaults, so a partial file only overrides
//! what it names. Seed data for the blocker roster and the study plan lives
//! here too, so both screens can be re-seeded without recompiling.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::StudymateError;
use crate::features::focus::apps::{default_apps, BlockedApp};
use crate::features::focus::session::{default_plan, StudySession};
use crate::features::focus::timer::DEFAULT_POMODORO_SECONDS;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Assistant chat settings.
    pub chat: ChatConfig,
    /// Study timer settings.
    pub focus: FocusConfig,
    /// Blocker roster seed.
    pub blocker: BlockerConfig,
    /// Study plan seed.
    pub plan: PlanConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Assistant chat settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Latency before the assistant reply appears, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

impl ChatConfig {
    /// The reply latency as a duration.
    #[must_use]
    pub const fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

/// Study timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Default pomodoro duration in minutes.
    #[serde(default = "default_pomodoro_duration")]
    pub pomodoro_duration_minutes: u32,
}

/// Blocker roster seed data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockerConfig {
    /// The blockable apps shown on the distraction screen.
    #[serde(default = "default_apps")]
    pub apps: Vec<BlockedApp>,
}

/// Study plan seed data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// The day's planned study sessions.
    #[serde(default = "default_plan")]
    pub sessions: Vec<StudySession>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_reply_delay_ms() -> u64 {
    1500
}

const fn default_pomodoro_duration() -> u32 {
    DEFAULT_POMODORO_SECONDS / 60
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            pomodoro_duration_minutes: default_pomodoro_duration(),
        }
    }
}

impl Default for BlockerConfig {
    fn default() -> Self {
        Self {
            apps: default_apps(),
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            sessions: default_plan(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, StudymateError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, StudymateError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            StudymateError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            StudymateError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), StudymateError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), StudymateError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| StudymateError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            StudymateError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
