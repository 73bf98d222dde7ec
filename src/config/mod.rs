//! Configuration management for studymate.
//!
//! This module handles loading and saving configuration from `~/.studymate/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    BlockerConfig, ChatConfig, ColorSetting, Config, FocusConfig, GeneralConfig, PlanConfig,
};
