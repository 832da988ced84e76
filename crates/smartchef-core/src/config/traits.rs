//! Settings store trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::{ApiConfig, Language, UserProfile};

/// Everything the UI persists between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiConfig,
    pub profile: UserProfile,
    pub language: Language,
}

impl Settings {
    pub fn with_api(mut self, api: ApiConfig) -> Self {
        self.api = api;
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Settings persistence abstraction
///
/// Implementations:
/// - `MemorySettingsStore`: In-memory for testing
/// - `FileSettingsStore`: YAML file (~/.config/smartchef/config.yaml)
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load settings, falling back to defaults when nothing is stored
    async fn load(&self) -> ConfigResult<Settings>;

    /// Replace the stored settings
    async fn save(&self, settings: &Settings) -> ConfigResult<()>;
}

/// Errors that can occur during settings operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
