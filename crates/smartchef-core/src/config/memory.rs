//! In-memory settings store

use async_trait::async_trait;
use parking_lot::RwLock;

use super::traits::{ConfigResult, Settings, SettingsStore};

/// In-memory settings store for testing
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: RwLock<Option<Settings>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(Some(settings)),
        }
    }

    /// Whether anything has been saved
    pub fn is_saved(&self) -> bool {
        self.settings.read().is_some()
    }

    pub fn clear(&self) {
        *self.settings.write() = None;
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load(&self) -> ConfigResult<Settings> {
        Ok(self.settings.read().clone().unwrap_or_default())
    }

    async fn save(&self, settings: &Settings) -> ConfigResult<()> {
        *self.settings.write() = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiConfig, Language};

    #[tokio::test]
    async fn test_defaults_until_saved() {
        let store = MemorySettingsStore::new();
        assert!(!store.is_saved());
        assert_eq!(store.load().await.unwrap(), Settings::default());

        let settings = Settings::default()
            .with_api(ApiConfig::openrouter())
            .with_language(Language::En);
        store.save(&settings).await.unwrap();
        assert!(store.is_saved());
        assert_eq!(store.load().await.unwrap(), settings);

        store.clear();
        assert_eq!(store.load().await.unwrap().language, Language::Zh);
    }
}
