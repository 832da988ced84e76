//! File-based settings store (YAML)
//!
//! User-level settings live at ~/.config/smartchef/config.yaml.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::fs;

use super::traits::{ConfigResult, Settings, SettingsStore};

/// File-based settings store
///
/// # Example
///
/// ```no_run
/// use smartchef_core::config::{FileSettingsStore, SettingsStore};
///
/// # async fn run() -> smartchef_core::config::ConfigResult<()> {
/// let store = FileSettingsStore::user();
/// let settings = store.load().await?;
/// # Ok(())
/// # }
/// ```
pub struct FileSettingsStore {
    path: PathBuf,
    cache: RwLock<Option<Settings>>,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// User-level store (~/.config/smartchef/config.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        Self::new(config_dir.join("smartchef").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn read_file(&self) -> ConfigResult<Settings> {
        if !self.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Reload settings from disk (invalidate cache)
    pub async fn reload(&self) -> ConfigResult<Settings> {
        let settings = self.read_file().await?;
        *self.cache.write() = Some(settings.clone());
        Ok(settings)
    }

    /// Copy the current file next to itself, `None` when there is no file
    pub async fn backup(&self) -> ConfigResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }
        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path).await?;
        Ok(Some(backup_path))
    }
}

impl std::fmt::Debug for FileSettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSettingsStore")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load(&self) -> ConfigResult<Settings> {
        let cached = self.cache.read().clone();
        match cached {
            Some(settings) => Ok(settings),
            None => self.reload().await,
        }
    }

    async fn save(&self, settings: &Settings) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_yaml::to_string(settings)?;
        fs::write(&self.path, content).await?;
        *self.cache.write() = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::types::{ApiConfig, Language, UserProfile};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("config.yaml"));
        assert!(!store.exists());
        assert_eq!(store.load().await.unwrap(), Settings::default());
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let store = FileSettingsStore::new(&path);

        let settings = Settings::default()
            .with_api(ApiConfig::openrouter().with_api_key("sk-or-1"))
            .with_profile(UserProfile::new().with_equipment(["oven"]))
            .with_language(Language::En);
        store.save(&settings).await.unwrap();
        assert!(store.exists());

        let fresh = FileSettingsStore::new(&path);
        assert_eq!(fresh.load().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn test_yaml_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let store = FileSettingsStore::new(&path);
        store
            .save(&Settings::default().with_api(ApiConfig::openrouter()))
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("baseUrl: https://openrouter.ai/api/v1"));
        assert!(content.contains("language: zh"));
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "language: en\n").unwrap();

        let settings = FileSettingsStore::new(&path).load().await.unwrap();
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.api, ApiConfig::google());
    }

    #[tokio::test]
    async fn test_cache_until_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let store = FileSettingsStore::new(&path);
        assert_eq!(store.load().await.unwrap().language, Language::Zh);

        std::fs::write(&path, "language: en\n").unwrap();
        assert_eq!(store.load().await.unwrap().language, Language::Zh);
        assert_eq!(store.reload().await.unwrap().language, Language::En);
    }

    #[tokio::test]
    async fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "language: [unclosed\n").unwrap();

        let err = FileSettingsStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[tokio::test]
    async fn test_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let store = FileSettingsStore::new(&path);
        assert!(store.backup().await.unwrap().is_none());

        std::fs::write(&path, "language: en\n").unwrap();
        let backup_path = store.backup().await.unwrap().unwrap();
        assert!(backup_path.exists());
        assert!(backup_path.to_string_lossy().ends_with("config.yaml.backup"));
    }
}
