//! Environment variable secret store

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// Provider name to environment variables, checked in order
static ENV_VAR_MAP: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("google", vec!["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"]);
    m.insert("gemini", vec!["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"]);
    m.insert("openrouter", vec!["OPENROUTER_API_KEY"]);
    m.insert("openai", vec!["OPENAI_API_KEY"]);
    m
});

/// Read-only secret store backed by the process environment
///
/// - `google` / `gemini` → `GEMINI_API_KEY`, `GOOGLE_API_KEY`, `API_KEY`
/// - `openrouter` → `OPENROUTER_API_KEY`
/// - anything else → the key itself, then `<KEY>_API_KEY`
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSecretStore;

impl EnvSecretStore {
    pub fn new() -> Self {
        Self
    }

    /// Environment variables consulted for a provider name
    pub fn env_vars_for_provider(provider: &str) -> Option<&'static [&'static str]> {
        ENV_VAR_MAP
            .get(provider.trim().to_lowercase().as_str())
            .map(|v| v.as_slice())
    }

    fn read(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = Self::read(key) {
            return Some(value);
        }

        if let Some(vars) = Self::env_vars_for_provider(key) {
            if let Some(value) = vars.iter().find_map(|name| Self::read(name)) {
                return Some(value);
            }
        }

        Self::read(&format!("{}_API_KEY", key.trim().to_uppercase()))
    }

    fn store(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }

    fn delete(&self, _key: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }
}
