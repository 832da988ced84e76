//! Backend configuration and output language

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default model for the native Gemini backend
pub const DEFAULT_NATIVE_MODEL: &str = "gemini-2.5-flash";

/// Default root of the generic chat-completions gateway
pub const DEFAULT_GATEWAY_URL: &str = "https://openrouter.ai/api/v1";

/// Default model offered with the gateway preset
pub const DEFAULT_GATEWAY_MODEL: &str = "openai/gpt-oss-20b:free";

/// Backend configuration passed by value into every call
///
/// Field names serialize in camelCase so a UI settings object can be
/// handed over unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// Free-text provider label. Empty or "google" selects the native backend.
    #[serde(default)]
    pub provider: String,
    /// Root (or full endpoint) of a generic chat-completions backend
    #[serde(default)]
    pub base_url: String,
    /// Secret credential
    #[serde(default)]
    pub api_key: String,
    /// Backend-specific model identifier
    #[serde(default)]
    pub model: String,
    /// Optional text appended to the default system prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl ApiConfig {
    /// Create a configuration for the given provider and model
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            base_url: String::new(),
            api_key: String::new(),
            model: model.into(),
            system_prompt: None,
        }
    }

    /// Native Gemini preset
    pub fn google() -> Self {
        Self::new("google", DEFAULT_NATIVE_MODEL)
    }

    /// OpenRouter gateway preset
    pub fn openrouter() -> Self {
        Self::new("OpenRouter", DEFAULT_GATEWAY_MODEL).with_base_url(DEFAULT_GATEWAY_URL)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the system prompt override
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// The explicit credential, if one was supplied
    pub fn explicit_api_key(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty()).then_some(key)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::google()
    }
}

/// Output language for prompts and generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Zh,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a language code is not supported
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: {0}")]
pub struct LanguageParseError(pub String);

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            _ => Err(LanguageParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let google = ApiConfig::google();
        assert_eq!(google.provider, "google");
        assert!(google.base_url.is_empty());
        assert_eq!(google.model, "gemini-2.5-flash");
        assert_eq!(ApiConfig::default(), google);

        let gateway = ApiConfig::openrouter();
        assert_eq!(gateway.provider, "OpenRouter");
        assert_eq!(gateway.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(gateway.model, "openai/gpt-oss-20b:free");
    }

    #[test]
    fn test_camel_case_round_trip() {
        let json = r#"{"provider":"OpenRouter","baseUrl":"https://x/v1","apiKey":"sk","model":"m","systemPrompt":"be brief"}"#;
        let config: ApiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "https://x/v1");
        assert_eq!(config.system_prompt.as_deref(), Some("be brief"));

        let out = serde_json::to_string(&config).unwrap();
        assert!(out.contains("\"baseUrl\""));
        assert!(out.contains("\"apiKey\""));
    }

    #[test]
    fn test_missing_fields_default() {
        let config: ApiConfig = serde_json::from_str(r#"{"model":"gemini-2.5-flash"}"#).unwrap();
        assert!(config.provider.is_empty());
        assert!(config.system_prompt.is_none());
    }

    #[test]
    fn test_explicit_api_key() {
        assert_eq!(ApiConfig::google().explicit_api_key(), None);
        assert_eq!(ApiConfig::google().with_api_key("  ").explicit_api_key(), None);
        assert_eq!(
            ApiConfig::google().with_api_key("key").explicit_api_key(),
            Some("key")
        );
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" ZH ".parse::<Language>().unwrap(), Language::Zh);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::Zh);
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
    }
}
