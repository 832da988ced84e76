//! Orchestration - the three operations the UI calls
//!
//! Each call selects a provider from its configuration snapshot, builds
//! the provider-specific request, sends it exactly once and normalizes the
//! result. Failures propagate unchanged; there is no retry and no partial
//! result.
//!
//! ```rust,ignore
//! use smartchef_core::{ApiConfig, Language, SmartChef, UserProfile};
//!
//! let chef = SmartChef::from_env(logger);
//! let config = ApiConfig::google().with_api_key(key);
//! let recipe = chef
//!     .generate_recipe(&["egg".into(), "rice".into()], &config, Language::En, &UserProfile::default())
//!     .await?;
//! ```

mod ingredients;
pub mod prompts;

pub use ingredients::{merge_ingredients, split_ingredient_list};

use crate::logging::{Logger, SharedLogger};
use crate::normalize::{classify_error, parse_recipe};
use crate::providers::{
    create_provider, recipe_schema, ProviderError, ProviderRequest, ProviderResult, RecipeProvider,
};
use crate::secrets::{AmbientCredentials, EnvSecretStore};
use crate::types::{ApiConfig, Language, Recipe, UserProfile};
use crate::{log_error, log_info};

/// Send the connectivity probe; the reply content is not inspected
pub async fn probe(provider: &dyn RecipeProvider) -> ProviderResult<()> {
    provider.send(ProviderRequest::Probe).await.map(|_| ())
}

/// Ask the backend which ingredients are in a base64 JPEG
///
/// An empty reply yields an empty list.
pub async fn identify_ingredients(
    provider: &dyn RecipeProvider,
    image_base64: &str,
    language: Language,
) -> ProviderResult<Vec<String>> {
    let request = ProviderRequest::Vision {
        image_base64: image_base64.to_string(),
        prompt: prompts::vision_prompt(language),
    };
    let text = provider.send(request).await?;
    Ok(split_ingredient_list(&text))
}

/// Generate and parse a recipe
pub async fn request_recipe(
    provider: &dyn RecipeProvider,
    ingredients: &[String],
    system_prompt_override: Option<&str>,
    language: Language,
    profile: &UserProfile,
) -> ProviderResult<Recipe> {
    let request = ProviderRequest::Generate {
        prompt: prompts::recipe_prompt(ingredients, language, profile),
        system_prompt: prompts::effective_system_prompt(system_prompt_override),
        schema: recipe_schema(),
    };
    let text = provider.send(request).await?;
    if text.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    parse_recipe(&text)
}

/// Entry point for the UI layer
///
/// Holds only read-only state: the logger and the ambient credential
/// captured at startup. Calls may run concurrently.
#[derive(Clone)]
pub struct SmartChef {
    ambient: AmbientCredentials,
    referer: Option<String>,
    logger: SharedLogger,
}

impl SmartChef {
    pub fn new(ambient: AmbientCredentials, logger: SharedLogger) -> Self {
        Self {
            ambient,
            referer: None,
            logger,
        }
    }

    /// Referer announced to the default gateway
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Capture the ambient credential from the environment
    pub fn from_env(logger: SharedLogger) -> Self {
        Self::new(AmbientCredentials::from_store(&EnvSecretStore::new()), logger)
    }

    pub fn ambient(&self) -> &AmbientCredentials {
        &self.ambient
    }

    /// Provider for one call
    pub fn provider_for(&self, config: &ApiConfig) -> Box<dyn RecipeProvider> {
        create_provider(
            config,
            &self.ambient,
            self.referer.as_deref(),
            self.logger.clone(),
        )
    }

    /// Probe the configured backend
    pub async fn test_connection(&self, config: &ApiConfig) -> ProviderResult<()> {
        let provider = self.provider_for(config);
        log_info!(self.logger, "[SmartChef] Testing {} connection", provider.kind());
        probe(provider.as_ref())
            .await
            .map_err(|e| self.report("Connection test failed", e))
    }

    /// Identify ingredients in a photo
    pub async fn identify_ingredients_from_image(
        &self,
        image_base64: &str,
        config: &ApiConfig,
        language: Language,
    ) -> ProviderResult<Vec<String>> {
        let provider = self.provider_for(config);
        let found = identify_ingredients(provider.as_ref(), image_base64, language)
            .await
            .map_err(|e| self.report("Error identifying ingredients", e))?;
        log_info!(self.logger, "[SmartChef] Identified {} ingredients", found.len());
        Ok(found)
    }

    /// Generate a recipe from ingredients and the user's profile
    pub async fn generate_recipe(
        &self,
        ingredients: &[String],
        config: &ApiConfig,
        language: Language,
        profile: &UserProfile,
    ) -> ProviderResult<Recipe> {
        let provider = self.provider_for(config);
        let recipe = request_recipe(
            provider.as_ref(),
            ingredients,
            config.system_prompt.as_deref(),
            language,
            profile,
        )
        .await
        .map_err(|e| self.report("Error generating recipe", e))?;
        log_info!(self.logger, "[SmartChef] Generated recipe {:?}", recipe.title);
        Ok(recipe)
    }

    fn report(&self, context: &str, error: ProviderError) -> ProviderError {
        let report = classify_error(&error);
        log_error!(self.logger, "[SmartChef] {}: {}", context, report);
        error
    }
}

impl std::fmt::Debug for SmartChef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartChef")
            .field("ambient", &self.ambient)
            .field("referer", &self.referer)
            .finish()
    }
}
