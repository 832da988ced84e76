//! SmartChef Core
//!
//! Runtime-agnostic recipe suggestion over interchangeable LLM backends.
//! A UI layer hands over a configuration snapshot and calls one of three
//! operations; this crate picks the backend family, speaks its protocol and
//! returns ingredient lists or a validated `Recipe`.
//!
//! ## Backends
//!
//! - Native: Gemini through `genai`, with inline image parts and native
//!   JSON-schema output
//! - Generic: any OpenAI-compatible chat-completions endpoint over `reqwest`
//!
//! ```rust,ignore
//! use smartchef_core::{ApiConfig, ConsoleLogger, Language, SmartChef, UserProfile};
//! use std::sync::Arc;
//!
//! let chef = SmartChef::from_env(Arc::new(ConsoleLogger::from_env()));
//! let config = ApiConfig::openrouter().with_api_key(key);
//!
//! chef.test_connection(&config).await?;
//! let found = chef.identify_ingredients_from_image(&photo_b64, &config, Language::En).await?;
//! let recipe = chef.generate_recipe(&found, &config, Language::En, &UserProfile::default()).await?;
//! ```

pub mod types;
pub mod secrets;
pub mod logging;
pub mod config;
pub mod providers;
pub mod normalize;
pub mod chef;

// Re-export commonly used types
pub use types::{
    ApiConfig, Language, UserProfile,
    Recipe, PrepAction, PrepTechnique,
    ChatMessage, ContentPart, MessageRole, MessageContent,
    CatalogEntry, AVAILABLE_EQUIPMENT, DIETARY_GOALS, COMMON_INGREDIENTS,
};

pub use secrets::{
    SecretStore, SecretStoreError, SecretStoreResult,
    EnvSecretStore, MemorySecretStore, AmbientCredentials,
};

pub use logging::{Logger, LogLevel, NoOpLogger, ConsoleLogger, MemoryLogger, SharedLogger};

pub use config::{Settings, SettingsStore, FileSettingsStore, MemorySettingsStore, ConfigError};

pub use providers::{
    create_provider, is_native_provider,
    RecipeProvider, ProviderKind, ProviderRequest, ProviderError, ProviderResult,
    GenericProvider, NativeProvider, MockProvider,
};

pub use normalize::{classify_error, parse_recipe, strip_code_fences, ErrorKind, ErrorReport};

pub use chef::{
    SmartChef, probe, identify_ingredients, request_recipe,
    split_ingredient_list, merge_ingredients,
};
