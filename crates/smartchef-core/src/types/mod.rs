//! Core types shared by providers and orchestration
//!
//! This module contains the value types passed in from the UI layer and
//! the recipe returned to it.

mod api;
mod message;
mod profile;
mod recipe;

pub use api::{
    ApiConfig, Language, LanguageParseError, DEFAULT_GATEWAY_MODEL, DEFAULT_GATEWAY_URL,
    DEFAULT_NATIVE_MODEL,
};
pub use message::{ChatMessage, ContentPart, ImageUrl, MessageContent, MessageRole};
pub use profile::{
    find_entry, resolve_names, CatalogEntry, IngredientOption, UserProfile, AVAILABLE_EQUIPMENT,
    COMMON_INGREDIENTS, DIETARY_GOALS,
};
pub use recipe::{PrepAction, PrepTechnique, Recipe};
