//! LLM provider implementations
//!
//! ## Architecture
//!
//! Two backend families sit behind the `RecipeProvider` trait:
//! - `NativeProvider`: Gemini through the `genai` client, with inline image
//!   parts and native JSON-schema output
//! - `GenericProvider`: any OpenAI-compatible chat-completions endpoint over
//!   `reqwest`, with the advisory `json_object` response format
//!
//! The family is chosen once per call by `is_native_provider`, never by
//! inspecting a response. `MockProvider` is kept for testing.

mod error;
mod generic;
mod mock;
mod native;
mod schema;
mod selector;
mod traits;

pub use error::{ProviderError, ProviderResult};
pub use generic::{
    is_default_gateway, resolve_endpoint, ChatCompletionRequest, GenericProvider, ResponseFormat,
    CHAT_COMPLETIONS_PATH, TEMPERATURE,
};
pub use mock::{MockMode, MockProvider};
pub use native::{NativeProvider, GEMINI_ENDPOINT, IMAGE_MIME_TYPE};
pub use schema::{recipe_schema, RECIPE_SCHEMA_NAME};
pub use selector::{is_native_provider, NATIVE_PROVIDER_NAME};
pub use traits::{ProviderKind, ProviderRequest, RecipeProvider};

use crate::logging::{Logger, SharedLogger};
use crate::secrets::AmbientCredentials;
use crate::types::ApiConfig;

/// Create the provider for one call
///
/// The configuration is a snapshot; the returned provider owns its own
/// client and shares nothing with other calls. `referer` overrides the
/// identification sent to the default gateway.
pub fn create_provider(
    config: &ApiConfig,
    ambient: &AmbientCredentials,
    referer: Option<&str>,
    logger: SharedLogger,
) -> Box<dyn RecipeProvider> {
    let kind = ProviderKind::select(config);
    crate::log_debug!(
        logger,
        "[providers] provider={:?} routed to {} backend",
        config.provider,
        kind
    );

    match kind {
        ProviderKind::Native => Box::new(NativeProvider::new(config.clone(), ambient.clone(), logger)),
        ProviderKind::Generic => {
            let provider = GenericProvider::new(config.clone(), logger);
            let provider = match referer {
                Some(referer) => provider.with_referer(referer),
                None => provider,
            };
            Box::new(provider)
        }
    }
}
