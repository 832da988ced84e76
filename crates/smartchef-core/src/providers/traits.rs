//! Provider trait definition

use async_trait::async_trait;
use serde_json::Value;

use super::error::ProviderResult;

/// The two backend families behind the uniform interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Vendor SDK with native multimodal input and schema-constrained output
    Native,
    /// Any OpenAI-compatible chat-completions endpoint
    Generic,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Native => write!(f, "native"),
            ProviderKind::Generic => write!(f, "generic"),
        }
    }
}

/// One of the request shapes the core ever sends
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderRequest {
    /// Minimal "Hello" prompt used as a connectivity probe
    Probe,
    /// Identify ingredients in a JPEG image
    Vision {
        image_base64: String,
        prompt: String,
    },
    /// Structured recipe generation
    Generate {
        prompt: String,
        system_prompt: String,
        schema: Value,
    },
}

impl ProviderRequest {
    /// Text sent with the probe
    pub const PROBE_TEXT: &'static str = "Hello";

    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            ProviderRequest::Probe => "probe",
            ProviderRequest::Vision { .. } => "vision",
            ProviderRequest::Generate { .. } => "generate",
        }
    }

    /// Whether the request asks for a JSON object back
    pub fn expects_json(&self) -> bool {
        matches!(self, ProviderRequest::Generate { .. })
    }
}

/// A backend able to answer every `ProviderRequest`
///
/// Implementations return the raw assistant text; normalization and
/// parsing happen in the caller.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Backend family
    fn kind(&self) -> ProviderKind;

    /// Provider label for logs
    fn name(&self) -> &str;

    /// Issue exactly one backend call
    async fn send(&self, request: ProviderRequest) -> ProviderResult<String>;
}
