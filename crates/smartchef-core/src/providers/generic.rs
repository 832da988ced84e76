//! GenericProvider - OpenAI-compatible chat-completions adapter
//!
//! Sends one POST per call to `{base_url}/chat/completions` and extracts the
//! first choice's message content. No retry, no timeout override.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::logging::{Logger, SharedLogger};
use crate::types::{ApiConfig, ChatMessage, ContentPart, MessageRole, DEFAULT_GATEWAY_URL};
use crate::{log_debug, log_error, log_info};

use super::error::{ProviderError, ProviderResult};
use super::traits::{ProviderKind, ProviderRequest, RecipeProvider};

/// Path suffix of the chat-completions endpoint
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Sampling temperature used for every request
pub const TEMPERATURE: f32 = 0.7;

/// Host of the default gateway, which asks callers to identify themselves
pub const GATEWAY_HOST: &str = "openrouter.ai";

/// App title sent to the default gateway
pub const APP_TITLE: &str = "SmartChef";

/// Referer sent to the default gateway unless overridden
pub const DEFAULT_REFERER: &str = "https://smartchef.app";

/// Resolve the chat-completions endpoint from a user-supplied base URL
///
/// Accepts a bare root or a full endpoint; trailing slashes are ignored
/// and the suffix is appended at most once.
pub fn resolve_endpoint(base_url: &str) -> String {
    let trimmed = base_url.trim();
    let root = if trimmed.is_empty() {
        DEFAULT_GATEWAY_URL
    } else {
        trimmed
    };
    let root = root.trim_end_matches('/');

    if root.ends_with(CHAT_COMPLETIONS_PATH) {
        root.to_string()
    } else {
        format!("{}{}", root, CHAT_COMPLETIONS_PATH)
    }
}

/// Whether the endpoint belongs to the default gateway
pub fn is_default_gateway(endpoint: &str) -> bool {
    Url::parse(endpoint)
        .ok()
        .and_then(|url| {
            url.host_str().map(|host| {
                host == GATEWAY_HOST || host.ends_with(&format!(".{}", GATEWAY_HOST))
            })
        })
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

/// Request body of a chat-completions call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<Value>,
}

/// Pull the assistant text out of a response envelope
///
/// Content may be a string or a list of `{type: "text", text}` parts.
fn extract_content(envelope: ChatCompletionResponse) -> Option<String> {
    let content = envelope.choices.into_iter().next()?.message?.content?;
    let text = match content {
        Value::String(s) => s,
        Value::Array(parts) => parts
            .iter()
            .filter_map(|p| p.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join(""),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Adapter for any OpenAI-compatible backend
pub struct GenericProvider {
    config: ApiConfig,
    client: Client,
    referer: String,
    logger: SharedLogger,
}

impl GenericProvider {
    /// Create a provider for one call; each instance owns its own HTTP client
    pub fn new(config: ApiConfig, logger: SharedLogger) -> Self {
        Self {
            config,
            client: Client::new(),
            referer: DEFAULT_REFERER.to_string(),
            logger,
        }
    }

    /// Override the referer sent to the default gateway
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    /// The endpoint this provider posts to
    pub fn endpoint(&self) -> String {
        resolve_endpoint(&self.config.base_url)
    }

    /// Build the request body
    pub fn build_request(&self, messages: Vec<ChatMessage>, expect_json: bool) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: TEMPERATURE,
            response_format: expect_json.then(|| ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        }
    }

    /// Extra identification headers for the endpoint
    pub fn identification_headers(&self, endpoint: &str) -> Vec<(&'static str, String)> {
        if is_default_gateway(endpoint) {
            vec![
                ("HTTP-Referer", self.referer.clone()),
                ("X-Title", APP_TITLE.to_string()),
            ]
        } else {
            Vec::new()
        }
    }

    /// Translate a request shape into chat messages and the JSON-mode flag
    pub fn messages_for(request: ProviderRequest) -> (Vec<ChatMessage>, bool) {
        match request {
            ProviderRequest::Probe => (vec![ChatMessage::user(ProviderRequest::PROBE_TEXT)], false),
            ProviderRequest::Vision {
                image_base64,
                prompt,
            } => (
                vec![ChatMessage::with_parts(
                    MessageRole::User,
                    vec![
                        ContentPart::text(prompt),
                        ContentPart::jpeg_base64(&image_base64),
                    ],
                )],
                false,
            ),
            ProviderRequest::Generate {
                prompt,
                system_prompt,
                ..
            } => (
                vec![ChatMessage::system(system_prompt), ChatMessage::user(prompt)],
                true,
            ),
        }
    }

    /// Send one chat-completions request and return the assistant text
    pub async fn send_chat(&self, messages: Vec<ChatMessage>, expect_json: bool) -> ProviderResult<String> {
        let endpoint = self.endpoint();
        let body = self.build_request(messages, expect_json);

        log_info!(
            self.logger,
            "[GenericProvider] POST {} model={} json_mode={}",
            endpoint,
            body.model,
            expect_json
        );

        let mut request = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body);
        for (name, value) in self.identification_headers(&endpoint) {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(|e| {
            log_error!(self.logger, "[GenericProvider] Request failed: {}", e);
            ProviderError::Connection(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            log_error!(
                self.logger,
                "[GenericProvider] HTTP {} from {}",
                status.as_u16(),
                endpoint
            );
            return Err(ProviderError::http(status.as_u16(), text));
        }

        let text = response.text().await?;
        let envelope: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| ProviderError::malformed(text.clone(), e.to_string()))?;

        let content = extract_content(envelope).ok_or(ProviderError::EmptyResponse)?;
        log_debug!(
            self.logger,
            "[GenericProvider] Received {} chars",
            content.len()
        );
        Ok(content)
    }
}

#[async_trait]
impl RecipeProvider for GenericProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Generic
    }

    fn name(&self) -> &str {
        &self.config.provider
    }

    async fn send(&self, request: ProviderRequest) -> ProviderResult<String> {
        let (messages, expect_json) = Self::messages_for(request);
        self.send_chat(messages, expect_json).await
    }
}
