//! NativeProvider - Gemini through the `genai` client
//!
//! One client is built per call. The credential comes from the call's
//! configuration, falling back to the ambient key captured at startup.
//! Structured generation uses the backend's own JSON-schema mode.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use genai::adapter::AdapterKind;
use genai::chat::{
    ChatMessage as GenaiMessage, ChatOptions, ChatRequest, ChatResponseFormat,
    ContentPart as GenaiPart, JsonSpec, MessageContent as GenaiContent,
};
use genai::resolver::{AuthData, AuthResolver, Endpoint, ServiceTargetResolver};
use genai::{Client, ModelIden, ServiceTarget};

use crate::logging::{Logger, SharedLogger};
use crate::secrets::AmbientCredentials;
use crate::types::{ApiConfig, DEFAULT_NATIVE_MODEL};
use crate::{log_debug, log_error, log_info};

use super::error::ProviderResult;
use super::schema::RECIPE_SCHEMA_NAME;
use super::traits::{ProviderKind, ProviderRequest, RecipeProvider};

/// Public Gemini API root
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Mime type of every inline image
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Adapter for the native Gemini backend
pub struct NativeProvider {
    config: ApiConfig,
    ambient: AmbientCredentials,
    endpoint: Option<String>,
    logger: SharedLogger,
}

impl NativeProvider {
    pub fn new(config: ApiConfig, ambient: AmbientCredentials, logger: SharedLogger) -> Self {
        Self {
            config,
            ambient,
            endpoint: None,
            logger,
        }
    }

    /// Route calls to a different Gemini-protocol endpoint (proxy, emulator)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Credential used for this call: explicit first, ambient last
    pub fn resolved_api_key(&self) -> Option<String> {
        self.ambient
            .resolve_native_key(self.config.explicit_api_key())
    }

    /// Model id for a request; the probe falls back to the default model
    pub fn model_for(&self, request: &ProviderRequest) -> String {
        let model = self.config.model.trim();
        if model.is_empty() && matches!(request, ProviderRequest::Probe) {
            DEFAULT_NATIVE_MODEL.to_string()
        } else {
            model.to_string()
        }
    }

    /// Translate a request shape into a genai request and options
    pub fn build_chat(request: ProviderRequest) -> (ChatRequest, Option<ChatOptions>) {
        match request {
            ProviderRequest::Probe => (
                ChatRequest::new(vec![GenaiMessage::user(ProviderRequest::PROBE_TEXT)]),
                None,
            ),
            ProviderRequest::Vision {
                image_base64,
                prompt,
            } => {
                let content = GenaiContent::from_parts(vec![
                    GenaiPart::from_binary_base64(IMAGE_MIME_TYPE, image_base64, None),
                    GenaiPart::from_text(prompt),
                ]);
                (ChatRequest::new(vec![GenaiMessage::user(content)]), None)
            }
            ProviderRequest::Generate {
                prompt,
                system_prompt,
                schema,
            } => {
                let chat = ChatRequest::new(vec![GenaiMessage::user(prompt)]).with_system(system_prompt);
                let options = ChatOptions::default().with_response_format(
                    ChatResponseFormat::JsonSpec(JsonSpec::new(RECIPE_SCHEMA_NAME, schema)),
                );
                (chat, Some(options))
            }
        }
    }

    /// Build a client pinned to the Gemini adapter with our credential
    fn create_client(&self) -> Client {
        let api_key = self.resolved_api_key();
        let auth_resolver = AuthResolver::from_resolver_async_fn(
            move |_model_iden: ModelIden| -> Pin<Box<dyn Future<Output = genai::resolver::Result<Option<AuthData>>> + Send>> {
                let api_key = api_key.clone();
                Box::pin(async move { Ok(api_key.map(AuthData::from_single)) })
            },
        );

        let endpoint = self.endpoint.clone();
        let target_resolver = ServiceTargetResolver::from_resolver_fn(
            move |target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
                let ServiceTarget { auth, model, .. } = target;
                let endpoint = match &endpoint {
                    Some(url) => Endpoint::from_owned(url.clone()),
                    None => Endpoint::from_static(GEMINI_ENDPOINT),
                };
                Ok(ServiceTarget {
                    endpoint,
                    auth,
                    model: ModelIden::new(AdapterKind::Gemini, model.model_name.clone()),
                })
            },
        );

        Client::builder()
            .with_auth_resolver(auth_resolver)
            .with_service_target_resolver(target_resolver)
            .build()
    }

    /// Issue one SDK call and return the raw text (empty when absent)
    pub async fn send_native(&self, request: ProviderRequest) -> ProviderResult<String> {
        let label = request.label();
        let model = self.model_for(&request);

        if self.config.explicit_api_key().is_none() {
            log_debug!(self.logger, "[NativeProvider] No explicit key, using ambient credential");
        }
        log_info!(
            self.logger,
            "[NativeProvider] {} request: model={}",
            label,
            model
        );

        let client = self.create_client();
        let (chat, options) = Self::build_chat(request);

        let response = client
            .exec_chat(&model, chat, options.as_ref())
            .await
            .map_err(|e| {
                log_error!(self.logger, "[NativeProvider] {} failed: {}", label, e);
                e
            })?;

        let text = response.first_text().unwrap_or_default().to_string();
        log_debug!(self.logger, "[NativeProvider] Received {} chars", text.len());
        Ok(text)
    }
}

#[async_trait]
impl RecipeProvider for NativeProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Native
    }

    fn name(&self) -> &str {
        "google"
    }

    async fn send(&self, request: ProviderRequest) -> ProviderResult<String> {
        self.send_native(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chef::request_recipe;
    use crate::logging::NoOpLogger;
    use crate::normalize::{classify_error, ErrorKind};
    use crate::providers::{recipe_schema, ProviderError};
    use crate::types::{Language, PrepAction, UserProfile};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOMATO_EGGS: &str = r#"{"title":"Tomato Scrambled Eggs","description":"Home-style classic.",
        "ingredients":["2 tomatoes","3 eggs"],"steps":["Beat the eggs.","Stir-fry tomatoes, add eggs."],
        "prepTechniques":[{"ingredient":"tomato","action":"CHOP","tip":"Cut into wedges."},
                          {"ingredient":"egg","action":"WHISK","tip":"Add a pinch of salt."}]}"#;

    fn provider(config: ApiConfig, ambient: AmbientCredentials) -> NativeProvider {
        NativeProvider::new(config, ambient, Arc::new(NoOpLogger))
    }

    fn gemini_reply(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 4, "totalTokenCount": 16 }
        })
    }

    async fn gemini_server(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex(r"/v1beta/models/.+:generateContent$"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    fn stubbed(server: &MockServer) -> NativeProvider {
        provider(ApiConfig::google().with_api_key("test-key"), AmbientCredentials::none())
            .with_endpoint(format!("{}/v1beta/", server.uri()))
    }

    async fn sent_body(server: &MockServer) -> Value {
        let requests = server.received_requests().await.unwrap();
        serde_json::from_slice(&requests[0].body).unwrap()
    }

    /// Gemini accepts both camelCase and snake_case field names
    fn field<'a>(value: &'a Value, camel: &str, snake: &str) -> &'a Value {
        value
            .get(camel)
            .or_else(|| value.get(snake))
            .unwrap_or(&Value::Null)
    }

    #[test]
    fn test_explicit_key_wins() {
        let p = provider(
            ApiConfig::google().with_api_key("explicit"),
            AmbientCredentials::with_native_key("ambient"),
        );
        assert_eq!(p.resolved_api_key(), Some("explicit".to_string()));
    }

    #[test]
    fn test_ambient_key_fallback() {
        let p = provider(ApiConfig::google(), AmbientCredentials::with_native_key("ambient"));
        assert_eq!(p.resolved_api_key(), Some("ambient".to_string()));

        let none = provider(ApiConfig::google(), AmbientCredentials::none());
        assert_eq!(none.resolved_api_key(), None);
    }

    #[test]
    fn test_probe_model_default() {
        let p = provider(ApiConfig::google().with_model(""), AmbientCredentials::none());
        assert_eq!(p.model_for(&ProviderRequest::Probe), "gemini-2.5-flash");

        let custom = provider(
            ApiConfig::google().with_model("gemini-3-pro-preview"),
            AmbientCredentials::none(),
        );
        assert_eq!(custom.model_for(&ProviderRequest::Probe), "gemini-3-pro-preview");
    }

    #[test]
    fn test_build_generate_chat() {
        let (chat, options) = NativeProvider::build_chat(ProviderRequest::Generate {
            prompt: "Cook something".into(),
            system_prompt: "You are a chef".into(),
            schema: recipe_schema(),
        });
        assert_eq!(chat.system.as_deref(), Some("You are a chef"));
        assert_eq!(chat.messages.len(), 1);
        assert!(options.is_some());
    }

    #[test]
    fn test_build_vision_chat() {
        let (chat, options) = NativeProvider::build_chat(ProviderRequest::Vision {
            image_base64: "QUJD".into(),
            prompt: "Identify".into(),
        });
        assert!(chat.system.is_none());
        assert_eq!(chat.messages.len(), 1);
        assert!(options.is_none());
    }

    #[tokio::test]
    async fn test_vision_sends_inline_image_before_prompt() {
        let server =
            gemini_server(ResponseTemplate::new(200).set_body_json(gemini_reply("Tomato, Egg"))).await;

        let text = stubbed(&server)
            .send(ProviderRequest::Vision {
                image_base64: "QUJD".into(),
                prompt: "Identify".into(),
            })
            .await
            .unwrap();
        assert_eq!(text, "Tomato, Egg");

        let body = sent_body(&server).await;
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        let inline = field(&parts[0], "inlineData", "inline_data");
        assert_eq!(field(inline, "mimeType", "mime_type"), "image/jpeg");
        assert_eq!(inline["data"], "QUJD");
        assert_eq!(parts[1]["text"], "Identify");
    }

    #[tokio::test]
    async fn test_generate_sends_system_instruction_and_schema() {
        let server =
            gemini_server(ResponseTemplate::new(200).set_body_json(gemini_reply(TOMATO_EGGS))).await;

        let recipe = request_recipe(
            &stubbed(&server),
            &["tomato".to_string(), "egg".to_string()],
            Some("Keep it mild."),
            Language::En,
            &UserProfile::default(),
        )
        .await
        .unwrap();
        assert_eq!(recipe.title, "Tomato Scrambled Eggs");
        assert_eq!(recipe.prep_techniques[0].action, PrepAction::Chop);
        assert_eq!(recipe.prep_techniques[1].action, PrepAction::Other);

        let body = sent_body(&server).await;
        let system = field(&body, "systemInstruction", "system_instruction").to_string();
        assert!(system.contains("expert chef assistant"));
        assert!(system.contains("Keep it mild."));

        let generation = field(&body, "generationConfig", "generation_config").to_string();
        assert!(generation.contains("application/json"));
        assert!(generation.contains("prepTechniques"));
    }

    #[tokio::test]
    async fn test_empty_text_is_not_an_error() {
        let server = gemini_server(ResponseTemplate::new(200).set_body_json(gemini_reply(""))).await;
        let text = stubbed(&server).send(ProviderRequest::Probe).await.unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_unauthorized_classifies_as_credential() {
        let server = gemini_server(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "code": 401,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "UNAUTHENTICATED"
            }
        })))
        .await;

        let err = stubbed(&server).send(ProviderRequest::Probe).await.unwrap_err();
        assert!(matches!(err, ProviderError::NativeSdk(_)));
        assert_eq!(classify_error(&err).kind, ErrorKind::InvalidCredential);
    }

    #[test]
    fn test_kind() {
        let p = provider(ApiConfig::google(), AmbientCredentials::none());
        assert_eq!(p.kind(), ProviderKind::Native);
    }
}
