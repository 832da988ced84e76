//! Mock provider for testing
//!
//! Deterministic responses without network access. Every request is
//! recorded so tests can assert on the prompts that were built.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use super::error::{ProviderError, ProviderResult};
use super::traits::{ProviderKind, ProviderRequest, RecipeProvider};
use crate::log_debug;
use crate::logging::{Logger, NoOpLogger, SharedLogger};

/// Mock response mode
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return the same text for every request
    Fixed(String),
    /// Fail with an HTTP status error
    Http { status: u16, body: String },
    /// Return an empty string, like an SDK response without text
    Empty,
}

/// Mock backend standing in for either provider kind
pub struct MockProvider {
    kind: ProviderKind,
    mode: MockMode,
    requests: Mutex<Vec<ProviderRequest>>,
    logger: SharedLogger,
}

impl MockProvider {
    pub fn new(kind: ProviderKind, mode: MockMode) -> Self {
        Self {
            kind,
            mode,
            requests: Mutex::new(Vec::new()),
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Native-kind provider returning fixed text
    pub fn native(response: impl Into<String>) -> Self {
        Self::new(ProviderKind::Native, MockMode::Fixed(response.into()))
    }

    /// Generic-kind provider returning fixed text
    pub fn generic(response: impl Into<String>) -> Self {
        Self::new(ProviderKind::Generic, MockMode::Fixed(response.into()))
    }

    /// Provider failing every request with the given status
    pub fn http_error(kind: ProviderKind, status: u16, body: impl Into<String>) -> Self {
        Self::new(
            kind,
            MockMode::Http {
                status,
                body: body.into(),
            },
        )
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// All requests received so far
    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<ProviderRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl RecipeProvider for MockProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn name(&self) -> &str {
        "mock"
    }

    async fn send(&self, request: ProviderRequest) -> ProviderResult<String> {
        log_debug!(self.logger, "[MockProvider] {} request", request.label());
        self.requests.lock().push(request);

        match &self.mode {
            MockMode::Fixed(text) => Ok(text.clone()),
            MockMode::Http { status, body } => Err(ProviderError::http(*status, body.clone())),
            MockMode::Empty => Ok(String::new()),
        }
    }
}
