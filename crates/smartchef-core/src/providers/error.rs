//! Provider error types

use thiserror::Error;

/// Errors surfaced by a single backend call
///
/// Every orchestration call fails fast with exactly one of these.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Non-success status from a generic backend
    #[error("API Error ({status}): {body}")]
    ProviderHttp { status: u16, body: String },

    /// Backend answered but carried no extractable content
    #[error("No content received from provider")]
    EmptyResponse,

    /// Content was present but not valid JSON after fence stripping
    #[error("Malformed response from provider: {message}")]
    MalformedResponse { raw: String, message: String },

    /// Network-level failure (DNS, TLS, connection reset)
    #[error("Connection failed: {0}")]
    Connection(#[from] reqwest::Error),

    /// Error raised by the native SDK, passed through
    #[error("{0}")]
    NativeSdk(#[from] genai::Error),
}

impl ProviderError {
    /// Create an HTTP status error
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::ProviderHttp {
            status,
            body: body.into(),
        }
    }

    /// Create a malformed-response error keeping the offending text
    pub fn malformed(raw: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            raw: raw.into(),
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ProviderHttp { status, .. } => Some(*status),
            Self::Connection(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw backend text kept for diagnostics
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::ProviderHttp { body, .. } => Some(body),
            Self::MalformedResponse { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
