//! Error classification for presentation

use crate::providers::ProviderError;

/// Presentation category of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 404: wrong endpoint or model name
    NotFound,
    /// 401: missing or invalid credential
    InvalidCredential,
    /// Anything else
    Provider,
}

impl ErrorKind {
    /// Human-readable hint, `None` for generic provider failures
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ErrorKind::NotFound => Some("404 Not Found: Check Model Name or URL."),
            ErrorKind::InvalidCredential => Some("401 Unauthorized: Check API Key."),
            ErrorKind::Provider => None,
        }
    }

    fn from_status(status: u16) -> Self {
        match status {
            401 => ErrorKind::InvalidCredential,
            404 => ErrorKind::NotFound,
            _ => ErrorKind::Provider,
        }
    }
}

/// A classified error that keeps the original detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub detail: String,
}

impl ErrorReport {
    /// The message to show: the hint when there is one, else the original text
    pub fn user_message(&self) -> &str {
        match self.kind.hint() {
            Some(hint) => hint,
            None => &self.detail,
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind.hint() {
            Some(hint) => write!(f, "{} ({})", hint, self.detail),
            None => f.write_str(&self.detail),
        }
    }
}

/// Classify an error message by the status codes it mentions
///
/// "401" is checked before "404", so a message with both is a
/// credential problem.
pub fn classify_message(message: &str) -> ErrorReport {
    let kind = if message.contains("401") {
        ErrorKind::InvalidCredential
    } else if message.contains("404") {
        ErrorKind::NotFound
    } else {
        ErrorKind::Provider
    };
    ErrorReport {
        kind,
        detail: message.to_string(),
    }
}

/// Classify a provider error by its message
///
/// The HTTP status is consulted only when the message mentions neither
/// code.
pub fn classify_error(error: &ProviderError) -> ErrorReport {
    let mut report = classify_message(&error.to_string());
    if report.kind == ErrorKind::Provider {
        if let Some(status) = error.status() {
            report.kind = ErrorKind::from_status(status);
        }
    }
    report
}
