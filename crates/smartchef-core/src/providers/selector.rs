//! Provider selection

use crate::types::ApiConfig;

use super::traits::ProviderKind;

/// Canonical provider name of the native backend
pub const NATIVE_PROVIDER_NAME: &str = "google";

/// True iff the trimmed, lowercased provider is empty or the native name
///
/// Partial matches and other vendor names route to the generic path.
pub fn is_native_provider(config: &ApiConfig) -> bool {
    let provider = config.provider.trim().to_lowercase();
    provider.is_empty() || provider == NATIVE_PROVIDER_NAME
}

impl ProviderKind {
    /// Classify a configuration
    pub fn select(config: &ApiConfig) -> Self {
        if is_native_provider(config) {
            ProviderKind::Native
        } else {
            ProviderKind::Generic
        }
    }
}
