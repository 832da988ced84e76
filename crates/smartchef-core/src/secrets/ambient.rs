//! Process-level fallback credential for the native backend

use super::traits::SecretStore;

/// Secret-store key consulted for the native backend
pub const NATIVE_SECRET_KEY: &str = "google";

/// Read-only credentials captured once at process start
///
/// Passed explicitly into the native adapter and used only when the
/// per-call configuration carries no key.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AmbientCredentials {
    native_api_key: Option<String>,
}

impl AmbientCredentials {
    /// No fallback credential
    pub fn none() -> Self {
        Self::default()
    }

    /// Use a fixed fallback key
    pub fn with_native_key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            native_api_key: (!key.trim().is_empty()).then_some(key),
        }
    }

    /// Capture the fallback key from a secret store
    pub fn from_store(store: &dyn SecretStore) -> Self {
        Self {
            native_api_key: store.get(NATIVE_SECRET_KEY),
        }
    }

    pub fn native_api_key(&self) -> Option<&str> {
        self.native_api_key.as_deref()
    }

    /// Explicit key wins, the ambient key is the last resort
    pub fn resolve_native_key(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.native_api_key.clone())
    }
}

impl std::fmt::Debug for AmbientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmbientCredentials")
            .field("native_api_key", &self.native_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
