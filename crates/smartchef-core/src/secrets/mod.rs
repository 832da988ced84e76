//! Credential sources
//!
//! - `SecretStore` trait with `EnvSecretStore` and `MemorySecretStore`
//! - `AmbientCredentials`: the native backend's fallback key, read once at
//!   startup and passed explicitly to each call

mod ambient;
mod env_store;
mod memory_store;
mod traits;

pub use ambient::{AmbientCredentials, NATIVE_SECRET_KEY};
pub use env_store::EnvSecretStore;
pub use memory_store::MemorySecretStore;
pub use traits::{SecretStore, SecretStoreError, SecretStoreResult};
