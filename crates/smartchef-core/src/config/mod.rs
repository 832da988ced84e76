//! Settings persistence
//!
//! - `MemorySettingsStore`: In-memory for testing
//! - `FileSettingsStore`: YAML file at the user config level

mod file;
mod memory;
mod traits;

pub use file::FileSettingsStore;
pub use memory::MemorySettingsStore;
pub use traits::{ConfigError, ConfigResult, Settings, SettingsStore};
