//! Logging abstractions
//!
//! The core never writes to a global sink; every component receives a
//! `SharedLogger` from its caller.

mod console;
mod memory;
mod traits;

pub use console::{ConsoleLogger, LOG_LEVEL_ENV};
pub use memory::MemoryLogger;
pub use traits::{LogLevel, Logger, NoOpLogger, SharedLogger};
