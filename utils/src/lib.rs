//! Shared utilities: structured logging and its configuration.

pub mod config;
pub mod logging;

pub use config::{ConfigError, LoggingConfig};
pub use logging::{init_logging, LogFormat};
