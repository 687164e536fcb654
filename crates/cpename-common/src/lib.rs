//! cpename Common - Shared utilities: configuration and logging
//!
//! This crate provides the ambient setup used by applications embedding
//! the cpename crates.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigBuilder, LoggingConfig, NamingConfig};
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogFormat};
