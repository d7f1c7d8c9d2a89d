//! Configuration error module.
//!
//! This module defines error types that may occur during configuration
//! loading, parsing, and validation operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Error when parsing the configuration sources.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// Error when validating the configuration.
    #[error("configuration validation error: {0}")]
    ValidationError(String),
}
