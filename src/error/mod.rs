//! Error module for the Mokulua compound-word analyzer.
//!
//! One typed error per domain, aggregated into [`MokuluaError`] at the
//! application boundary. The core data structures deliberately have no
//! error taxonomy of their own: their operations are total once the
//! lexicon loader has sanitized the input.

use thiserror::Error;

pub mod config;
pub mod lexicon;

/// Result type alias used throughout the analyzer.
pub type MokuluaResult<T> = Result<T, MokuluaError>;

/// Core error enum for the Mokulua analyzer.
#[derive(Error, Debug)]
pub enum MokuluaError {
    /// Errors occurring during configuration loading or validation.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors occurring while loading the word list.
    #[error("lexicon error: {0}")]
    Lexicon(#[from] lexicon::LexiconError),

    /// IO errors that may occur while writing results.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are
    /// not defined.
    #[error("{0}")]
    Custom(String),
}
