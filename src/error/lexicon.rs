//! Lexicon error module.
//!
//! Errors raised while turning a word-list file into validated dictionary
//! words. These are the only user-visible failures in the system; the core
//! structures downstream of the loader are total over their inputs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a word list.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// Error when the word-list file cannot be opened.
    #[error("cannot load words from '{}': {source}", path.display())]
    Unreadable {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Error when reading a line from an opened word-list file fails.
    #[error("failed reading words from '{}': {source}", path.display())]
    Read {
        /// The path being read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
}
