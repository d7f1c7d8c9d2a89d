//! Mokulua Compound-Word Analyzer Library
//!
//! This library contains the core components of the Mokulua analyzer: the
//! word trie and segmentation engine, the word-list loader, and the report
//! aggregation used by the command-line binary. It is designed to be used
//! by the binary crate, but can also be used as a dependency by other
//! projects.
//!
//! # Architecture
//!
//! The analyzer is designed with the following principles in mind:
//! - Strict component boundaries: the loader is the only place raw text is
//!   sanitized; everything downstream assumes validated input
//! - The core structures are total functions over their documented
//!   preconditions and carry no error taxonomy
//! - Build once, read forever: the trie is populated during setup and only
//!   borrowed immutably afterwards

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod lexicon;
pub mod report;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Mokulua analyzer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::MokuluaResult<()> {
    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
