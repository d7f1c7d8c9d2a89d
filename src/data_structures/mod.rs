//! Data structures for the Mokulua compound-word analyzer.
//!
//! This module contains the two structures the analysis is built on: the
//! word trie that stores the dictionary, and the segmentation engine that
//! reads it. Both are single-threaded by design; the trie is populated
//! once during setup and only ever borrowed immutably afterwards.

pub mod lanai_trie;
pub mod makai_segmenter;

// Re-export common data structures
pub use lanai_trie::LanaiTrie;
pub use makai_segmenter::{MakaiSegmenter, Segmentation};
