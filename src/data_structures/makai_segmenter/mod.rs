// Copyright (c) 2025 Mokulua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Makai Segmenter for compound-word detection.
//!
//! This module decides whether a word is a *proper compound*: expressible
//! as a concatenation of two or more words stored in a [`LanaiTrie`]. The
//! search walks the trie one letter at a time and, whenever it stands on a
//! terminal node, may restart from the root to begin matching the next
//! sub-word. A word never counts as a compound of only itself.
//!
//! # Example
//!
//! ```
//! use mokulua_lib::data_structures::lanai_trie::LanaiTrie;
//! use mokulua_lib::data_structures::makai_segmenter::MakaiSegmenter;
//!
//! let trie = LanaiTrie::from_words(["cat", "dog", "catdog"]);
//! let segmenter = MakaiSegmenter::new(&trie);
//!
//! assert!(segmenter.is_compound("catdog"));
//! assert!(!segmenter.is_compound("cat"));
//!
//! let segmentation = segmenter.segment("catdog");
//! let subwords: Vec<&str> = segmentation.subwords.iter().map(String::as_str).collect();
//! assert_eq!(subwords, ["cat", "dog"]);
//! ```
//!
//! # Performance Characteristics
//!
//! Each accepted prefix reopens the search from the root, so pathological
//! word lists (long runs of a single letter, say) drive the walk to
//! exponential time. Natural-language word lists stay far away from that
//! corner; memoizing restart positions would cap the cost but is not done
//! here, keeping the walk allocation-free when no collection is requested.

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use crate::data_structures::lanai_trie::{LanaiTrie, TrieNode};

/// Outcome of a segmentation query with sub-word collection enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// Whether the word splits into two or more stored words.
    pub is_compound: bool,

    /// Every stored word touched as a terminal during the search, in
    /// lexicographic order. Terminals on abandoned branches are included,
    /// so the set describes all explored sub-word boundaries, not a single
    /// decomposition.
    pub subwords: BTreeSet<String>,
}

/// Compound-word segmentation engine over a borrowed [`LanaiTrie`].
///
/// The engine never mutates the trie; one engine can serve any number of
/// queries, and each query keeps its own recursion state.
#[derive(Debug, Clone, Copy)]
pub struct MakaiSegmenter<'a> {
    trie: &'a LanaiTrie,
}

impl<'a> MakaiSegmenter<'a> {
    /// Creates a segmenter reading from `trie`.
    pub fn new(trie: &'a LanaiTrie) -> Self {
        Self { trie }
    }

    /// Whether `word` is a concatenation of two or more stored words.
    ///
    /// Always `false` for the empty string, for words absent from any
    /// decomposition, and for a word whose only cover is itself.
    pub fn is_compound(&self, word: &str) -> bool {
        self.walk(word, 0, self.trie.root(), None)
    }

    /// Classifies `word` and collects the sub-words touched along the way.
    pub fn segment(&self, word: &str) -> Segmentation {
        let mut subwords = BTreeSet::new();
        let is_compound = self.walk(word, 0, self.trie.root(), Some(&mut subwords));
        Segmentation {
            is_compound,
            subwords,
        }
    }

    /// Recursive search over the pair (position in `word`, current node).
    ///
    /// Two moves are tried at each position: consume the next letter over
    /// an existing edge, or, standing on a terminal, restart from the root
    /// at the same position to open the next sub-word. Recursion depth is
    /// bounded by `word.len()` plus the number of restarts, each of which
    /// consumes at least one letter.
    fn walk(
        &self,
        word: &str,
        position: usize,
        node: &TrieNode,
        mut collected: Option<&mut BTreeSet<String>>,
    ) -> bool {
        let bytes = word.as_bytes();

        // All input consumed: accept only on a terminal for a word other
        // than the query itself, so a word is never a compound of itself.
        if position == bytes.len() {
            return match node.word() {
                Some(terminal) if terminal != word => {
                    if let Some(set) = collected {
                        set.insert(terminal.to_owned());
                    }
                    true
                }
                _ => false,
            };
        }

        let mut matched = false;

        // Continue the sub-word in progress along an existing edge.
        if let Some(child) = node.child(bytes[position]) {
            matched = self.walk(word, position + 1, child, collected.as_deref_mut());
        }

        // A complete sub-word ends here; if extending got stuck, try the
        // remainder as a fresh word from the root.
        if !matched && node.is_terminal() {
            matched = self.walk(word, position, self.trie.root(), collected.as_deref_mut());
        }

        // Record every terminal the walk stands on, whether or not the
        // branches above panned out.
        if let (Some(set), Some(terminal)) = (collected, node.word()) {
            set.insert(terminal.to_owned());
        }

        matched
    }
}
