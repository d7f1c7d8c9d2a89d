//! Word-list loading for the Mokulua compound-word analyzer.
//!
//! This module is the single point where raw text is turned into the
//! validated lowercase words the core structures require. Everything past
//! this boundary may assume non-empty ASCII lowercase input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::config::LexiconConfig;
use crate::error::lexicon::LexiconError;

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Normalizes one raw line into a dictionary word: ASCII letters are kept
/// and case-folded to lowercase, every other character is dropped.
///
/// Returns an empty string for lines with no letters at all; callers skip
/// those.
pub fn normalize_line(line: &str) -> String {
    line.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Reads the word list at `path`, one word per line.
///
/// Each line is normalized with [`normalize_line`]; lines that normalize
/// to nothing are discarded, as are words longer than the configured
/// maximum. The returned list is sorted lexicographically, duplicates
/// intact.
///
/// # Errors
///
/// Returns [`LexiconError::Unreadable`] if the file cannot be opened, and
/// [`LexiconError::Read`] if a line cannot be read from it. Either way the
/// caller gets no partial word list.
pub fn load<P: AsRef<Path>>(path: P, config: &LexiconConfig) -> LexiconResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LexiconError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let word = normalize_line(&line);
        if word.is_empty() {
            continue;
        }
        if word.len() > config.max_word_length {
            debug!(
                word_length = word.len(),
                max_word_length = config.max_word_length,
                "skipping over-long word"
            );
            continue;
        }

        words.push(word);
    }

    // The classification sweep relies on sorted order for its tie-break.
    words.sort();

    Ok(words)
}
