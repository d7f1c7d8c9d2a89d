//! Tests for the word-list loader.

use proptest::prelude::*;

use crate::config::LexiconConfig;
use crate::error::lexicon::LexiconError;
use crate::lexicon::{self, normalize_line};
use crate::tests::test_utils::{create_test_dir, noisy_line_strategy, write_word_file};

#[test]
fn test_normalize_strips_and_folds() {
    assert_eq!(normalize_line("Hello, World!"), "helloworld");
    assert_eq!(normalize_line("cat"), "cat");
    assert_eq!(normalize_line("CAT"), "cat");
    assert_eq!(normalize_line("c4t "), "ct");
    assert_eq!(normalize_line("42"), "");
    assert_eq!(normalize_line(""), "");
    assert_eq!(normalize_line("naïve"), "nave");
}

#[test]
fn test_load_sorts_and_skips_empty_lines() {
    let dir = create_test_dir().unwrap();
    let path = write_word_file(&dir, "words.txt", &["dog", "", "cat", "  ", "apple", "42"]);

    let words = lexicon::load(&path, &LexiconConfig::default()).unwrap();
    assert_eq!(words, ["apple", "cat", "dog"]);
}

#[test]
fn test_load_keeps_duplicates() {
    let dir = create_test_dir().unwrap();
    let path = write_word_file(&dir, "words.txt", &["cat", "dog", "cat"]);

    let words = lexicon::load(&path, &LexiconConfig::default()).unwrap();
    assert_eq!(words, ["cat", "cat", "dog"]);
}

#[test]
fn test_load_case_folds_before_sorting() {
    let dir = create_test_dir().unwrap();
    let path = write_word_file(&dir, "words.txt", &["Banana", "apple", "CHERRY"]);

    let words = lexicon::load(&path, &LexiconConfig::default()).unwrap();
    assert_eq!(words, ["apple", "banana", "cherry"]);
}

#[test]
fn test_load_skips_words_over_the_length_limit() {
    let dir = create_test_dir().unwrap();
    let path = write_word_file(&dir, "words.txt", &["short", "waytoolongword"]);

    let config = LexiconConfig {
        max_word_length: 8,
    };
    let words = lexicon::load(&path, &config).unwrap();
    assert_eq!(words, ["short"]);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let dir = create_test_dir().unwrap();
    let path = dir.path().join("does_not_exist.txt");

    let err = lexicon::load(&path, &LexiconConfig::default()).unwrap_err();
    assert!(matches!(err, LexiconError::Unreadable { .. }));
    assert!(err.to_string().contains("does_not_exist.txt"));
}

proptest! {
    // Property: every loaded word is non-empty lowercase ASCII within the
    // configured length, and the list is sorted.
    #[test]
    fn prop_loaded_words_are_normalized(lines in prop::collection::vec(noisy_line_strategy(), 0..30)) {
        let dir = create_test_dir().unwrap();
        let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let path = write_word_file(&dir, "words.txt", &line_refs);

        let config = LexiconConfig::default();
        let words = lexicon::load(&path, &config).unwrap();

        for word in &words {
            prop_assert!(!word.is_empty());
            prop_assert!(word.len() <= config.max_word_length);
            prop_assert!(word.bytes().all(|b| b.is_ascii_lowercase()));
        }
        prop_assert!(words.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
