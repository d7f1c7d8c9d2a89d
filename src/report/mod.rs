//! Result aggregation and reporting for the compound-word analysis.
//!
//! The reporter drives the classification sweep over the sorted word list,
//! selects the longest compound word, optionally streams every compound to
//! an output sink and renders the human-readable summary with the phase
//! timings.

use std::io::Write;
use std::time::Duration;

use crate::data_structures::lanai_trie::LanaiTrie;
use crate::data_structures::makai_segmenter::MakaiSegmenter;
use crate::error::MokuluaResult;

/// The longest compound word found in a sweep, with its decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestCompound {
    /// The word itself.
    pub word: String,

    /// Sub-words touched while segmenting it, in lexicographic order.
    pub subwords: Vec<String>,
}

/// Aggregated outcome of a classification sweep.
#[derive(Debug, Clone, Default)]
pub struct CompoundReport {
    /// Number of words examined.
    pub word_count: usize,

    /// Number of words classified as compound.
    pub compound_count: usize,

    /// The longest compound word, if any word classified as compound.
    pub longest: Option<LongestCompound>,

    /// Time spent loading and sorting the word list.
    pub load_elapsed: Duration,

    /// Time spent building the trie and classifying every word.
    pub scan_elapsed: Duration,
}

/// Classifies every word against the trie and aggregates the results.
///
/// Words are expected in the loader's sorted order; the longest compound is
/// tracked with a strict length comparison, so on ties the first word in
/// that order wins. When `sink` is given, every compound word is written to
/// it, one per line, as it is found.
///
/// The winner is segmented a second time with collection enabled to obtain
/// its sub-word decomposition, matching the two-pass shape of the external
/// interface (classify all, then decompose the single winner).
pub fn scan<W: Write>(
    words: &[String],
    trie: &LanaiTrie,
    mut sink: Option<&mut W>,
) -> MokuluaResult<CompoundReport> {
    let segmenter = MakaiSegmenter::new(trie);

    let mut longest: Option<&str> = None;
    let mut compound_count = 0;

    for word in words {
        if !segmenter.is_compound(word) {
            continue;
        }
        compound_count += 1;

        if let Some(out) = sink.as_deref_mut() {
            writeln!(out, "{word}")?;
        }
        if word.len() > longest.map_or(0, str::len) {
            longest = Some(word.as_str());
        }
    }

    let longest = longest.map(|word| LongestCompound {
        word: word.to_owned(),
        subwords: segmenter.segment(word).subwords.into_iter().collect(),
    });

    Ok(CompoundReport {
        word_count: words.len(),
        compound_count,
        longest,
        load_elapsed: Duration::ZERO,
        scan_elapsed: Duration::ZERO,
    })
}

/// Renders the summary of a sweep in the analyzer's display format.
pub fn render<W: Write>(report: &CompoundReport, out: &mut W) -> MokuluaResult<()> {
    writeln!(out, "Loaded {} words", report.word_count)?;
    writeln!(out)?;

    match &report.longest {
        Some(longest) => {
            writeln!(out, "The longest compound word is '{}'", longest.word)?;
            writeln!(out)?;
            writeln!(out, "Sub-words of '{}':", longest.word)?;
            writeln!(out, "    {}", longest.subwords.join(" "))?;
        }
        None => {
            writeln!(out, "No compound words found")?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Preparation time: {} ms",
        report.load_elapsed.as_millis()
    )?;
    writeln!(
        out,
        " Processing time: {} ms",
        report.scan_elapsed.as_millis()
    )?;

    Ok(())
}
