//! Mokulua compound-word analyzer - main entrypoint.
//!
//! Loads a word list, builds the trie, classifies every word and reports
//! the longest compound word together with its sub-words.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info, warn};

use mokulua_lib::config::{self, ConfigLoader};
use mokulua_lib::data_structures::lanai_trie::LanaiTrie;
use mokulua_lib::error::{MokuluaError, MokuluaResult};
use mokulua_lib::{lexicon, report};

/// Command line arguments for the Mokulua analyzer.
#[derive(Parser, Debug)]
#[clap(name = "mokulua", version, author, about)]
struct Args {
    /// File containing the words, one per line. Non-letter characters are
    /// stripped and letters are folded to lowercase.
    input: PathBuf,

    /// Optional output file receiving every compound word, one per line.
    output: Option<PathBuf>,

    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,
}

/// Initialize the logging system.
fn init_logging() -> MokuluaResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| MokuluaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> MokuluaResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration; without a --config file this still merges the
    // built-in defaults with MOKULUA_-prefixed environment overrides.
    let config_loader = ConfigLoader::new(args.config.as_deref(), "MOKULUA");
    let cfg = match config_loader.load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    config::init_global_config(cfg.clone());

    // Load and sort the word list
    let load_started = Instant::now();
    let words = match lexicon::load(&args.input, &cfg.lexicon) {
        Ok(words) => words,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    let load_elapsed = load_started.elapsed();
    info!(word_count = words.len(), "word list loaded");

    // Open the optional compound-list sink; a sink that cannot be created
    // downgrades to a run without the list, it does not abort the analysis.
    let mut sink = match &args.output {
        Some(path) => match File::create(path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                warn!("cannot write compound list to {:?}: {}", path, e);
                None
            }
        },
        None => None,
    };

    // Build the trie and classify every word against it
    let scan_started = Instant::now();
    let trie = LanaiTrie::from_words(&words);
    let mut result = report::scan(&words, &trie, sink.as_mut())?;
    result.load_elapsed = load_elapsed;
    result.scan_elapsed = scan_started.elapsed();

    if let Some(mut out) = sink {
        out.flush()?;
    }

    info!(
        compound_count = result.compound_count,
        "classification finished"
    );

    // Print the result
    let stdout = io::stdout();
    report::render(&result, &mut stdout.lock())?;

    Ok(())
}
