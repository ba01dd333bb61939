use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use wordfinder::config::{DEFAULT_DICTIONARY_URL, DEFAULT_HEADER_LINES, DEFAULT_MAX_LENGTH};
use wordfinder::{
    load_dictionary, AcceptedRoots, DictionarySource, FinderConfig, LoaderConfig,
    ReducibilityEngine, Report, Word,
};

/// Lists the dictionary words that reduce letter by letter to a one-letter word.
#[derive(Parser)]
#[command(name = "wordfinder")]
struct Cli {
    /// Dictionary URL or local file path
    #[arg(long, env = "WORDFINDER_SOURCE", default_value = DEFAULT_DICTIONARY_URL)]
    source: DictionarySource,

    /// Lines to skip at the top of the dictionary
    #[arg(long, default_value_t = DEFAULT_HEADER_LINES)]
    header_lines: usize,

    /// Length of the words to classify; longer words are never indexed
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Accepted one-letter words, e.g. "IA" or "I,A"
    #[arg(long, default_value = "IA")]
    roots: AcceptedRoots,

    /// Word whose presence in the result is reported
    #[arg(long, default_value = "STARTLING")]
    known_word: String,

    /// Print the derivation of every reducible word
    #[arg(long)]
    chains: bool,

    /// Log search statistics
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let finder_config =
        FinderConfig::new(cli.max_length, cli.roots).context("invalid finder configuration")?;
    if finder_config.roots.is_empty() {
        warn!("no accepted roots given, no word can be reducible");
    }
    let loader_config = LoaderConfig {
        source: cli.source,
        header_lines: cli.header_lines,
    };

    let dictionary = load_dictionary(&loader_config)
        .with_context(|| format!("error loading words from {}", loader_config.source))?;
    let dictionary_size = dictionary.len();

    let start = Instant::now();
    let mut engine = ReducibilityEngine::from_dictionary(dictionary, &finder_config);
    let reducible = engine.reducible_words();
    let elapsed = start.elapsed();
    info!(?elapsed, reducible = reducible.len(), "search finished");
    debug!(stats = ?engine.stats(), "search statistics");

    let chains: Vec<Vec<Word>> = if cli.chains {
        reducible
            .iter()
            .map(|word| engine.reduction_chain(word.as_str()))
            .filter_map_ok(|chain| chain)
            .try_collect()?
    } else {
        Vec::new()
    };

    let report = Report {
        dictionary_size,
        elapsed,
        reducible,
        known_word: Some(cli.known_word),
        chains,
    };
    print!("{report}");

    Ok(())
}
