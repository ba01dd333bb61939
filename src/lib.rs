//! Finds the words of a dictionary that can be reduced, one deleted letter at
//! a time and through dictionary words only, down to an accepted one-letter word.

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod loader;
pub mod report;
pub mod word;

pub use config::{AcceptedRoots, DictionarySource, FinderConfig, LoaderConfig};
pub use engine::{find_reducible_words, ReducibilityEngine, SearchStats};
pub use error::{ConfigError, DictionaryLoadError, InvalidWordError};
pub use index::WordIndex;
pub use loader::{load_dictionary, parse_dictionary};
pub use report::Report;
pub use word::Word;
