use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidWordError {
    #[error("word must contain at least one letter")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maximum word length must be at least 1")]
    ZeroMaxLength,
}

/// Failure to obtain the raw word list. Never seen by the index or the engine.
#[derive(Debug, Error)]
pub enum DictionaryLoadError {
    #[error("failed to fetch dictionary from {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("dictionary request to {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read dictionary file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
