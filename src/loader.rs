//! Fetches the raw word list. Nothing here is visible to the index or engine
//! beyond the returned `Vec<String>`.

use std::fs;
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, info};

use crate::config::{DictionarySource, LoaderConfig};
use crate::error::DictionaryLoadError;

pub fn load_dictionary(config: &LoaderConfig) -> Result<Vec<String>, DictionaryLoadError> {
    let text = match &config.source {
        DictionarySource::Url(url) => fetch(url)?,
        DictionarySource::File(path) => read(path)?,
    };

    let words = parse_dictionary(&text, config.header_lines);
    info!(source = %config.source, words = words.len(), "loaded dictionary");
    Ok(words)
}

/// Skips `header_lines` lines, then yields one trimmed word per non-blank line.
pub fn parse_dictionary(text: &str, header_lines: usize) -> Vec<String> {
    text.lines()
        .skip(header_lines)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect_vec()
}

fn fetch(url: &str) -> Result<String, DictionaryLoadError> {
    debug!(url, "fetching dictionary");
    let http_error = |source| DictionaryLoadError::Http {
        url: url.to_string(),
        source,
    };

    let response = reqwest::blocking::get(url).map_err(http_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DictionaryLoadError::Status {
            url: url.to_string(),
            status,
        });
    }
    response.text().map_err(http_error)
}

fn read(path: &Path) -> Result<String, DictionaryLoadError> {
    debug!(path = %path.display(), "reading dictionary");
    fs::read_to_string(path).map_err(|source| DictionaryLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
