//! Reducibility search.
//!
//! A word is reducible when deleting one letter at a time, every intermediate
//! being an indexed word, ends on an accepted root. The search tries deletion
//! positions left to right and stops at the first success. Words below the
//! index's maximum length that fail are pruned from the index, so later
//! searches reject them with a single lookup.

use itertools::Itertools;
use tracing::debug;

use crate::config::{AcceptedRoots, FinderConfig};
use crate::error::InvalidWordError;
use crate::index::WordIndex;
use crate::word::{char_len, deletions, Word};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive evaluations, top-level queries included.
    pub calls: u64,
    pub pruned: u64,
}

pub struct ReducibilityEngine {
    index: WordIndex,
    roots: AcceptedRoots,
    stats: SearchStats,
}

impl ReducibilityEngine {
    pub fn new(index: WordIndex, roots: AcceptedRoots) -> Self {
        Self {
            index,
            roots,
            stats: SearchStats::default(),
        }
    }

    pub fn from_dictionary<I, S>(dictionary: I, config: &FinderConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index = WordIndex::build(dictionary, config.max_length, &config.roots);
        Self::new(index, config.roots.clone())
    }

    pub fn is_reducible(&mut self, word: &str) -> Result<bool, InvalidWordError> {
        if word.is_empty() {
            return Err(InvalidWordError::Empty);
        }
        Ok(self.search(word, None))
    }

    /// The first derivation found for `word`, from `word` itself down to its root.
    pub fn reduction_chain(&mut self, word: &str) -> Result<Option<Vec<Word>>, InvalidWordError> {
        if word.is_empty() {
            return Err(InvalidWordError::Empty);
        }

        let mut path = Vec::new();
        if !self.search(word, Some(&mut path)) {
            return Ok(None);
        }
        let chain = path.into_iter().map(Word::new).try_collect()?;
        Ok(Some(chain))
    }

    /// Classifies every indexed word of the maximum length, keeping bucket order.
    pub fn reducible_words(&mut self) -> Vec<Word> {
        let candidates = self.index.bucket(self.index.max_length()).cloned().collect_vec();
        let reducible = candidates
            .into_iter()
            .filter(|word| self.search(word.as_str(), None))
            .collect_vec();

        debug!(
            reducible = reducible.len(),
            calls = self.stats.calls,
            pruned = self.stats.pruned,
            "classified maximal-length words"
        );
        reducible
    }

    fn search(&mut self, word: &str, mut path: Option<&mut Vec<String>>) -> bool {
        self.stats.calls += 1;

        let len = char_len(word);
        if len == 1 {
            let accepted = self.roots.contains(word);
            if accepted {
                if let Some(path) = path {
                    path.push(word.to_string());
                }
            }
            return accepted;
        }

        if !self.index.contains(word) {
            return false;
        }

        if let Some(path) = path.as_deref_mut() {
            path.push(word.to_string());
        }

        for sub_word in deletions(word) {
            if self.search(&sub_word, path.as_deref_mut()) {
                return true;
            }
        }

        if let Some(path) = path {
            path.pop();
        }

        // The maximal length is only ever queried once per word.
        if len < self.index.max_length() && self.index.remove(word) {
            self.stats.pruned += 1;
        }
        false
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn into_index(self) -> WordIndex {
        self.index
    }
}

/// Builds an index over `dictionary` and returns its reducible words of `config.max_length`.
pub fn find_reducible_words<I, S>(dictionary: I, config: &FinderConfig) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ReducibilityEngine::from_dictionary(dictionary, config).reducible_words()
}
