//! Length-bucketed dictionary index.
//!
//! Built once from the raw candidate list and afterwards only ever shrinks:
//! the engine removes words it has proven non-reducible. A word present here
//! is guaranteed to come from the dictionary; a word absent may have been
//! filtered out at build time or pruned since.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::config::AcceptedRoots;
use crate::word::{char_len, Word};

/// Words of one length. `order` fixes iteration order, `members` is the live set.
#[derive(Debug, Default)]
struct Bucket {
    order: Vec<Word>,
    members: HashSet<Word>,
}

impl Bucket {
    fn from_words(words: Vec<Word>) -> Self {
        let order = words.into_iter().unique().collect_vec();
        let members = order.iter().cloned().collect();
        Self { order, members }
    }

    fn iter(&self) -> impl Iterator<Item = &Word> {
        self.order
            .iter()
            .filter(|word| self.members.contains(word.as_str()))
    }
}

#[derive(Debug)]
pub struct WordIndex {
    buckets: HashMap<usize, Bucket>,
    max_length: usize,
}

impl WordIndex {
    /// Keeps words of at most `max_length` characters that share a letter with `seed`.
    /// Empty strings are dropped.
    pub fn build<I, S>(words: I, max_length: usize, seed: &AcceptedRoots) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut excluded = 0usize;

        let buckets: HashMap<usize, Bucket> = words
            .into_iter()
            .filter_map(|word| {
                let word = Word::new(word).ok()?;
                if word.len() <= max_length && seed.intersects(word.as_str()) {
                    Some(word)
                } else {
                    excluded += 1;
                    None
                }
            })
            .into_group_map_by(Word::len)
            .into_iter()
            .map(|(len, words)| (len, Bucket::from_words(words)))
            .collect();

        let index = Self { buckets, max_length };
        debug!(
            indexed = index.len(),
            excluded,
            buckets = index.buckets.len(),
            max_length,
            "built word index"
        );
        index
    }

    pub fn contains(&self, word: &str) -> bool {
        self.buckets
            .get(&char_len(word))
            .is_some_and(|bucket| bucket.members.contains(word))
    }

    /// Prunes `word` from its bucket. Returns whether it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        let removed = self
            .buckets
            .get_mut(&char_len(word))
            .is_some_and(|bucket| bucket.members.remove(word));
        if removed {
            trace!(word, "pruned");
        }
        removed
    }

    /// Live words of length `len`, in first-insertion order.
    pub fn bucket(&self, len: usize) -> impl Iterator<Item = &Word> {
        self.buckets.get(&len).into_iter().flat_map(Bucket::iter)
    }

    pub fn bucket_len(&self, len: usize) -> usize {
        self.buckets
            .get(&len)
            .map_or(0, |bucket| bucket.members.len())
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(|bucket| bucket.members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}
