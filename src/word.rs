use std::borrow::Borrow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::InvalidWordError;

#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Word {
    letters: String,
}

impl Word {
    pub fn new(letters: impl Into<String>) -> Result<Self, InvalidWordError> {
        let letters = letters.into();
        if letters.is_empty() {
            return Err(InvalidWordError::Empty);
        }
        Ok(Self { letters })
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// Number of characters, which is the length a word is bucketed under.
    pub fn len(&self) -> usize {
        char_len(&self.letters)
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Every single-character deletion of this word, first position first.
    pub fn deletions(&self) -> impl Iterator<Item = String> + '_ {
        deletions(&self.letters)
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn deletions(s: &str) -> impl Iterator<Item = String> + '_ {
    s.char_indices().map(move |(at, chr)| {
        let mut sub_word = String::with_capacity(s.len() - chr.len_utf8());
        sub_word.push_str(&s[..at]);
        sub_word.push_str(&s[at + chr.len_utf8()..]);
        sub_word
    })
}

impl FromStr for Word {
    type Err = InvalidWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.letters == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.letters == *other
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.letters, f)
    }
}
