use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::ConfigError;

pub const DEFAULT_MAX_LENGTH: usize = 9;
pub const DEFAULT_ROOTS: [char; 2] = ['I', 'A'];
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/nikiiv/JavaCodingTestOne/master/scrabble-words.txt";
pub const DEFAULT_HEADER_LINES: usize = 2;

/// The one-letter words a reduction may end on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedRoots {
    letters: Vec<char>,
}

impl AcceptedRoots {
    pub fn new(letters: impl IntoIterator<Item = char>) -> Self {
        Self {
            letters: letters.into_iter().unique().collect_vec(),
        }
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// True iff `word` is exactly one character and that character is a root.
    pub fn contains(&self, word: &str) -> bool {
        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (Some(chr), None) => self.letters.contains(&chr),
            _ => false,
        }
    }

    /// Seed-alphabet prefilter: does `word` share at least one letter with a root.
    pub fn intersects(&self, word: &str) -> bool {
        word.chars().any(|chr| self.letters.contains(&chr))
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for AcceptedRoots {
    fn default() -> Self {
        Self::new(DEFAULT_ROOTS)
    }
}

impl FromStr for AcceptedRoots {
    type Err = std::convert::Infallible;

    /// `"IA"`, `"I,A"` and `"I A"` all parse to the same roots.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.chars().filter(|chr| chr.is_alphabetic())))
    }
}

impl Display for AcceptedRoots {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters.iter().join(","))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    pub max_length: usize,
    pub roots: AcceptedRoots,
}

impl FinderConfig {
    pub fn new(max_length: usize, roots: AcceptedRoots) -> Result<Self, ConfigError> {
        let config = Self { max_length, roots };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_length == 0 {
            return Err(ConfigError::ZeroMaxLength);
        }
        Ok(())
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            roots: AcceptedRoots::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Url(String),
    File(PathBuf),
}

impl FromStr for DictionarySource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self::Url(s.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl Display for DictionarySource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub source: DictionarySource,
    /// Lines skipped at the top of the resource before words start.
    pub header_lines: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            source: DictionarySource::Url(DEFAULT_DICTIONARY_URL.to_string()),
            header_lines: DEFAULT_HEADER_LINES,
        }
    }
}
