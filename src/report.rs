use std::fmt::{Display, Formatter};
use std::time::Duration;

use itertools::Itertools;

use crate::word::Word;

pub struct Report {
    pub dictionary_size: usize,
    pub elapsed: Duration,
    pub reducible: Vec<Word>,
    /// Smoke-test word whose presence in the result is reported.
    pub known_word: Option<String>,
    /// Derivations to list after the summary, one per reducible word.
    pub chains: Vec<Vec<Word>>,
}

impl Report {
    pub fn contains_known_word(&self) -> Option<bool> {
        self.known_word
            .as_deref()
            .map(|known| self.reducible.iter().any(|word| word == known))
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of all words in dictionary: {}", self.dictionary_size)?;
        writeln!(f, "Execution time: {} milliseconds", self.elapsed.as_millis())?;
        writeln!(f, "Valid words count: {}", self.reducible.len())?;

        if let (Some(known), Some(found)) = (&self.known_word, self.contains_known_word()) {
            writeln!(f, "Known valid word '{known}' exists in result: {found}")?;
        }

        for chain in &self.chains {
            writeln!(f, "{}", chain.iter().join(" -> "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(raw: &[&str]) -> Vec<Word> {
        raw.iter().map(|word| Word::new(*word).unwrap()).collect_vec()
    }

    #[test]
    fn renders_summary() {
        let report = Report {
            dictionary_size: 279_496,
            elapsed: Duration::from_millis(42),
            reducible: words(&["STARTLING", "SPLITTING"]),
            known_word: Some("STARTLING".to_string()),
            chains: Vec::new(),
        };

        assert_eq!(
            report.to_string(),
            "Number of all words in dictionary: 279496\n\
             Execution time: 42 milliseconds\n\
             Valid words count: 2\n\
             Known valid word 'STARTLING' exists in result: true\n"
        );
    }

    #[test]
    fn reports_missing_known_word() {
        let report = Report {
            dictionary_size: 3,
            elapsed: Duration::ZERO,
            reducible: Vec::new(),
            known_word: Some("STARTLING".to_string()),
            chains: Vec::new(),
        };

        assert_eq!(report.contains_known_word(), Some(false));
        assert!(report
            .to_string()
            .ends_with("Known valid word 'STARTLING' exists in result: false\n"));
    }

    #[test]
    fn lists_chains() {
        let report = Report {
            dictionary_size: 4,
            elapsed: Duration::ZERO,
            reducible: words(&["CATS"]),
            known_word: None,
            chains: vec![words(&["CATS", "CAT", "AT", "A"])],
        };

        let rendered = report.to_string();
        assert!(!rendered.contains("Known valid word"));
        assert!(rendered.ends_with("Valid words count: 1\nCATS -> CAT -> AT -> A\n"));
    }
}
