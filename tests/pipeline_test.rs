use std::io::Write;
use std::time::Duration;

use wordfinder::{
    find_reducible_words, load_dictionary, AcceptedRoots, DictionarySource, FinderConfig,
    LoaderConfig, ReducibilityEngine, Report,
};

const WORDS: &str = "\
Scrabble word list
(two header lines)
A
I
AT
IT
TI
PI
PIT
SIT
SPIT
SPITE
STAR
STARE
BOX
BOXES
TEASE
";

fn dictionary_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(WORDS.as_bytes()).unwrap();
    file
}

#[test]
fn file_dictionary_to_report() {
    let file = dictionary_file();
    let loader = LoaderConfig {
        source: DictionarySource::File(file.path().to_path_buf()),
        header_lines: 2,
    };
    let dictionary = load_dictionary(&loader).unwrap();
    assert_eq!(dictionary.len(), 15);

    let config = FinderConfig::new(5, AcceptedRoots::default()).unwrap();
    let reducible = find_reducible_words(dictionary.iter().cloned(), &config);

    // SPITE -> SPIT -> PIT -> IT -> I. STARE has no four-letter step besides STAR,
    // which dead-ends, and TEASE has no four-letter step at all.
    let names: Vec<&str> = reducible.iter().map(|word| word.as_str()).collect();
    assert_eq!(names, vec!["SPITE"]);

    let report = Report {
        dictionary_size: dictionary.len(),
        elapsed: Duration::from_millis(1),
        reducible,
        known_word: Some("SPITE".to_string()),
        chains: Vec::new(),
    };
    assert!(report
        .to_string()
        .contains("Known valid word 'SPITE' exists in result: true"));
}

#[test]
fn chains_after_batch_classification() {
    let file = dictionary_file();
    let loader = LoaderConfig {
        source: DictionarySource::File(file.path().to_path_buf()),
        header_lines: 2,
    };
    let dictionary = load_dictionary(&loader).unwrap();

    let config = FinderConfig::new(4, AcceptedRoots::default()).unwrap();
    let mut engine = ReducibilityEngine::from_dictionary(dictionary, &config);
    let reducible = engine.reducible_words();

    let names: Vec<&str> = reducible.iter().map(|word| word.as_str()).collect();
    assert_eq!(names, vec!["SPIT"]);

    let chain = engine.reduction_chain("SPIT").unwrap().unwrap();
    let chain: Vec<&str> = chain.iter().map(|word| word.as_str()).collect();
    assert_eq!(chain, vec!["SPIT", "PIT", "IT", "I"]);

    // STAR is maximal length here, so its failure leaves it indexed.
    assert!(engine.index().contains("STAR"));
    assert_eq!(engine.reduction_chain("STAR"), Ok(None));
}
