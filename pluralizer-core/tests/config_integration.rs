//! Configuration and dictionary loading through the public API

use pluralizer_core::{Config, Error, IrregularTable, Lexicon, Pluralizer};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_file_with_relative_dictionaries() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("nouns.txt"),
        "# campaign extras\nmithril mithril\nhalfling halflings\n",
    )
    .unwrap();
    fs::write(dir.path().join("verbs.txt"), "smites smite\n").unwrap();
    fs::write(
        dir.path().join("pluralizer.toml"),
        r#"
[lexicon]
builtin = true
nouns = "nouns.txt"
verbs = "verbs.txt"

[limits]
max_phrase_len = 64
"#,
    )
    .unwrap();

    let engine = Pluralizer::from_config_file(dir.path().join("pluralizer.toml")).unwrap();

    assert_eq!(engine.noun("mithril", 3), "mithril");
    assert_eq!(engine.noun("Halfling", 3), "halflings");
    assert_eq!(engine.noun("person", 3), "people");
    assert_eq!(engine.verb("smites"), "smite");
    assert_eq!(engine.limits().max_phrase_len, 64);
    assert_eq!(engine.limits().option_capacity, 256);
}

#[test]
fn test_missing_dictionary_degrades_to_rules() {
    let config = Config::builder()
        .builtin(false)
        .nouns("/nonexistent/nouns.txt")
        .build()
        .unwrap();

    let engine = Pluralizer::with_config(&config).unwrap();

    assert!(engine.lexicon().nouns().is_empty());
    assert_eq!(engine.noun("sword", 2), "swords");
    assert_eq!(engine.noun("person", 2), "persons");
}

#[test]
fn test_invalid_limits_are_rejected() {
    let result = Config::from_toml_str("[limits]\noption_capacity = 0\n");
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_missing_config_file_reports_path() {
    let err = Pluralizer::from_config_file("/nonexistent/pluralizer.toml").unwrap_err();
    match err {
        Error::Io { path, .. } => assert!(path.ends_with("pluralizer.toml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_strict_parse_reports_line() {
    let err = IrregularTable::parse_strict("ox oxen\nbroken\n").unwrap_err();
    match err {
        Error::MalformedEntry { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_lexicon_can_be_extended_before_sharing() {
    let mut lexicon = Lexicon::builtin();
    lexicon.nouns_mut().insert("Cyclops", "cyclopes");
    lexicon.verbs_mut().insert("Dies", "die");

    let engine = Pluralizer::with_lexicon(lexicon);
    assert_eq!(engine.noun("cyclops", 2), "cyclopes");
    assert_eq!(engine.verb("dies"), "die");
}
