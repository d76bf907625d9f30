//! Filter, configuration, and pipeline behavior

use std::io::Write;

use rutext::config::{Config, LemmatizerBackend};
use rutext::core::{PreprocessError, Result};
use rutext::entity::{ExtractionOptions, ReinsertOptions};
use rutext::pipeline::Preprocessor;
use rutext::text::{
    early_preproc, numbers_to_words, remove_stopwords, replace_emoji, CleanupOptions,
};

#[test]
fn test_filters_compose_in_sequence() {
    let emoji_table = [("😊", "улыбка")];
    let text = "<p>Я видел 3 кота 😊</p>";

    let text = replace_emoji(text, &emoji_table);
    let text = early_preproc(&text, &CleanupOptions::default());
    let text = numbers_to_words(&text);
    let text = remove_stopwords(&text);

    assert_eq!(text, "видел три кота улыбка");
}

#[test]
fn test_cleanup_is_idempotent() {
    let options = CleanupOptions::default();
    let once = early_preproc("ну, <b>что-же</b>... это?!", &options);
    let twice = early_preproc(&once, &options);
    assert_eq!(once, twice);
}

#[test]
fn test_config_from_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        r#"
lemmatizer = "stemmer"
extra_stopwords = ["типа"]

[cleanup]
strip_digits = true

[[emoji_replacements]]
emoji = "😢"
word = "грусть"
"#
    )?;

    let config = Config::from_file(file.path())?;
    assert_eq!(config.lemmatizer, LemmatizerBackend::Stemmer);
    assert!(config.cleanup.strip_digits);
    assert_eq!(config.extra_stopwords, vec!["типа"]);
    assert_eq!(config.emoji_pairs(), vec![("😢", "грусть")]);
    Ok(())
}

#[test]
fn test_config_from_missing_file() {
    let err = Config::from_file("/nonexistent/rutext.toml").unwrap_err();
    assert!(matches!(err, PreprocessError::Io(_)));
}

#[test]
fn test_config_from_malformed_toml() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "lemmatizer = [not toml")?;

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, PreprocessError::Toml(_)));
    assert_eq!(err.category(), "serialization");
    Ok(())
}

#[test]
fn test_invalid_emoji_entry_rejected_on_load() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[[emoji_replacements]]
emoji = ""
word = "слово"
"#
    )?;

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, PreprocessError::Config { .. }));
    Ok(())
}

#[test]
fn test_stemmer_backend_end_to_end() -> Result<()> {
    let config = Config {
        lemmatizer: LemmatizerBackend::Stemmer,
        ..Config::default()
    };
    let pipeline = Preprocessor::new(config)?;
    let out = pipeline.preprocess("Красивые столы")?;
    assert_eq!(out, "красив стол");
    Ok(())
}

#[test]
fn test_configured_gazetteer_extends_ner() -> Result<()> {
    let config = Config {
        extra_person_names: vec!["зухра".to_string()],
        extra_locations: vec!["бугульма".to_string(), "бугульму".to_string()],
        ..Config::default()
    };
    let pipeline = Preprocessor::new(config)?;
    let options = ExtractionOptions {
        delete_names: true,
        delete_addresses: true,
    };

    let (_, record) = pipeline.extract_entities("Зухра поехала в Бугульму", &options)?;
    assert_eq!(record.names, vec!["Зухра"]);
    assert_eq!(record.locations, vec!["Бугульму"]);
    Ok(())
}

#[test]
fn test_pipeline_round_trip_with_digits() -> Result<()> {
    let pipeline = Preprocessor::new(Config::default())?;
    let options = ExtractionOptions {
        delete_names: true,
        delete_addresses: true,
    };

    let out = pipeline.preprocess_with_entities(
        "Анна купила 2 билета в Казань",
        &options,
        &ReinsertOptions::default(),
    )?;
    assert_eq!(out, "купила два билета Анна Казань");
    Ok(())
}

#[test]
fn test_segmenter_rejects_nul_bytes() {
    let pipeline = Preprocessor::new(Config::default()).unwrap();
    let err = pipeline
        .extract_entities("текст\0текст", &ExtractionOptions::default())
        .unwrap_err();
    assert!(matches!(err, PreprocessError::Input { .. }));
}
