use super::*;
use crate::chunker::ChunkingError;

#[test]
fn test_default_settings_are_valid() {
    let settings = Settings::default();
    assert!(settings.validate().is_ok());
    assert_eq!(settings.chunking.max_chunk_size, 200);
    assert_eq!(settings.chunking.overlap, 20);
    assert_eq!(settings.chunking.min_chunk_length, 10);
    assert_eq!(settings.ingest.batch_size, 100);
}

#[test]
fn test_zero_max_chunk_size_rejected() {
    let config = ChunkingConfig::new(0, 0);
    assert!(matches!(
        config.validate(),
        Err(ChunkingError::InvalidMaxChunkSize)
    ));
}

#[test]
fn test_overlap_must_be_smaller_than_budget() {
    let config = ChunkingConfig::new(50, 50);
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ChunkingError::OverlapTooLarge {
            overlap: 50,
            max_chunk_size: 50
        }
    ));
    assert!(err.to_string().contains("overlap (50)"));

    assert!(ChunkingConfig::new(50, 49).validate().is_ok());
}

#[test]
fn test_zero_min_chunk_length_rejected() {
    let config = ChunkingConfig::new(100, 10).min_chunk_length(0);
    assert!(matches!(
        config.validate(),
        Err(ChunkingError::InvalidMinChunkLength)
    ));
}

#[test]
fn test_empty_terminators_rejected() {
    let empty: Vec<String> = Vec::new();
    let config = ChunkingConfig::default().terminators(TerminatorSet::new(empty));
    assert!(matches!(
        config.validate(),
        Err(ChunkingError::EmptyTerminatorSet)
    ));
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let settings = Settings::from_toml(
        r#"
        [chunking]
        max_chunk_size = 500
        overlap_boundary = "word"
        "#,
    )
    .unwrap();

    assert_eq!(settings.chunking.max_chunk_size, 500);
    assert_eq!(settings.chunking.overlap, DEFAULT_OVERLAP);
    assert_eq!(settings.chunking.overlap_boundary, OverlapBoundary::Word);
    assert_eq!(settings.chunking.terminators, TerminatorSet::default());
    assert_eq!(settings.ingest, IngestConfig::default());
}

#[test]
fn test_custom_terminators_from_toml() {
    let settings = Settings::from_toml(
        r#"
        [chunking]
        terminators = [".", "。"]
        "#,
    )
    .unwrap();

    let terms: Vec<&str> = settings.chunking.terminators.iter().collect();
    assert_eq!(terms, vec![".", "。"]);
}

#[test]
fn test_invalid_toml_values_rejected_on_validate() {
    let settings = Settings::from_toml(
        r#"
        [chunking]
        max_chunk_size = 10
        overlap = 10
        "#,
    )
    .unwrap();
    let err = settings.validate().unwrap_err();
    assert!(format!("{:#}", err).contains("must be smaller than max_chunk_size"));

    let settings = Settings::from_toml("[ingest]\nbatch_size = 0\n").unwrap();
    assert!(settings.validate().unwrap_err().to_string().contains("batch_size"));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    assert!(Settings::from_toml("[chunking]\nmax_chunk_size = \"big\"\n").is_err());
}

#[test]
fn test_load_defers_validation() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[chunking]\nmax_chunk_size = 30\noverlap = 40\n").unwrap();

    let mut settings = Settings::load(&path).unwrap();
    assert!(settings.validate().is_err());

    settings.chunking.max_chunk_size = 500;
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_toml_roundtrip() {
    let mut settings = Settings::default();
    settings.chunking.max_chunk_size = 321;
    settings.ingest.extensions.push("text".to_string());

    let rendered = settings.to_toml().unwrap();
    assert!(rendered.contains("max_chunk_size = 321"));

    let parsed = Settings::from_toml(&rendered).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_extension_matching_ignores_case() {
    let ingest = IngestConfig::default();
    assert!(ingest.accepts_extension("TXT"));
    assert!(ingest.accepts_extension("md"));
    assert!(!ingest.accepts_extension("rs"));
}

#[test]
fn test_load_missing_file_reports_path() {
    let err = Settings::load(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}
