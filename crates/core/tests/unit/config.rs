//! # Configuration Tests
//!
//! Defaults, JSON deserialization, policy name parsing and validation.

use pagesim_core::config::{PolicyKind, SimConfig};
use pagesim_core::SimError;
use std::io::Write;

#[test]
fn test_config_default() {
    let config = SimConfig::default();
    assert_eq!(config.frames, 3);
    assert!(config.pages.is_empty());
    assert_eq!(config.policies, PolicyKind::ALL.to_vec());
}

#[test]
fn test_missing_fields_take_defaults() {
    let config = SimConfig::from_json(r#"{ "pages": [1, 2, 3] }"#).unwrap();
    assert_eq!(config.frames, 3);
    assert_eq!(config.pages, vec![1, 2, 3]);
    assert_eq!(config.policies.len(), 4);
}

#[test]
fn test_policy_names_deserialize_in_any_supported_spelling() {
    let json = r#"{ "policies": ["FIFO", "Lru", "opt", "Optimal", "CLOCK"] }"#;
    let config = SimConfig::from_json(json).unwrap();
    assert_eq!(
        config.policies,
        vec![
            PolicyKind::Fifo,
            PolicyKind::Lru,
            PolicyKind::Opt,
            PolicyKind::Opt,
            PolicyKind::Clock
        ]
    );
}

#[test]
fn test_empty_policy_list_is_rejected() {
    let err = SimConfig::from_json(r#"{ "policies": [] }"#).unwrap_err();
    assert!(matches!(err, SimError::EmptySelection));
}

#[test]
fn test_unknown_policy_is_a_config_error() {
    let err = SimConfig::from_json(r#"{ "policies": ["random"] }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration"));
}

#[test]
fn test_non_integer_pages_are_rejected() {
    let err = SimConfig::from_json(r#"{ "pages": [1, "two"] }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn test_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "frames": 4, "pages": [1, 2], "policies": ["clock"] }}"#).unwrap();

    let config = SimConfig::from_path(file.path()).unwrap();
    assert_eq!(config.frames, 4);
    assert_eq!(config.policies, vec![PolicyKind::Clock]);
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SimConfig::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn test_unknown_policy_name_message() {
    let err = "lfu".parse::<PolicyKind>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown replacement policy `lfu` (expected one of: fifo, lru, opt, clock)"
    );
}
