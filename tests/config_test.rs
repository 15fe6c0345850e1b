//! Tests for configuration loading.

use gridmark::AppConfig;
use gridmark_engine::{Color, PlayerColors};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(*config.default_size(), 3);
    assert_eq!(config.colors(), PlayerColors::new(Color::Green, Color::Yellow));
    assert!(*config.console().clear_screen());
    assert_eq!(config.log().file(), "gridmark.log");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
default_size = 5
player_colors = ["Red", "blue"]

[console]
colorize = false
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.board_size().unwrap().get(), 5);
    assert_eq!(config.colors(), PlayerColors::new(Color::Red, Color::Blue));
    assert!(!*config.console().colorize());
    assert!(*config.console().highlight_last_move());
    assert_eq!(config.log().filter(), "info");
}

#[test]
fn test_invalid_size_rejected() {
    let err = AppConfig::from_toml("default_size = 11").unwrap_err();
    assert!(err.message.contains("default_size"));
    assert!(AppConfig::from_toml("default_size = 1").is_err());
}

#[test]
fn test_identical_colors_rejected() {
    let err = AppConfig::from_toml(r#"player_colors = ["black", "black"]"#).unwrap_err();
    assert!(err.message.contains("must differ"));
}

#[test]
fn test_unknown_color_rejected() {
    assert!(AppConfig::from_toml(r#"player_colors = ["purple", "black"]"#).is_err());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_unreadable_toml_is_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "default_size = ").unwrap();
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
