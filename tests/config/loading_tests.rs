//! Configuration loading tests

use std::io::Write;
use tempfile::NamedTempFile;

use streamly_chat_client::config::AppConfig;
use streamly_chat_client::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_API_PATH, DEFAULT_GEMINI_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_TITLE,
};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_full_config_parses() {
    let file = write_config(
        r#"
title = "My Assistant"
theme = "magenta"
model = "gemini-1.5-flash"
endpoint = "https://example.invalid"
api_path = "v1/models"
api_key_env = "MY_KEY"
system_prompt = "Be brief."
"#,
    );

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.title, "My Assistant");
    assert_eq!(config.theme.as_deref(), Some("magenta"));
    assert_eq!(config.model, "gemini-1.5-flash");
    assert_eq!(config.endpoint, "https://example.invalid");
    assert_eq!(config.api_path, "v1/models");
    assert_eq!(config.api_key_env, "MY_KEY");
    assert_eq!(config.system_prompt.as_deref(), Some("Be brief."));
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let file = write_config("title = \"Only a title\"\n");

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.title, "Only a title");
    assert!(config.theme.is_none());
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.endpoint, DEFAULT_GEMINI_ENDPOINT);
    assert_eq!(config.api_path, DEFAULT_GEMINI_API_PATH);
    assert_eq!(config.api_key_env, DEFAULT_API_KEY_ENV);
    assert!(config.system_prompt.is_none());
}

#[test]
fn test_empty_file_yields_defaults() {
    let file = write_config("");

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.title, DEFAULT_TITLE);
    assert_eq!(config.model, DEFAULT_MODEL);
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let result = AppConfig::load(Some(std::path::Path::new(
        "/nonexistent/streamly/client.toml",
    )));
    assert!(result.is_err());
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let file = write_config("title = [not toml");
    let result = AppConfig::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.title, DEFAULT_TITLE);
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.api_key_env, DEFAULT_API_KEY_ENV);
}
