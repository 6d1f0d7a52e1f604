use dotenvy::{dotenv, from_filename};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

use super::AppConfig;
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub title: Option<String>,
    pub theme: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub api_path: Option<String>,
    pub api_key_env: Option<String>,
    pub system_prompt: Option<String>,
}

/// Ensures environment variables are loaded from config/.env (or a
/// top-level .env), once per process.
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
        let _ = dotenv();
    });
}

/// Load and validate configuration from a file path.
///
/// An explicitly given path must exist; the default path is optional and
/// falls back to built-in defaults when missing.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)
            } else {
                debug!("No configuration file found, using defaults");
                Ok(AppConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(build(parsed))
}

fn build(parsed: RawConfig) -> AppConfig {
    let defaults = AppConfig::default();
    AppConfig {
        title: parsed.title.unwrap_or(defaults.title),
        theme: parsed.theme,
        model: parsed.model.unwrap_or(defaults.model),
        endpoint: parsed.endpoint.unwrap_or(defaults.endpoint),
        api_path: parsed.api_path.unwrap_or(defaults.api_path),
        api_key_env: parsed.api_key_env.unwrap_or(defaults.api_key_env),
        system_prompt: parsed.system_prompt,
    }
}
