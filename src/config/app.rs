use crate::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_API_PATH, DEFAULT_GEMINI_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_TITLE,
};

/// Validated application configuration.
///
/// Everything here has a default, so a missing config file still yields a
/// working setup. `title` and `theme` are cosmetic: the three upstream
/// presentation variants differed only in those, so they live in config
/// instead of in code.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    /// Optional accent color name for the TUI (e.g. "cyan", "magenta").
    pub theme: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub api_path: String,
    /// Name of the environment variable the API key is read from.
    pub api_key_env: String,
    pub system_prompt: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            api_path: DEFAULT_GEMINI_API_PATH.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            system_prompt: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path, falling back to defaults when
    /// no explicit path was given and the default file does not exist.
    pub fn load(path: Option<&std::path::Path>) -> Result<Self, super::ConfigError> {
        super::loader::load_config(path)
    }
}
