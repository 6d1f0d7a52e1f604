//! Application constants
//!
//! Single source of truth for paths and other constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/client.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Default Gemini endpoint
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini API path (fallback when not specified in config)
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Environment variable holding the Gemini API key by default
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Default page/window title
pub const DEFAULT_TITLE: &str = "Streamly Assistant";

/// Filename offered for the transcript download
pub const TRANSCRIPT_FILENAME: &str = "chat_history.txt";
