//! Remote model boundary: trait, wire types, and the Gemini client.

pub mod adapter;
pub mod gemini;
pub mod traits;
pub mod types;

pub use adapter::translate_role;
pub use gemini::{GeminiClient, resolve_api_key};
pub use traits::ChatModel;
pub use types::{ModelError, ModelRequest, ModelResponse};
