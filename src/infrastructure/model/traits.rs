//! Model traits

use async_trait::async_trait;

use super::types::{ModelError, ModelRequest, ModelResponse};

/// Trait for remote chat model implementations
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Provider ID, used in logs and error messages
    fn id(&self) -> &str;

    /// Send the prior turn history plus the new user turn, get a reply
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}
