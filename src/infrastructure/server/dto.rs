use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::transcript::ExchangeSummary;
use crate::domain::types::Turn;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RestChatRequest {
    pub prompt: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestChatResponse {
    pub session_id: String,
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TurnDto {
    /// "user" or "assistant"
    pub role: String,
    pub text: String,
}

impl From<&Turn> for TurnDto {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role.as_str().to_string(),
            text: turn.text.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub turns: Vec<TurnDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExchangeDto {
    pub prompt: String,
    pub reply: Option<String>,
}

impl From<ExchangeSummary> for ExchangeDto {
    fn from(summary: ExchangeSummary) -> Self {
        Self {
            prompt: summary.prompt,
            reply: summary.reply,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub session_id: String,
    pub exchanges: Vec<ExchangeDto>,
}
