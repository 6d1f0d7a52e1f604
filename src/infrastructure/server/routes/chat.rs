use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::super::dto::{ErrorResponse, RestChatRequest, RestChatResponse};
use super::super::state::ServerState;
use crate::application::session::{ChatError, ChatRequest};
use crate::infrastructure::model::ChatModel;

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = RestChatRequest,
    responses(
        (status = 200, description = "Chat exchange completed", body = RestChatResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 502, description = "Model provider could not be reached", body = ErrorResponse)
    )
)]
pub async fn chat_handler<P: ChatModel>(
    State(state): State<Arc<ServerState<P>>>,
    Json(payload): Json<RestChatRequest>,
) -> Result<Json<RestChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        session = payload.session_id.as_deref(),
        "Received /chat request"
    );

    debug!("Forwarding /chat request to model provider");
    let result = state
        .client()
        .chat(ChatRequest {
            prompt: payload.prompt,
            session_id: payload.session_id,
        })
        .await;

    match result {
        Ok(result) => {
            info!(
                session_id = result.session_id.as_str(),
                "Chat request completed successfully"
            );
            Ok(Json(RestChatResponse {
                session_id: result.session_id,
                content: result.content,
            }))
        }
        Err(err @ ChatError::EmptyPrompt) => {
            error!("Rejecting /chat request due to empty prompt");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.user_message(),
                }),
            ))
        }
        Err(ChatError::Model(error)) => {
            error!(%error, "Model provider returned an error");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: error.user_message(),
                }),
            ))
        }
    }
}
