use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::{debug, info};

use super::super::dto::{ErrorResponse, HistoryResponse, SummaryResponse, TurnDto};
use super::super::state::ServerState;
use crate::constants::TRANSCRIPT_FILENAME;
use crate::infrastructure::model::ChatModel;

#[utoipa::path(
    get,
    path = "/sessions/{id}/history",
    tag = "sessions",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "Ordered turn history for the session", body = HistoryResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse)
    )
)]
pub async fn history_handler<P: ChatModel>(
    State(state): State<Arc<ServerState<P>>>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, (StatusCode, Json<ErrorResponse>)> {
    debug!(session_id = id.as_str(), "Serving /history request");
    let snapshot = state
        .client()
        .snapshot(&id)
        .await
        .ok_or_else(|| unknown_session(&id))?;

    Ok(Json(HistoryResponse {
        session_id: snapshot.session_id,
        started_at: snapshot.started_at,
        turns: snapshot.conversation.turns().iter().map(TurnDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/sessions/{id}/summary",
    tag = "sessions",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "Excerpted prompt/reply pairs", body = SummaryResponse)
    )
)]
pub async fn summary_handler<P: ChatModel>(
    State(state): State<Arc<ServerState<P>>>,
    Path(id): Path<String>,
) -> Json<SummaryResponse> {
    let exchanges = state.client().excerpts(&id).await;
    debug!(
        session_id = id.as_str(),
        exchange_count = exchanges.len(),
        "Serving /summary request"
    );
    Json(SummaryResponse {
        session_id: id,
        exchanges: exchanges.into_iter().map(Into::into).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/sessions/{id}/transcript",
    tag = "sessions",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "Transcript download", content_type = "text/plain"),
        (status = 404, description = "No conversation to export yet", body = ErrorResponse)
    )
)]
pub async fn transcript_handler<P: ChatModel>(
    State(state): State<Arc<ServerState<P>>>,
    Path(id): Path<String>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    // The export is only offered for a non-empty conversation.
    let Some(transcript) = state.client().transcript(&id).await else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "no conversation to export yet".to_string(),
            }),
        ));
    };

    info!(session_id = id.as_str(), "Serving transcript download");
    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{TRANSCRIPT_FILENAME}\""),
        ),
    ];
    Ok((headers, transcript).into_response())
}

fn unknown_session(id: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("unknown session '{id}'"),
        }),
    )
}
