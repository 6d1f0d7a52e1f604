//! REST surface for the chat core.

mod dto;
mod error;
mod routes;
mod state;

pub use error::ServerError;

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::session::ChatClient;
use crate::infrastructure::model::ChatModel;
use dto::{
    ErrorResponse, ExchangeDto, HistoryResponse, RestChatRequest, RestChatResponse,
    SummaryResponse, TurnDto,
};
use routes::chat::chat_handler;
use routes::session::{history_handler, summary_handler, transcript_handler};
use state::ServerState;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::chat::chat_handler,
        routes::session::history_handler,
        routes::session::summary_handler,
        routes::session::transcript_handler
    ),
    components(
        schemas(
            RestChatRequest,
            RestChatResponse,
            ErrorResponse,
            HistoryResponse,
            SummaryResponse,
            ExchangeDto,
            TurnDto
        )
    ),
    tags(
        (name = "chat", description = "Forward user text to the model"),
        (name = "sessions", description = "Session history, summaries, and transcript export")
    )
)]
struct ApiDoc;

pub async fn serve<P>(
    client: Arc<ChatClient<P>>,
    addr: SocketAddr,
    title: &str,
) -> Result<(), ServerError>
where
    P: ChatModel + 'static,
{
    let mut api = ApiDoc::openapi();
    api.info.title = title.to_string();
    info!(%addr, "Binding REST server");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let state = Arc::new(ServerState::new(client));
    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", api))
        .route("/chat", post(chat_handler::<P>))
        .route("/sessions/{id}/history", get(history_handler::<P>))
        .route("/sessions/{id}/summary", get(summary_handler::<P>))
        .route("/sessions/{id}/transcript", get(transcript_handler::<P>))
        .layer(cors)
        .with_state(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}
