//! HTTP request handlers

use super::assets::{get_index_html, serve_static};
use super::sse::sse_stream;
use super::types::{ChatRequest, ChatResponse, ErrorResponse, TranscriptResponse};
use super::AppState;
use crate::runtime::SubmitError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root serves the chat page
        .route("/", get(serve_page))
        // Static assets (embedded or filesystem fallback)
        .route("/assets/*path", get(serve_static))
        // Transcript snapshot
        .route("/api/transcript", get(get_transcript))
        // SSE streaming
        .route("/api/stream", get(stream_transcript))
        // User actions
        .route("/api/chat", post(send_chat))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Page
// ============================================================

async fn serve_page() -> impl IntoResponse {
    match get_index_html() {
        Some(content) => Html(content).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html("<h1>404 - UI not found</h1>".to_string()),
        )
            .into_response(),
    }
}

// ============================================================
// Transcript
// ============================================================

async fn get_transcript(State(state): State<AppState>) -> Json<TranscriptResponse> {
    let snapshot = state.controller.store().snapshot();
    Json(TranscriptResponse {
        messages: snapshot.messages,
        busy: snapshot.busy,
    })
}

async fn stream_transcript(State(state): State<AppState>) -> impl IntoResponse {
    let (snapshot, broadcast_rx) = state.controller.store().snapshot_and_subscribe();
    sse_stream(snapshot, broadcast_rx)
}

// ============================================================
// User Actions
// ============================================================

/// Record the user message now and fetch the reply in the background.
/// Clients learn about the reply through the stream.
async fn send_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let text = req.text.trim();

    let turn = state.controller.begin_turn(text)?;
    let message = turn.user_message().clone();

    let controller = state.controller.clone();
    tokio::spawn(async move {
        if let Err(e) = controller.complete_turn(turn).await {
            tracing::error!(error = %e, "Failed to complete turn");
        }
    });

    Ok(Json(ChatResponse {
        queued: true,
        message,
    }))
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Conflict(String),
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Empty => AppError::BadRequest(err.to_string()),
            SubmitError::Busy | SubmitError::NoPendingTurn => AppError::Conflict(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
