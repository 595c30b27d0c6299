//! Namecraft Gateway: one generate endpoint in front of the completion backend.
//! The backend is built once in `main` and handed to the router as state.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use namecraft_core::{
    CompletionBackend, Envelope, ErrorResponse, GenerateRequest, Generated, MeaningResponse,
    NameService, RequestError, SuggestionsResponse, GENERATE_PATH,
};
use tracing::Instrument;

#[derive(Clone)]
pub struct AppState {
    service: NameService,
}

impl AppState {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            service: NameService::new(backend),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(GENERATE_PATH, post(generate_handler))
        .with_state(Arc::new(state))
        .layer(axum::middleware::from_fn(log_traffic))
}

async fn log_traffic(
    peer: Option<ConnectInfo<SocketAddr>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    match peer {
        Some(ConnectInfo(addr)) => tracing::info!(%addr, %method, %path, status = %response.status(), "request"),
        None => tracing::info!(%method, %path, status = %response.status(), "request"),
    }
    response
}

async fn health() -> &'static str {
    "OK"
}

/// Error answers. The 500 body never carries upstream detail.
#[derive(Debug)]
pub enum ApiError {
    BadBody,
    InvalidAction,
    InvalidParams,
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadBody => (StatusCode::BAD_REQUEST, "Invalid request body"),
            ApiError::InvalidAction => (StatusCode::BAD_REQUEST, "Invalid action"),
            ApiError::InvalidParams => (StatusCode::BAD_REQUEST, "Invalid params"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };
        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<RequestError> for ApiError {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::UnknownAction(_) => ApiError::InvalidAction,
            RequestError::InvalidParams { .. } => ApiError::InvalidParams,
        }
    }
}

/// POST /api/generate: `{action, params}` → `{meaning}` | `{names}`.
async fn generate_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Envelope>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(envelope) = body.map_err(|e| {
        tracing::warn!(error = %e, "rejected request body");
        ApiError::BadBody
    })?;
    let request = GenerateRequest::try_from(envelope).map_err(|e| {
        tracing::warn!(error = %e, "rejected generate request");
        ApiError::from(e)
    })?;

    let span = tracing::info_span!(
        "generate",
        request_id = %uuid::Uuid::new_v4(),
        action = request.action()
    );
    let generated = state
        .service
        .dispatch(&request)
        .instrument(span)
        .await
        .map_err(|e| {
            tracing::error!(action = request.action(), error = %e, "generation failed");
            ApiError::Internal
        })?;

    Ok(match generated {
        Generated::Meaning(meaning) => Json(MeaningResponse { meaning }).into_response(),
        Generated::Names(names) => {
            tracing::info!(count = names.len(), "suggestions generated");
            Json(SuggestionsResponse { names }).into_response()
        }
    })
}
