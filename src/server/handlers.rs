//! HTTP route handlers

use crate::error::WhoisProxyError;
use crate::internal_error;
use crate::server::AppState;
use crate::types::WhoisResponse;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Error returned from a handler, rendered as `{"error": <message>}`
#[derive(Debug)]
pub struct ApiError(WhoisProxyError);

impl From<WhoisProxyError> for ApiError {
    fn from(err: WhoisProxyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(ErrorBody { error: self.0.public_message() })).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /whois/:domain
///
/// Answers 200 with normalized registration data whenever the input is a
/// domain, including when every provider is down and fallback data is used.
/// The lookup runs in its own task so a defect surfaces as a 500 instead of
/// dropping the connection.
#[instrument(skip(state))]
pub async fn whois_handler(
    State(state): State<Arc<AppState>>,
    Path(domain): Path<String>,
) -> ApiResult<WhoisResponse> {
    let task = tokio::spawn(async move { state.service.lookup(&domain).await });

    let result = task.await.map_err(|e| {
        error!(error = %e, "Lookup task failed");
        internal_error!("lookup task failed: {}", e)
    })?;

    match result {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            debug!(error = %e, "Lookup rejected");
            Err(e.into())
        }
    }
}

/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "whois-proxy",
    })
}
