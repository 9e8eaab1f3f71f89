use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// Generic server-side failure. The service does not distinguish error
/// causes on the wire; every store failure maps to one 500.
#[derive(Debug)]
pub struct ApiError(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let msg = self.0;
        error!(error = %msg, "request failed");
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

impl From<store::StoreError> for ApiError {
    fn from(e: store::StoreError) -> Self {
        ApiError(e.to_string())
    }
}
