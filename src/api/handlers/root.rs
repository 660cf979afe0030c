use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// Greeting endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /
///
/// Returns the service greeting.
pub async fn index() -> impl IntoResponse {
    let response = MessageResponse {
        message: "Hello, Platform Engineering!".to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Fallback for unmatched application routes
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
