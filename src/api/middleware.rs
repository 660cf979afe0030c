// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Request counting middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::AppState;

/// Increments the request counter for every inbound request.
///
/// Runs before dispatch, so matched routes and 404s count alike.
pub async fn count_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state.metrics.record_request();
    next.run(request).await
}
