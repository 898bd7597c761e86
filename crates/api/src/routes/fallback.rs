//! Handler for requests that match no registered route.

use axum::http::Uri;

use crate::error::ApiError;

pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no route matched");
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
