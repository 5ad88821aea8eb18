//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use surfsup_domain::error::SurfsUpError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SurfsUpError`] to an HTTP response with appropriate status code.
pub struct ApiError(SurfsUpError);

impl From<SurfsUpError> for ApiError {
    fn from(err: SurfsUpError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SurfsUpError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SurfsUpError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
