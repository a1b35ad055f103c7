//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homewatch_domain::error::{HomewatchError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HomewatchError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HomewatchError);

impl From<HomewatchError> for ApiError {
    fn from(err: HomewatchError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HomewatchError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HomewatchError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HomewatchError::Io(err) => {
                tracing::error!(error = %err, "io error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
