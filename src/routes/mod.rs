pub mod matches;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error with an HTTP status, rendered as a JSON body
pub struct AppError(StatusCode, anyhow::Error);

impl AppError {
    pub fn not_found(err: anyhow::Error) -> Self {
        AppError(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable(err: anyhow::Error) -> Self {
        AppError(StatusCode::UNPROCESSABLE_ENTITY, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.1.to_string(),
        });
        (self.0, body).into_response()
    }
}

/// Anything not mapped explicitly is a server-side failure
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError(StatusCode::INTERNAL_SERVER_ERROR, err.into())
    }
}
