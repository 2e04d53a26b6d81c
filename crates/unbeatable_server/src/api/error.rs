//! Mapping of errors onto HTTP responses.

use crate::error::GameError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::warn;

/// Error returned by a handler.
#[derive(Debug, derive_more::Display)]
pub enum ApiError {
    /// Rejected by the game rules.
    #[display("{}", _0)]
    Game(GameError),

    /// Body missing, malformed, or of the wrong shape.
    #[display("{}", _0)]
    BadRequest(String),
}

impl std::error::Error for ApiError {}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError::Game(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::Game(GameError::InvalidMove(_)) | ApiError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, "Invalid move")
            }
            ApiError::Game(GameError::GameOver) => {
                (StatusCode::BAD_REQUEST, "Game is already over")
            }
            ApiError::Game(GameError::Search(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Engine failure")
            }
        };
        warn!(%status, detail = %self, "Request failed");

        (status, Json(json!({ "error": error, "detail": self.to_string() }))).into_response()
    }
}
