//! API Error Types

use adas::AdasError;
use alerting::AlertError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use data_validator::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the simulator host
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Adas(#[from] AdasError),

    #[error(transparent)]
    Alert(#[from] AlertError),

    #[error("Unknown toggle: {0}")]
    UnknownToggle(String),

    #[error("Configuration error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::UnknownToggle(_)
            | ApiError::Adas(AdasError::InvalidDoor(_))
            | ApiError::Adas(AdasError::InvalidTyre(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
