//! # Centralized Error Handling
//!
//! Every failure on the request path becomes an [`AppError`] and is turned
//! into a `500` JSON response; the process keeps serving. Broker errors are
//! logged where they happen, serialization errors are logged here.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::services::publisher::PublishError;

/// Central application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("publish error: {0}")]
    Publish(#[from] PublishError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

impl AppError {
    /// Name of the operation that produced this error, used to tag log lines.
    pub fn operation(&self) -> &'static str {
        match self {
            AppError::Publish(e) => e.operation(),
            AppError::Serialization(_) => "serde_json::to_vec()",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Serialization(e) = &self {
            error!(func = self.operation(), error = %e, "Serialization failed");
        }

        let message = match self {
            AppError::Publish(e) if e.is_connection_error() => "Broker connection failed",
            AppError::Publish(PublishError::Channel(_)) => "Broker channel failed",
            AppError::Publish(PublishError::Declare(_)) => "Queue declaration failed",
            AppError::Publish(PublishError::Publish(_)) => "Message publish failed",
            AppError::Publish(_) => "Broker connection failed",
            AppError::Serialization(_) => "Serialization failed",
        };

        let body = Json(ErrorBody { message });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
