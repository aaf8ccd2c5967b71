use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::ApiResponse;

/// Failures seen by the storefront side when calling the catalog API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ClientError {
    /// Inline message shown next to the product list.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(err) if err.is_timeout() => {
                "The catalog took too long to respond. Please try again.".to_string()
            }
            ClientError::Http(_) => "Could not reach the catalog. Please try again.".to_string(),
            ClientError::Status { status, .. } => format!(
                "The catalog returned an error ({}). Please try again.",
                status.as_u16()
            ),
            ClientError::InvalidResponse(_) => {
                "The catalog sent an unexpected response.".to_string()
            }
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Task(_) => {
                "Something went wrong while loading the catalog. Please try again.".to_string()
            }
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised by the reference catalog server.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiResponse::success(
            self.to_string(),
            ErrorData {
                error: self.to_string(),
            },
        );

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
