use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    // Request validation errors
    #[error("{field} is required")]
    MissingField { field: &'static str },

    // Allocation errors
    #[error("No names available")]
    NoNamesAvailable,

    #[error("Name already taken: {name}")]
    NameTaken { name: String },

    // State errors
    #[error("Failed to save state to '{path}': {source}")]
    StateSave {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load state from '{path}': {source}")]
    StateLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse state file '{path}': {source}")]
    StateParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // Generic errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// HTTP status the error maps to in a response body.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField { .. } | ApiError::NoNamesAvailable => StatusCode::BAD_REQUEST,
            ApiError::NameTaken { .. } => StatusCode::CONFLICT,
            ApiError::StateSave { .. }
            | ApiError::StateLoad { .. }
            | ApiError::StateParse { .. }
            | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
