use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the API handlers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Requested resource does not exist (404 Not Found)
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },
    /// Malformed path or query input (400 Bad Request)
    #[error("Invalid value for '{field}': {message}")]
    InvalidRequest { field: String, message: String },
    /// Database unreachable or the connection failed mid-request (503)
    #[error("Storage failure: {message}")]
    StorageFailure { message: String },
    /// Anything else (500 Internal Server Error)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, "RESOURCE_NOT_FOUND"),
            ApiError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ApiError::StorageFailure { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "STORAGE_FAILURE")
            }
            ApiError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Maps a sea-orm error onto the API taxonomy. `context` names the resource
/// being read and is used for not-found messages.
pub fn map_db_error(err: DbErr, context: &str) -> ApiError {
    match err {
        DbErr::RecordNotFound(msg) => ApiError::NotFound {
            resource: context.replace('_', " "),
            id: msg,
        },
        DbErr::Conn(conn_err) => ApiError::StorageFailure {
            message: conn_err.to_string(),
        },
        DbErr::ConnectionAcquire(acquire_err) => ApiError::StorageFailure {
            message: acquire_err.to_string(),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

#[macro_export]
macro_rules! not_found {
    ($resource:expr, $id:expr) => {
        $crate::common::errors::ApiError::NotFound {
            resource: $resource.to_string(),
            id: $id.to_string(),
        }
    };
}

/// Extension trait to add API error conversion to `DbErr`
pub trait DbErrorExt {
    fn to_api_error(self, context: &str) -> ApiError;
}

impl DbErrorExt for DbErr {
    fn to_api_error(self, context: &str) -> ApiError {
        map_db_error(self, context)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
