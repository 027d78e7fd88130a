//! Typed errors and HTTP mapping.

use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}='{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("migrate: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Request failure. Responses carry only the status code, never a body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{operation}: invalid id '{value}': {source}")]
    InvalidId {
        operation: &'static str,
        value: String,
        #[source]
        source: uuid::Error,
    },
    #[error("{operation}: invalid body: {reason}")]
    InvalidBody {
        operation: &'static str,
        reason: String,
    },
    /// Storage failure reported to the client as a bad request (single-book lookup).
    #[error("{operation}: {source}")]
    Lookup {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("{operation}: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId { .. } | AppError::InvalidBody { .. } | AppError::Lookup { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            AppError::InvalidId { operation, .. }
            | AppError::InvalidBody { operation, .. }
            | AppError::Lookup { operation, .. }
            | AppError::Store { operation, .. } => *operation,
        }
    }

    pub fn log(&self) {
        let operation = self.operation();
        if self.status().is_server_error() {
            tracing::error!(operation, error = %self, "request failed");
        } else {
            tracing::warn!(operation, error = %self, "request rejected");
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}
