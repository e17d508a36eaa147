//! Centralized error handling module
//!
//! Provides unified error types and the notification-safe error report used by
//! whatever surface presents failures to the user.

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

/// Application-wide error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Stable machine-readable classification of the error
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::StorageError(_) => "STORAGE_ERROR",
            AppError::SerializationError(_) => "SERIALIZATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Build a report suitable for a transient notification.
    ///
    /// Storage, serialization and internal failures are logged in full but
    /// surfaced with a generic message.
    pub fn report(&self) -> ErrorReport {
        let message = match self {
            AppError::ValidationError(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::StorageError(_)
            | AppError::SerializationError(_)
            | AppError::InternalError(_) => {
                error!(error = %self, "Internal failure occurred");
                "Something went wrong, please try again".to_string()
            }
        };

        let report = ErrorReport::new(self.error_type(), &message);

        error!(
            correlation_id = %report.correlation_id,
            error_type = %report.error_type,
            "Error report generated"
        );

        report
    }
}

/// Standardized error report format
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    /// Unique correlation ID for tracing
    pub correlation_id: String,
    /// Error type classification
    pub error_type: String,
    /// Human-readable error message (safe for display)
    pub message: String,
    /// Timestamp of the error
    pub timestamp: String,
}

impl ErrorReport {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            error_type: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type, self.message)
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;
