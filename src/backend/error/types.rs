/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * Input rejected before any store call: empty comment bodies, malformed
 * upload filenames, nesting-rule violations. Always recoverable by the
 * caller fixing the input.
 *
 * ## Authentication / Authorization Errors
 *
 * `NotAuthenticated` means no (or an invalid) bearer token accompanied a
 * request that requires a viewer; clients are expected to redirect to the
 * login entry point and discard the pending action. `Forbidden` means the
 * viewer is known but not allowed (e.g. deleting another author's comment);
 * no partial effect is produced.
 *
 * ## Store Errors
 *
 * `StoreUnavailable` is returned when the database pool is not configured;
 * `Database` wraps sqlx failures. Both are terminal for the triggering
 * action: the prior view state is left unchanged and nothing is retried.
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant maps to an HTTP status code and can be converted to a JSON
/// HTTP response via `IntoResponse`.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Invalid input, rejected before any store call
    #[error("Validation error on {field}: {message}")]
    Validation {
        /// The offending request field
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A mutating action was attempted with no authenticated viewer
    #[error("Authentication required")]
    NotAuthenticated,

    /// The viewer is authenticated but not permitted to perform the action
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// The referenced entity does not exist
    #[error("{resource} not found")]
    NotFound {
        /// The kind of entity that was looked up
        resource: String,
    },

    /// The database pool is not configured
    #[error("Store unavailable")]
    StoreUnavailable,

    /// Database query failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure (media storage)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new authorization error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `NotAuthenticated` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `StoreUnavailable` - 503 Service Unavailable
    /// - `Database`, `Io` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotAuthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message
    ///
    /// Internal failures (database, I/O) are flattened to a
    /// generic message so no store details leak to clients.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Io(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = BackendError::validation("body", "must not be empty");
        match error {
            BackendError::Validation { field, message } => {
                assert_eq!(field, "body");
                assert_eq!(message, "must not be empty");
            }
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            BackendError::validation("body", "empty").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BackendError::NotAuthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BackendError::forbidden("not the author").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            BackendError::not_found("Comment").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::StoreUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            BackendError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_do_not_leak() {
        let error = BackendError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_not_found_message() {
        let error = BackendError::not_found("Comment");
        assert!(error.message().contains("Comment"));
    }
}
