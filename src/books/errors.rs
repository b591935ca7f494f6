//! # Book Errors
//!
//! Error types for the book repository service and their HTTP mapping.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::http_server::response::Envelope;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

/// The operation a failure happened in, used to phrase the client message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Get,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Get => "get",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Book service errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    // ==================
    // Validation Errors (400)
    // ==================
    /// `name` absent or empty
    #[error("Failed to {0} book. Please provide the book name")]
    MissingName(Action),

    /// `readPage` greater than `pageCount`
    #[error("Failed to {0} book. readPage must not be greater than pageCount")]
    ReadPageExceedsPageCount(Action),

    /// Request body is not a valid book payload
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // ==================
    // Lookup Errors (404)
    // ==================
    /// No book with the requested id
    #[error("{}", not_found_message(.0))]
    NotFound(Action),

    // ==================
    // Server Errors (500)
    // ==================
    /// The new record could not be found right after insertion
    #[error("Failed to add book")]
    InsertionFailed,

    /// Store failure such as a poisoned lock
    #[error("Internal error: {0}")]
    Internal(String),
}

fn not_found_message(action: &Action) -> String {
    match action {
        Action::Get => "Book not found".to_string(),
        other => format!("Failed to {} book. Id not found", other),
    }
}

impl BookError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookError::MissingName(_)
            | BookError::ReadPageExceedsPageCount(_)
            | BookError::InvalidBody(_) => StatusCode::BAD_REQUEST,

            BookError::NotFound(_) => StatusCode::NOT_FOUND,

            BookError::InsertionFailed | BookError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the failure is the client's fault
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        } else {
            tracing::error!(error = %self, status = status.as_u16(), "request failed");
        }

        (status, Json(Envelope::fail(self.to_string()))).into_response()
    }
}
