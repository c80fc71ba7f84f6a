//! Error types and HTTP error response handling.
//!
//! Two layers of errors live here:
//! - `LedgerError`: failures raised by the ledger core (store and services)
//! - `AppError`: everything an HTTP handler can fail with, including ledger
//!   failures, converted into JSON responses with appropriate status codes

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Failures produced by account and transaction operations.
///
/// The core never panics on bad input; every rejected operation surfaces as
/// one of these variants and leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The supplied identifier is not a well-formed UUID.
    #[error("Invalid Account UUID")]
    InvalidIdentifier,

    /// A well-formed identifier does not match any stored account.
    #[error("Account not found")]
    AccountNotFound,

    /// The transaction type is neither "deposit" nor "withdrawal".
    ///
    /// Carries the rejected input.
    #[error("Invalid transaction type: {0}")]
    InvalidTransactionType(String),

    /// Withdrawal amount exceeds the current balance.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Transfer source and destination are the same account.
    #[error("From and To account IDs cannot be the same")]
    SameAccountTransfer,
}

/// Convenience alias used throughout the ledger core.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Application-wide error type returned by HTTP handlers.
///
/// # Error Categories
///
/// - **Ledger Errors**: Any `LedgerError` bubbling up from the core
/// - **Body Errors**: Request body is not valid JSON for the endpoint
/// - **Validation Errors**: Body parsed but required fields are missing or invalid
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A ledger operation was rejected.
    ///
    /// `#[from]` lets handlers use `?` directly on service results.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Request body could not be deserialized.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid request body")]
    InvalidRequestBody(String),

    /// Request body failed field validation.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String lists which fields were invalid.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `AccountNotFound` → 404 Not Found
/// - every other ledger failure → 400 Bad Request
/// - `InvalidRequestBody`, `ValidationFailed` → 400 Bad Request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Ledger(LedgerError::InvalidIdentifier) => {
                (StatusCode::BAD_REQUEST, "invalid_identifier")
            }
            AppError::Ledger(LedgerError::AccountNotFound) => {
                (StatusCode::NOT_FOUND, "account_not_found")
            }
            AppError::Ledger(LedgerError::InvalidTransactionType(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_transaction_type")
            }
            AppError::Ledger(LedgerError::InsufficientFunds) => {
                (StatusCode::BAD_REQUEST, "insufficient_funds")
            }
            AppError::Ledger(LedgerError::SameAccountTransfer) => {
                (StatusCode::BAD_REQUEST, "same_account_transfer")
            }
            AppError::InvalidRequestBody(reason) => {
                tracing::debug!(%reason, "Rejected request body");
                (StatusCode::BAD_REQUEST, "invalid_request")
            }
            AppError::ValidationFailed(_) => (StatusCode::BAD_REQUEST, "validation_failed"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}
