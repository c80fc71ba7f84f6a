//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Validates it and calls into the ledger services
//! 3. Returns HTTP response (JSON, status code)

use axum::{Json, extract::rejection::JsonRejection};

use crate::error::AppError;

/// Account management endpoints
pub mod accounts;
/// Service health endpoint
pub mod health;
/// Transaction and transfer endpoints
pub mod transactions;

/// Unwrap a JSON body, turning any extractor rejection into a 400.
fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::InvalidRequestBody(rejection.body_text()))
}
