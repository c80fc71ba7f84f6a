//! Transaction HTTP handlers.
//!
//! This module implements transaction-related API endpoints:
//! - POST /api/v1/accounts/{id}/transactions - Deposit to or withdraw from an account
//! - GET /api/v1/accounts/{id}/transactions - List an account's transactions
//! - POST /api/v1/transfer - Move money between accounts

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    error::AppError,
    handlers::parse_body,
    models::transaction::{
        MessageResponse, TransactionRequest, TransactionResponse, TransferRequest,
    },
    services::transaction_service,
    store::SharedStore,
};

/// Record a deposit or withdrawal.
///
/// # Request Body
///
/// ```json
/// {
///   "type": "deposit",
///   "amount": 500
/// }
/// ```
///
/// # Response (201)
///
/// ```json
/// {
///   "id": "770e8400-...",
///   "account_id": "550e8400-...",
///   "type": "deposit",
///   "amount": 500.0,
///   "timestamp": "2025-12-21T16:00:00Z"
/// }
/// ```
pub async fn create_transaction(
    State(store): State<SharedStore>,
    Path(account_id): Path<String>,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    let request = parse_body(payload)?;
    let amount = request.validate()?;

    let transaction =
        transaction_service::create_transaction(&store, &account_id, &request.kind, amount)?;

    Ok((StatusCode::CREATED, Json(transaction.into())))
}

/// List every transaction recorded against an account, oldest first.
///
/// Returns 404 if the account does not exist.
pub async fn list_transactions(
    State(store): State<SharedStore>,
    Path(account_id): Path<String>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions: Vec<TransactionResponse> =
        transaction_service::list_account_transactions(&store, &account_id)?
            .into_iter()
            .map(Into::into)
            .collect();

    Ok(Json(transactions))
}

/// Transfer money between accounts.
///
/// # Atomicity
///
/// The source is debited before the destination is credited. If the credit
/// fails the debit is undone, so either both legs are recorded or neither.
///
/// # Validation
///
/// - Accounts must be different
/// - Source must have sufficient balance
/// - Both accounts must exist
pub async fn create_transfer(
    State(store): State<SharedStore>,
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let request = parse_body(payload)?;
    let amount = request.validate()?;

    transaction_service::execute_transfer(
        &store,
        &request.from_account_id,
        &request.to_account_id,
        amount,
    )?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Successfully transferred".to_string(),
        }),
    ))
}
