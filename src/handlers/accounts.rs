//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /api/v1/accounts - Create new account
//! - GET /api/v1/accounts/{id} - Get account by ID
//! - GET /api/v1/accounts - List all accounts

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    error::AppError,
    handlers::parse_body,
    models::account::{AccountResponse, CreateAccountRequest},
    services::account_service,
    store::SharedStore,
};

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "owner": "Alice",
///   "initial_balance": 1000
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created account
/// - **Error (400)**: Malformed body or missing fields
pub async fn create_account(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let request = parse_body(payload)?;
    let initial_balance = request.validate()?;

    let account = account_service::create_account(&store, &request.owner, initial_balance);

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns account details
/// - **Error (400)**: `id` is not a UUID
/// - **Error (404)**: Account not found
pub async fn get_account(
    State(store): State<SharedStore>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = account_service::get_account(&store, &account_id)?;

    Ok(Json(account.into()))
}

/// List all accounts, oldest first.
pub async fn list_accounts(State(store): State<SharedStore>) -> Json<Vec<AccountResponse>> {
    let responses: Vec<AccountResponse> = account_service::list_accounts(&store)
        .into_iter()
        .map(Into::into)
        .collect();

    Json(responses)
}
