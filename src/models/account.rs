//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Ledger entity representing an account
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `AccountResponse`: Response body returned to clients

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Represents an account record held by the ledger store.
///
/// `id` and `owner` never change after creation. `balance` is only ever
/// touched by transaction operations while the store lock is held.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Free-text label for the account holder
    pub owner: String,

    /// Current balance
    ///
    /// Plain floating point; no currency or rounding semantics.
    pub balance: f64,
}

impl Account {
    /// Build a new account with a freshly generated identifier.
    pub fn new(owner: impl Into<String>, balance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: owner.into(),
            balance,
        }
    }
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "owner": "Alice",
///   "initial_balance": 1000
/// }
/// ```
///
/// # Validation
///
/// - `owner`: Required, non-blank
/// - `initial_balance`: Required; zero and negative values are accepted
#[derive(Debug, Default, Deserialize)]
pub struct CreateAccountRequest {
    /// Name of the account holder
    #[serde(default)]
    pub owner: String,

    /// Opening balance
    ///
    /// Older clients send the misspelled `inital_balance` key.
    #[serde(default, alias = "inital_balance")]
    pub initial_balance: Option<f64>,
}

impl CreateAccountRequest {
    /// Check required fields, returning the opening balance on success.
    pub fn validate(&self) -> Result<f64, AppError> {
        let mut problems = Vec::new();

        if self.owner.trim().is_empty() {
            problems.push("owner is required");
        }

        let balance = match self.initial_balance {
            Some(balance) if balance.is_finite() => Some(balance),
            Some(_) => {
                problems.push("initial_balance must be a finite number");
                None
            }
            None => {
                problems.push("initial_balance is required");
                None
            }
        };

        match balance {
            Some(balance) if problems.is_empty() => Ok(balance),
            _ => Err(AppError::ValidationFailed(problems.join(", "))),
        }
    }
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "owner": "Alice",
///   "balance": 1000.0
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub owner: String,
    pub balance: f64,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            owner: account.owner,
            balance: account.balance,
        }
    }
}
