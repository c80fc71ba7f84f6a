//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `TransactionKind`: Deposit or withdrawal, with string round-trip
//! - `Transaction`: Ledger entity representing one balance movement
//! - Request types for single-account transactions and transfers
//! - `TransactionResponse`: Response body returned to clients

use std::{fmt, str::FromStr};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, LedgerError};

/// Direction of a balance movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }

    /// Balance delta for moving `amount` in this direction.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            TransactionKind::Deposit => amount,
            TransactionKind::Withdrawal => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    /// Only the exact lowercase names are recognised.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "deposit" => Ok(TransactionKind::Deposit),
            "withdrawal" => Ok(TransactionKind::Withdrawal),
            other => Err(LedgerError::InvalidTransactionType(other.to_string())),
        }
    }
}

/// Represents a transaction record in the ledger log.
///
/// Records are append-only. `amount` is always a positive magnitude; the
/// sign is implied by `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unique identifier for this transaction
    pub id: Uuid,

    /// Account whose balance this transaction moved
    pub account_id: Uuid,

    /// Deposit or withdrawal
    pub kind: TransactionKind,

    /// Magnitude of the movement
    pub amount: f64,

    /// When the transaction was recorded
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Build a new record stamped with a fresh id and the current time.
    pub fn new(account_id: Uuid, kind: TransactionKind, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            kind,
            amount,
            timestamp: Utc::now(),
        }
    }
}

/// Request to record a deposit or withdrawal on the account named in the path.
///
/// # JSON Example
///
/// ```json
/// {
///   "type": "withdrawal",
///   "amount": 200
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TransactionRequest {
    /// "deposit" or "withdrawal"; anything else is rejected by the ledger
    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub amount: Option<f64>,
}

impl TransactionRequest {
    /// Check required fields, returning the amount on success.
    pub fn validate(&self) -> Result<f64, AppError> {
        let mut problems = Vec::new();

        if self.kind.trim().is_empty() {
            problems.push("type is required");
        }
        let amount = check_amount(self.amount, &mut problems);

        match amount {
            Some(amount) if problems.is_empty() => Ok(amount),
            _ => Err(AppError::ValidationFailed(problems.join(", "))),
        }
    }
}

/// Request to move money between two accounts.
///
/// # JSON Example
///
/// ```json
/// {
///   "from_account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "to_account_id": "660e8400-e29b-41d4-a716-446655440001",
///   "amount": 300
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TransferRequest {
    /// Account to debit; `from_acount_id` is accepted from older clients
    #[serde(default, alias = "from_acount_id")]
    pub from_account_id: String,

    /// Account to credit
    #[serde(default)]
    pub to_account_id: String,

    #[serde(default)]
    pub amount: Option<f64>,
}

impl TransferRequest {
    /// Check required fields, returning the amount on success.
    pub fn validate(&self) -> Result<f64, AppError> {
        let mut problems = Vec::new();

        if self.from_account_id.trim().is_empty() {
            problems.push("from_account_id is required");
        }
        if self.to_account_id.trim().is_empty() {
            problems.push("to_account_id is required");
        }
        let amount = check_amount(self.amount, &mut problems);

        match amount {
            Some(amount) if problems.is_empty() => Ok(amount),
            _ => Err(AppError::ValidationFailed(problems.join(", "))),
        }
    }
}

fn check_amount(amount: Option<f64>, problems: &mut Vec<&'static str>) -> Option<f64> {
    match amount {
        Some(amount) if amount.is_finite() && amount > 0.0 => Some(amount),
        Some(_) => {
            problems.push("amount must be a positive number");
            None
        }
        None => {
            problems.push("amount is required");
            None
        }
    }
}

/// Response returned for transaction endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "type": "withdrawal",
///   "amount": 200.0,
///   "timestamp": "2025-12-21T16:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: String,
    pub account_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub timestamp: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id.to_string(),
            account_id: transaction.account_id.to_string(),
            kind: transaction.kind.to_string(),
            amount: transaction.amount,
            timestamp: transaction
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Plain acknowledgement body, e.g. for a completed transfer.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
