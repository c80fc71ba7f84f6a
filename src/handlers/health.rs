//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::SharedStore;

/// Health check response.
///
/// Returns service status and the size of the in-memory ledger.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of accounts held
    pub accounts: usize,

    /// Number of transactions recorded
    pub transactions: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "accounts": 2,
///   "transactions": 5,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(store): State<SharedStore>) -> Json<HealthResponse> {
    let (accounts, transactions) = {
        let state = store.lock();
        (state.account_count(), state.transaction_count())
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        accounts,
        transactions,
        timestamp: Utc::now(),
    })
}
