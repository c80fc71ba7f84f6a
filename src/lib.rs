//! Bank Account Manager - in-memory account ledger with a REST API.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: In-memory ledger behind a single mutex
//! - **Format**: JSON requests/responses
//!
//! The ledger core (`store` and `services`) is synchronous and can be used
//! without the HTTP layer:
//!
//! ```
//! use bank_account_manager::{services::account_service, store::LedgerStore};
//!
//! let store = LedgerStore::new();
//! let account = account_service::create_account(&store, "Alice", 1000.0);
//! assert_eq!(account.balance, 1000.0);
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;
