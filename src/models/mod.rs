//! Data models held by the ledger and exchanged over the API.

/// Account model
pub mod account;
/// Transaction model
pub mod transaction;
