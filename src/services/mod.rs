//! Business logic services.
//!
//! Services contain the ledger core separated from HTTP handlers. Every
//! operation takes the store lock for its whole duration and returns a
//! typed `LedgerError` instead of panicking on bad input.

use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};

pub mod account_service;
pub mod transaction_service;

/// Parse a client-supplied account identifier.
pub(crate) fn parse_id(id: &str) -> LedgerResult<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| LedgerError::InvalidIdentifier)
}
