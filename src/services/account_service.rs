//! Account service - creating and reading account records.

use crate::{
    error::{LedgerError, LedgerResult},
    models::account::Account,
    services::parse_id,
    store::LedgerStore,
};

/// Open a new account with the given owner and opening balance.
///
/// Zero and negative opening balances are accepted here; callers that want
/// stricter rules validate before calling.
pub fn create_account(store: &LedgerStore, owner: &str, initial_balance: f64) -> Account {
    let mut account = Account::new(owner, initial_balance);

    let mut state = store.lock();
    while state.find_account(&account.id).is_some() {
        account.id = uuid::Uuid::new_v4();
    }
    state.create_account(account.clone());
    drop(state);

    tracing::info!(account_id = %account.id, owner = %account.owner, "Account created");
    account
}

/// Fetch one account by its string identifier.
///
/// # Errors
///
/// - `InvalidIdentifier`: `id` is not a UUID
/// - `AccountNotFound`: no account has that id
pub fn get_account(store: &LedgerStore, id: &str) -> LedgerResult<Account> {
    let id = parse_id(id)?;

    store
        .lock()
        .find_account(&id)
        .cloned()
        .ok_or(LedgerError::AccountNotFound)
}

/// Every account, in creation order.
pub fn list_accounts(store: &LedgerStore) -> Vec<Account> {
    store.lock().list_accounts()
}
