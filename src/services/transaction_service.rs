//! Transaction service - Core business logic for balance movements.
//!
//! This service handles:
//! - Deposits and withdrawals against a single account
//! - Balance validation (no overdraft)
//! - Two-leg transfers with compensation when the second leg fails
//!
//! # Atomicity Guarantees
//!
//! Each operation runs under one acquisition of the store lock, so the
//! balance check, balance update and log append can never interleave with
//! another operation. A transfer keeps the lock across both legs and any
//! compensation, which means the record removed on rollback is always the
//! withdrawal the transfer itself appended.

use uuid::Uuid;

use crate::{
    error::{LedgerError, LedgerResult},
    models::transaction::{Transaction, TransactionKind},
    services::parse_id,
    store::{LedgerState, LedgerStore},
};

/// Record a deposit or withdrawal against one account.
///
/// # Process
///
/// 1. Parse the account id and the transaction type
/// 2. Lock the store and look up the account
/// 3. Reject withdrawals larger than the balance
/// 4. Apply the delta and append the transaction record
///
/// # Errors
///
/// - `InvalidIdentifier`: `account_id` is not a UUID
/// - `InvalidTransactionType`: `kind` is not "deposit" or "withdrawal"
/// - `AccountNotFound`: Account doesn't exist
/// - `InsufficientFunds`: Withdrawal exceeds the balance; nothing changes
pub fn create_transaction(
    store: &LedgerStore,
    account_id: &str,
    kind: &str,
    amount: f64,
) -> LedgerResult<Transaction> {
    let account_id = parse_id(account_id)?;
    let kind: TransactionKind = kind.parse()?;

    let mut state = store.lock();
    apply(&mut state, account_id, kind, amount)
}

/// All transactions recorded against an account, oldest first.
///
/// # Errors
///
/// - `InvalidIdentifier`: `account_id` is not a UUID
/// - `AccountNotFound`: the account has never existed
pub fn list_account_transactions(
    store: &LedgerStore,
    account_id: &str,
) -> LedgerResult<Vec<Transaction>> {
    let account_id = parse_id(account_id)?;

    let state = store.lock();
    if state.find_account(&account_id).is_none() {
        return Err(LedgerError::AccountNotFound);
    }
    Ok(state.list_transactions_by_account(&account_id))
}

/// Move `amount` from one account to another.
///
/// The source is debited first. If crediting the destination then fails,
/// the debit is compensated (balance restored, withdrawal record removed)
/// and the destination error is returned. The two legs are recorded as
/// independent transactions.
///
/// # Errors
///
/// - `SameAccountTransfer`: source and destination are the same account
/// - `InvalidIdentifier`: either id is not a UUID
/// - `AccountNotFound`: either account doesn't exist
/// - `InsufficientFunds`: source balance is below `amount`
pub fn execute_transfer(
    store: &LedgerStore,
    from_account_id: &str,
    to_account_id: &str,
    amount: f64,
) -> LedgerResult<()> {
    if from_account_id == to_account_id {
        return Err(LedgerError::SameAccountTransfer);
    }

    let from_id = parse_id(from_account_id)?;
    let to_id = parse_id(to_account_id)?;
    if from_id == to_id {
        return Err(LedgerError::SameAccountTransfer);
    }

    let mut state = store.lock();

    let withdrawal = apply(&mut state, from_id, TransactionKind::Withdrawal, amount)?;

    if let Err(err) = apply(&mut state, to_id, TransactionKind::Deposit, amount) {
        compensate(&mut state, &withdrawal);
        tracing::warn!(
            from = %from_id,
            to = %to_id,
            amount,
            error = %err,
            "Transfer deposit leg failed, withdrawal rolled back"
        );
        return Err(err);
    }

    tracing::info!(from = %from_id, to = %to_id, amount, "Transfer completed");
    Ok(())
}

/// Check-then-mutate for one leg. Caller holds the lock.
fn apply(
    state: &mut LedgerState,
    account_id: Uuid,
    kind: TransactionKind,
    amount: f64,
) -> LedgerResult<Transaction> {
    let balance = state
        .find_account(&account_id)
        .ok_or(LedgerError::AccountNotFound)?
        .balance;

    if kind == TransactionKind::Withdrawal && balance < amount {
        tracing::warn!(%account_id, balance, amount, "Withdrawal rejected: insufficient funds");
        return Err(LedgerError::InsufficientFunds);
    }

    state.update_account_balance(&account_id, balance + kind.signed(amount))?;

    let transaction = Transaction::new(account_id, kind, amount);
    state.append_transaction(transaction.clone());

    tracing::debug!(
        transaction_id = %transaction.id,
        %account_id,
        kind = %kind,
        amount,
        "Transaction applied"
    );
    Ok(transaction)
}

/// Undo a withdrawal that was the last thing appended to the log.
fn compensate(state: &mut LedgerState, withdrawal: &Transaction) {
    if let Some(account) = state.find_account(&withdrawal.account_id) {
        let restored = account.balance + withdrawal.amount;
        // Account was found just above, so the update cannot fail.
        let _ = state.update_account_balance(&withdrawal.account_id, restored);
    }

    let removed = state.remove_last_transaction();
    debug_assert_eq!(removed.map(|tx| tx.id), Some(withdrawal.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::account_service;

    fn balance_of(store: &LedgerStore, id: Uuid) -> f64 {
        store.lock().find_account(&id).unwrap().balance
    }

    #[test]
    fn deposit_increases_balance_and_records_transaction() {
        let store = LedgerStore::new();
        let account = account_service::create_account(&store, "Alice", 2000.0);

        let transaction =
            create_transaction(&store, &account.id.to_string(), "deposit", 500.0).unwrap();

        assert_eq!(transaction.account_id, account.id);
        assert_eq!(transaction.kind, TransactionKind::Deposit);
        assert_eq!(balance_of(&store, account.id), 2500.0);
    }

    #[test]
    fn withdrawal_of_exact_balance_is_allowed() {
        let store = LedgerStore::new();
        let account = account_service::create_account(&store, "Alice", 100.0);

        create_transaction(&store, &account.id.to_string(), "withdrawal", 100.0).unwrap();

        assert_eq!(balance_of(&store, account.id), 0.0);
    }

    #[test]
    fn overdraft_is_rejected_without_side_effects() {
        let store = LedgerStore::new();
        let account = account_service::create_account(&store, "Alice", 100.0);

        let result = create_transaction(&store, &account.id.to_string(), "withdrawal", 200.0);

        assert_eq!(result, Err(LedgerError::InsufficientFunds));
        assert_eq!(balance_of(&store, account.id), 100.0);
        assert_eq!(store.lock().transaction_count(), 0);
    }

    #[test]
    fn errors_follow_validation_order() {
        let store = LedgerStore::new();

        assert_eq!(
            create_transaction(&store, "invalid-account-id", "bogus", 5.0),
            Err(LedgerError::InvalidIdentifier)
        );
        assert_eq!(
            create_transaction(&store, &Uuid::new_v4().to_string(), "bogus", 5.0),
            Err(LedgerError::InvalidTransactionType("bogus".into()))
        );
        assert_eq!(
            create_transaction(&store, &Uuid::new_v4().to_string(), "deposit", 5.0),
            Err(LedgerError::AccountNotFound)
        );
    }

    #[test]
    fn listing_unknown_account_is_not_found() {
        let store = LedgerStore::new();

        assert_eq!(
            list_account_transactions(&store, &Uuid::new_v4().to_string()),
            Err(LedgerError::AccountNotFound)
        );
        assert_eq!(
            list_account_transactions(&store, "non-existent-account-id"),
            Err(LedgerError::InvalidIdentifier)
        );
    }

    #[test]
    fn listing_account_without_activity_is_empty() {
        let store = LedgerStore::new();
        let account = account_service::create_account(&store, "Alice", 0.0);

        let transactions = list_account_transactions(&store, &account.id.to_string()).unwrap();

        assert!(transactions.is_empty());
    }

    #[test]
    fn transfer_moves_funds_and_records_both_legs() {
        let store = LedgerStore::new();
        let from = account_service::create_account(&store, "Bob", 1000.0);
        let to = account_service::create_account(&store, "Charlie", 500.0);

        execute_transfer(&store, &from.id.to_string(), &to.id.to_string(), 300.0).unwrap();

        assert_eq!(balance_of(&store, from.id), 700.0);
        assert_eq!(balance_of(&store, to.id), 800.0);

        let state = store.lock();
        let debit = state.list_transactions_by_account(&from.id);
        let credit = state.list_transactions_by_account(&to.id);
        assert_eq!(debit.len(), 1);
        assert_eq!(debit[0].kind, TransactionKind::Withdrawal);
        assert_eq!(credit.len(), 1);
        assert_eq!(credit[0].kind, TransactionKind::Deposit);
        assert_ne!(debit[0].id, credit[0].id);
    }

    #[test]
    fn failed_deposit_leg_rolls_back_withdrawal() {
        let store = LedgerStore::new();
        let from = account_service::create_account(&store, "Alice", 800.0);
        create_transaction(&store, &from.id.to_string(), "deposit", 1.0).unwrap();
        let before = list_account_transactions(&store, &from.id.to_string()).unwrap();

        let result = execute_transfer(
            &store,
            &from.id.to_string(),
            &Uuid::new_v4().to_string(),
            100.0,
        );

        assert_eq!(result, Err(LedgerError::AccountNotFound));
        assert_eq!(balance_of(&store, from.id), 801.0);
        assert_eq!(
            list_account_transactions(&store, &from.id.to_string()).unwrap(),
            before
        );
    }

    #[test]
    fn same_account_transfer_is_rejected() {
        let store = LedgerStore::new();
        let account = account_service::create_account(&store, "Alice", 10.0);
        let id = account.id.to_string();

        assert_eq!(
            execute_transfer(&store, &id, &id, 1.0),
            Err(LedgerError::SameAccountTransfer)
        );
        assert_eq!(
            execute_transfer(&store, &id, &id.to_uppercase(), 1.0),
            Err(LedgerError::SameAccountTransfer)
        );
        assert_eq!(balance_of(&store, account.id), 10.0);
    }

    #[test]
    fn malformed_destination_fails_before_any_mutation() {
        let store = LedgerStore::new();
        let from = account_service::create_account(&store, "Alice", 10.0);

        let result = execute_transfer(&store, &from.id.to_string(), "not-a-real-id", 1.0);

        assert_eq!(result, Err(LedgerError::InvalidIdentifier));
        assert_eq!(balance_of(&store, from.id), 10.0);
        assert_eq!(store.lock().transaction_count(), 0);
    }
}
