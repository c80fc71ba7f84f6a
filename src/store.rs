//! In-memory ledger store.
//!
//! The store is the sole owner of account and transaction state. All of it
//! sits behind one `Mutex`; callers take the guard once via
//! [`LedgerStore::lock`] and run any check-then-mutate sequence inside that
//! single critical section.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use uuid::Uuid;

use crate::{
    error::{LedgerError, LedgerResult},
    models::{account::Account, transaction::Transaction},
};

/// Type alias for the store as shared between request handlers.
pub type SharedStore = Arc<LedgerStore>;

/// Lock-guarded container for all ledger state.
#[derive(Debug, Default)]
pub struct LedgerStore {
    state: Mutex<LedgerState>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store ready to hand to the HTTP router.
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    /// Acquire exclusive access to the ledger state.
    ///
    /// The lock is released when the guard drops, on every exit path. A
    /// poisoned lock is recovered: no ledger operation panics between
    /// mutations, so the state behind it is still consistent.
    pub fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Accounts, transaction log and the id → slot index.
///
/// Only reachable through a [`LedgerStore::lock`] guard.
#[derive(Debug, Default)]
pub struct LedgerState {
    accounts: Vec<Account>,
    account_slots: HashMap<Uuid, usize>,
    transactions: Vec<Transaction>,
}

impl LedgerState {
    /// Append a new account. The caller guarantees the id is unused.
    pub fn create_account(&mut self, account: Account) {
        debug_assert!(!self.account_slots.contains_key(&account.id));

        self.account_slots.insert(account.id, self.accounts.len());
        self.accounts.push(account);
    }

    /// O(1) lookup by identifier.
    pub fn find_account(&self, id: &Uuid) -> Option<&Account> {
        self.account_slots
            .get(id)
            .map(|&slot| &self.accounts[slot])
    }

    /// Overwrite the stored balance of an existing account.
    pub fn update_account_balance(&mut self, id: &Uuid, new_balance: f64) -> LedgerResult<()> {
        let slot = *self
            .account_slots
            .get(id)
            .ok_or(LedgerError::AccountNotFound)?;
        self.accounts[slot].balance = new_balance;
        Ok(())
    }

    /// Snapshot of every account in creation order.
    pub fn list_accounts(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    pub fn append_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Every transaction recorded against `account_id`, oldest first.
    pub fn list_transactions_by_account(&self, account_id: &Uuid) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.account_id == *account_id)
            .cloned()
            .collect()
    }

    /// Pop the most recently appended transaction.
    ///
    /// Only transfer rollback uses this.
    pub fn remove_last_transaction(&mut self) -> Option<Transaction> {
        self.transactions.pop()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::TransactionKind;

    #[test]
    fn find_account_uses_index() {
        let store = LedgerStore::new();
        let alice = Account::new("Alice", 10.0);
        let bob = Account::new("Bob", 20.0);
        let (alice_id, bob_id) = (alice.id, bob.id);

        let mut state = store.lock();
        state.create_account(alice);
        state.create_account(bob);

        assert_eq!(state.find_account(&bob_id).unwrap().owner, "Bob");
        assert_eq!(state.find_account(&alice_id).unwrap().balance, 10.0);
        assert!(state.find_account(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn accounts_are_listed_in_insertion_order() {
        let store = LedgerStore::new();
        let mut state = store.lock();
        for owner in ["a", "b", "c"] {
            state.create_account(Account::new(owner, 0.0));
        }

        let owners: Vec<_> = state
            .list_accounts()
            .into_iter()
            .map(|account| account.owner)
            .collect();
        assert_eq!(owners, ["a", "b", "c"]);
    }

    #[test]
    fn update_balance_of_unknown_account_fails() {
        let store = LedgerStore::new();

        let result = store.lock().update_account_balance(&Uuid::new_v4(), 5.0);

        assert_eq!(result, Err(LedgerError::AccountNotFound));
    }

    #[test]
    fn transactions_filtered_by_account_and_popped_from_tail() {
        let store = LedgerStore::new();
        let account = Account::new("Alice", 0.0);
        let other = Account::new("Bob", 0.0);
        let (id, other_id) = (account.id, other.id);

        let mut state = store.lock();
        state.create_account(account);
        state.create_account(other);
        state.append_transaction(Transaction::new(id, TransactionKind::Deposit, 1.0));
        state.append_transaction(Transaction::new(other_id, TransactionKind::Deposit, 2.0));
        state.append_transaction(Transaction::new(id, TransactionKind::Withdrawal, 3.0));

        let amounts: Vec<_> = state
            .list_transactions_by_account(&id)
            .iter()
            .map(|transaction| transaction.amount)
            .collect();
        assert_eq!(amounts, [1.0, 3.0]);

        let popped = state.remove_last_transaction().unwrap();
        assert_eq!(popped.amount, 3.0);
        assert_eq!(state.transaction_count(), 2);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let store = Arc::new(LedgerStore::new());
        let clone = Arc::clone(&store);

        let _ = std::thread::spawn(move || {
            let _guard = clone.lock();
            panic!("poison the lock");
        })
        .join();

        store.lock().create_account(Account::new("Alice", 1.0));
        assert_eq!(store.lock().account_count(), 1);
    }
}
