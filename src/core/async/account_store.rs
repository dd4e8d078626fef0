//! Thread-safe account store for concurrent ledgers
//!
//! This module provides the `AsyncAccountStore` struct, which keeps account
//! records in a concurrent map so several threads can read and write them.
//!
//! # Design
//!
//! The `AsyncAccountStore` uses `DashMap` (a concurrent HashMap) with
//! fine-grained locking through internal sharding. Each call is atomic on its
//! own; sequences of calls (read, check, write) are serialized by the
//! `AsyncLedger` stripe locks, not by the store.

use crate::core::traits::AccountStore;
use crate::types::{Account, AccountId};
use dashmap::DashMap;

/// Thread-safe account store
///
/// All methods take `&self` and may be called from multiple threads. Returned
/// records are snapshots; later writes by other threads are not reflected.
#[derive(Debug, Default)]
pub struct AsyncAccountStore {
    /// Concurrent HashMap storing account records by identifier
    accounts: DashMap<AccountId, Account>,
}

impl AsyncAccountStore {
    /// Create a new empty AsyncAccountStore
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Point lookup returning a snapshot of the record
    pub fn get(&self, id: &str) -> Option<Account> {
        self.accounts.get(id).map(|entry| entry.value().clone())
    }

    /// Insert or replace a record (last write wins)
    pub fn put(&self, account: Account) {
        self.accounts.insert(account.id.clone(), account);
    }

    /// Remove every record
    pub fn clear(&self) {
        self.accounts.clear();
    }

    /// Number of records
    pub fn size(&self) -> usize {
        self.accounts.len()
    }

    /// Snapshot of all records sorted by identifier
    ///
    /// Records written while the snapshot is taken may or may not be included.
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        accounts
    }
}

impl AccountStore for AsyncAccountStore {
    fn get(&self, id: &str) -> Option<Account> {
        AsyncAccountStore::get(self, id)
    }

    fn put(&mut self, account: Account) {
        AsyncAccountStore::put(self, account)
    }

    fn clear(&mut self) {
        AsyncAccountStore::clear(self)
    }

    fn size(&self) -> usize {
        AsyncAccountStore::size(self)
    }

    fn accounts(&self) -> Vec<Account> {
        AsyncAccountStore::accounts(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_store_is_empty() {
        let store = AsyncAccountStore::new();
        assert_eq!(store.size(), 0);
        assert!(store.accounts().is_empty());
    }

    #[test]
    fn test_put_get_and_replace() {
        let store = AsyncAccountStore::new();

        store.put(Account::new("1234", Decimal::new(10, 0)));
        assert_eq!(store.get("1234").unwrap().balance, Decimal::new(10, 0));

        store.put(Account::new("1234", Decimal::new(20, 0)));
        assert_eq!(store.get("1234").unwrap().balance, Decimal::new(20, 0));
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn test_clear() {
        let store = AsyncAccountStore::new();
        store.put(Account::new("1", Decimal::ONE));
        store.put(Account::new("2", Decimal::ONE));

        store.clear();

        assert_eq!(store.size(), 0);
        assert_eq!(store.get("1"), None);
    }

    #[test]
    fn test_usable_through_store_trait() {
        fn fill<S: AccountStore>(store: &mut S) {
            store.put(Account::new("b", Decimal::ONE));
            store.put(Account::new("a", Decimal::ONE));
        }

        let mut store = AsyncAccountStore::new();
        fill(&mut store);

        let ids: Vec<String> = store.accounts().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_concurrent_puts_to_different_accounts() {
        let store = Arc::new(AsyncAccountStore::new());
        let mut handles = vec![];

        for i in 0..10 {
            let store_clone = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                store_clone.put(Account::new(i.to_string(), Decimal::from(i)));
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.size(), 10);
        for i in 0..10 {
            assert_eq!(store.get(&i.to_string()).unwrap().balance, Decimal::from(i));
        }
    }
}
