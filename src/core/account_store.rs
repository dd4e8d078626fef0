//! In-memory account store
//!
//! This module provides `InMemoryAccountStore`, the single-owner store backing
//! the sequential ledger.
//!
//! The store is responsible for:
//! - Point lookup of account records
//! - Insert-or-replace writes (last write wins)
//! - Administrative clear
//! - Sorted snapshots for output

use crate::core::traits::AccountStore;
use crate::types::{Account, AccountId};
use std::collections::HashMap;

/// Single-owner account store
///
/// Maps account identifiers to account records. Mutation requires `&mut self`,
/// so the borrow checker serializes every read-modify-write.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    /// Map of account identifiers to account records
    accounts: HashMap<AccountId, Account>,
}

impl InMemoryAccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        InMemoryAccountStore {
            accounts: HashMap::new(),
        }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn get(&self, id: &str) -> Option<Account> {
        self.accounts.get(id).cloned()
    }

    fn put(&mut self, account: Account) {
        self.accounts.insert(account.id.clone(), account);
    }

    fn clear(&mut self) {
        self.accounts.clear();
    }

    fn size(&self) -> usize {
        self.accounts.len()
    }

    fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.values().cloned().collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        accounts
    }
}
