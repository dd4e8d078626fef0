//! Thread-safe ledger
//!
//! This module provides `AsyncLedger`, the concurrent implementation of the
//! ledger operations over a shared `AsyncAccountStore`.
//!
//! # Locking
//!
//! ```text
//! AsyncLedger
//!     ├── gate: RwLock<()>                        (read: operations, write: reset)
//!     ├── stripes: [Mutex<()>; LOCK_STRIPES]      (account id hashed to a stripe)
//!     └── store: Arc<AsyncAccountStore>
//! ```
//!
//! Each mutating operation holds the stripe of every account it touches for
//! the whole read, check, write sequence. Transfers take their two stripes in
//! ascending stripe order, so two opposing transfers cannot deadlock. The
//! stripe table has a fixed size: operations on unknown accounts never grow
//! it. Unrelated accounts contend only when they hash to the same stripe.

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use rust_decimal::Decimal;

use super::AsyncAccountStore;
use crate::core::balance::{checked_amount, checked_id, credit, debit, plan_transfer};
use crate::core::traits::LedgerOperations;
use crate::types::{Account, EventOutcome, LedgerError, LedgerEvent};

/// Number of account lock stripes per ledger
pub const LOCK_STRIPES: usize = 64;

/// Thread-safe ledger over a shared account store
///
/// All operations take `&self`; wrap the ledger in an `Arc` to share it
/// across threads or tokio tasks.
#[derive(Debug)]
pub struct AsyncLedger {
    /// Shared account store
    store: Arc<AsyncAccountStore>,

    /// Mutual exclusion for read-modify-write sequences, indexed by stripe
    stripes: Vec<Mutex<()>>,

    /// Maps account identifiers to stripes
    hasher: RandomState,

    /// Excludes every operation while a reset runs
    gate: RwLock<()>,
}

impl Default for AsyncLedger {
    fn default() -> Self {
        Self::new(Arc::new(AsyncAccountStore::new()))
    }
}

impl AsyncLedger {
    /// Create a ledger over the given shared store
    ///
    /// # Arguments
    ///
    /// * `store` - Arc-wrapped store, possibly shared with readers elsewhere
    pub fn new(store: Arc<AsyncAccountStore>) -> Self {
        Self {
            store,
            stripes: (0..LOCK_STRIPES).map(|_| Mutex::new(())).collect(),
            hasher: RandomState::new(),
            gate: RwLock::new(()),
        }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &Arc<AsyncAccountStore> {
        &self.store
    }

    fn stripe(&self, id: &str) -> usize {
        (self.hasher.hash_one(id) % LOCK_STRIPES as u64) as usize
    }

    fn lock_stripe(&self, stripe: usize) -> MutexGuard<'_, ()> {
        self.stripes[stripe]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the balance of an account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the account has no record.
    pub fn balance(&self, id: &str) -> Result<Decimal, LedgerError> {
        self.store
            .get(id)
            .map(|account| account.balance)
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    /// Deposit funds, opening the account on first use
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is below 0.01
    /// - The identifier is blank
    /// - The new balance would overflow
    pub fn deposit(&self, id: &str, amount: Decimal) -> Result<Account, LedgerError> {
        let amount = checked_amount(amount)?;
        let id = checked_id(id, "destination")?;

        let _gate = self.gate.read().unwrap_or_else(PoisonError::into_inner);
        let _guard = self.lock_stripe(self.stripe(id));

        let account = credit(self.store.get(id), id, amount, "deposit")?;
        self.store.put(account.clone());
        Ok(account)
    }

    /// Withdraw funds from an existing account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is below 0.01
    /// - The identifier is blank
    /// - The account does not exist
    /// - The balance is lower than the amount
    pub fn withdraw(&self, id: &str, amount: Decimal) -> Result<Account, LedgerError> {
        let amount = checked_amount(amount)?;
        let id = checked_id(id, "origin")?;

        let _gate = self.gate.read().unwrap_or_else(PoisonError::into_inner);
        let _guard = self.lock_stripe(self.stripe(id));

        let account = self
            .store
            .get(id)
            .ok_or_else(|| LedgerError::account_not_found(id))?;
        let account = debit(account, amount)?;
        self.store.put(account.clone());
        Ok(account)
    }

    /// Transfer funds between two accounts
    ///
    /// Both account locks are held from the first read until both records are
    /// written, so no other operation observes the debit without the credit.
    ///
    /// # Returns
    ///
    /// The post-transfer `(origin, destination)` records.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is below 0.01
    /// - Either identifier is blank
    /// - The origin does not exist
    /// - The origin balance is lower than the amount
    pub fn transfer(
        &self,
        origin: &str,
        destination: &str,
        amount: Decimal,
    ) -> Result<(Account, Account), LedgerError> {
        let amount = checked_amount(amount)?;
        let origin = checked_id(origin, "origin")?;
        let destination = checked_id(destination, "destination")?;

        let _gate = self.gate.read().unwrap_or_else(PoisonError::into_inner);
        let (first, second) = {
            let (a, b) = (self.stripe(origin), self.stripe(destination));
            (a.min(b), a.max(b))
        };
        let _first = self.lock_stripe(first);
        let _second = (first != second).then(|| self.lock_stripe(second));

        let (origin, destination) = plan_transfer(
            self.store.get(origin),
            self.store.get(destination),
            origin,
            destination,
            amount,
        )?;
        self.store.put(origin.clone());
        self.store.put(destination.clone());
        Ok((origin, destination))
    }

    /// Dispatch a validated event to the matching operation
    pub fn apply(&self, event: &LedgerEvent) -> Result<EventOutcome, LedgerError> {
        match event {
            LedgerEvent::Deposit {
                destination,
                amount,
            } => self
                .deposit(destination, amount.value())
                .map(EventOutcome::deposited),
            LedgerEvent::Withdraw { origin, amount } => self
                .withdraw(origin, amount.value())
                .map(EventOutcome::withdrawn),
            LedgerEvent::Transfer {
                origin,
                destination,
                amount,
            } => self
                .transfer(origin, destination, amount.value())
                .map(|(origin, destination)| EventOutcome::transferred(origin, destination)),
        }
    }

    /// Drop every account
    ///
    /// Waits for in-flight operations to finish and blocks new ones until the
    /// store is empty.
    pub fn reset(&self) {
        let _gate = self.gate.write().unwrap_or_else(PoisonError::into_inner);
        self.store.clear();
    }

    /// Number of accounts
    pub fn size(&self) -> usize {
        self.store.size()
    }

    /// All accounts sorted by identifier
    pub fn accounts(&self) -> Vec<Account> {
        self.store.accounts()
    }
}

impl LedgerOperations for AsyncLedger {
    fn balance(&self, id: &str) -> Result<Decimal, LedgerError> {
        AsyncLedger::balance(self, id)
    }

    fn deposit(&mut self, id: &str, amount: Decimal) -> Result<Account, LedgerError> {
        AsyncLedger::deposit(self, id, amount)
    }

    fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<Account, LedgerError> {
        AsyncLedger::withdraw(self, id, amount)
    }

    fn transfer(
        &mut self,
        origin: &str,
        destination: &str,
        amount: Decimal,
    ) -> Result<(Account, Account), LedgerError> {
        AsyncLedger::transfer(self, origin, destination, amount)
    }

    fn reset(&mut self) {
        AsyncLedger::reset(self)
    }

    fn accounts(&self) -> Vec<Account> {
        AsyncLedger::accounts(self)
    }

    fn apply(&mut self, event: &LedgerEvent) -> Result<EventOutcome, LedgerError> {
        AsyncLedger::apply(self, event)
    }
}
