//! Core traits for account storage and ledger operations
//!
//! This module defines the trait abstractions that let the single-owner and
//! thread-safe implementations be used interchangeably.

use crate::types::{Account, EventOutcome, LedgerError, LedgerEvent};
use rust_decimal::Decimal;

/// Keyed container of account records
///
/// Implementations can be single-owner (using HashMap) or shared (using DashMap).
/// The store owns every record; callers receive clones.
pub trait AccountStore {
    /// Point lookup, no side effects
    fn get(&self, id: &str) -> Option<Account>;

    /// Insert or replace by identifier (last write wins)
    fn put(&mut self, account: Account);

    /// Remove every record
    fn clear(&mut self);

    /// Number of records
    fn size(&self) -> usize;

    /// Snapshot of all records sorted by identifier
    fn accounts(&self) -> Vec<Account>;
}

/// Balance query and money movement over an account store
///
/// Every mutating operation validates fully before writing, so a failed call
/// leaves all records unchanged.
pub trait LedgerOperations {
    /// Current balance, or `AccountNotFound`
    fn balance(&self, id: &str) -> Result<Decimal, LedgerError>;

    /// Credit `amount`, creating the account if needed; returns the new record
    fn deposit(&mut self, id: &str, amount: Decimal) -> Result<Account, LedgerError>;

    /// Debit `amount` from an existing account; returns the new record
    fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<Account, LedgerError>;

    /// Move `amount` from `origin` to `destination`; returns `(origin, destination)`
    fn transfer(
        &mut self,
        origin: &str,
        destination: &str,
        amount: Decimal,
    ) -> Result<(Account, Account), LedgerError>;

    /// Administrative reset: drop every account
    fn reset(&mut self);

    /// Snapshot of all accounts sorted by identifier
    fn accounts(&self) -> Vec<Account>;

    /// Dispatch a validated event to the matching operation
    fn apply(&mut self, event: &LedgerEvent) -> Result<EventOutcome, LedgerError> {
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
}
