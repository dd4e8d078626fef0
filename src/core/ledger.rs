//! Sequential ledger
//!
//! This module provides `Ledger`, the single-owner implementation of the
//! ledger operations. The account store is injected, so tests and callers
//! decide which store backs it and how long it lives.
//!
//! Every operation follows the same shape:
//! 1. Validate the amount and identifiers
//! 2. Read the record(s) from the store
//! 3. Compute the new record(s) with the balance rules
//! 4. Write back only when every check passed

use crate::core::account_store::InMemoryAccountStore;
use crate::core::balance::{checked_amount, checked_id, credit, debit, plan_transfer};
use crate::core::traits::{AccountStore, LedgerOperations};
use crate::types::{Account, LedgerError};
use rust_decimal::Decimal;

/// Single-owner ledger over an injected account store
#[derive(Debug, Default)]
pub struct Ledger<S = InMemoryAccountStore> {
    store: S,
}

impl<S: AccountStore> Ledger<S> {
    /// Create a ledger over the given store
    pub fn new(store: S) -> Self {
        Ledger { store }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
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
    pub fn deposit(&mut self, id: &str, amount: Decimal) -> Result<Account, LedgerError> {
        let amount = checked_amount(amount)?;
        let id = checked_id(id, "destination")?;

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
    pub fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<Account, LedgerError> {
        let amount = checked_amount(amount)?;
        let id = checked_id(id, "origin")?;

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
    /// The destination is opened when it does not exist. Both records are
    /// computed before either one is written.
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
        &mut self,
        origin: &str,
        destination: &str,
        amount: Decimal,
    ) -> Result<(Account, Account), LedgerError> {
        let amount = checked_amount(amount)?;
        let origin = checked_id(origin, "origin")?;
        let destination = checked_id(destination, "destination")?;

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

    /// Drop every account
    pub fn reset(&mut self) {
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

impl<S: AccountStore> LedgerOperations for Ledger<S> {
    fn balance(&self, id: &str) -> Result<Decimal, LedgerError> {
        Ledger::balance(self, id)
    }

    fn deposit(&mut self, id: &str, amount: Decimal) -> Result<Account, LedgerError> {
        Ledger::deposit(self, id, amount)
    }

    fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<Account, LedgerError> {
        Ledger::withdraw(self, id, amount)
    }

    fn transfer(
        &mut self,
        origin: &str,
        destination: &str,
        amount: Decimal,
    ) -> Result<(Account, Account), LedgerError> {
        Ledger::transfer(self, origin, destination, amount)
    }

    fn reset(&mut self) {
        Ledger::reset(self)
    }

    fn accounts(&self) -> Vec<Account> {
        Ledger::accounts(self)
    }
}
