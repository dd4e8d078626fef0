//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Trait abstractions for interchangeable implementations
//! - `balance` - Pure balance rules shared by both ledgers
//! - `account_store` - Single-owner account storage
//! - `ledger` - Sequential ledger operations
//! - `async` - Thread-safe store, ledger and batch processor

pub mod account_store;
pub mod r#async;
pub(crate) mod balance;
pub mod ledger;
pub mod traits;

pub use account_store::InMemoryAccountStore;
pub use ledger::Ledger;
pub use r#async::{AsyncAccountStore, AsyncLedger, BatchProcessor};
pub use traits::{AccountStore, LedgerOperations};
