//! Ledger Engine Library
//! # Overview
//!
//! This library provides an in-memory account ledger with deposit, withdraw
//! and transfer operations, plus a streaming CSV event processor with a
//! sequential and a concurrent strategy.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, Amount, LedgerEvent, LedgerError)
//! - [`core`] - Business logic components:
//!   - [`core::account_store`] - Single-owner account storage
//!   - [`core::ledger`] - Sequential ledger operations
//!   - [`core::r#async`] - Thread-safe store, ledger and batch processor
//! - [`io`] - CSV event readers and balance writer
//! - [`strategy`] - Complete processing pipelines (sync, async)
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Tracing subscriber setup
//!
//! # Event Types
//!
//! - **Deposit**: Credit funds to an account, opening it on first use
//! - **Withdraw**: Debit funds from an existing account with enough balance
//! - **Transfer**: Move funds from an existing account to another, opening
//!   the destination if needed
//!
//! Every amount must be at least 0.01 and no balance ever goes negative. A
//! rejected operation leaves every account unchanged.
//!
//! # Example
//!
//! ```
//! use ledger_engine::Ledger;
//! use rust_decimal::Decimal;
//!
//! let mut ledger: Ledger = Ledger::default();
//! ledger.deposit("1234", Decimal::new(123456, 3)).unwrap();
//! ledger.deposit("5678", Decimal::new(500, 1)).unwrap();
//! ledger.transfer("1234", "5678", Decimal::new(23456, 3)).unwrap();
//!
//! assert_eq!(ledger.balance("1234").unwrap(), Decimal::new(100, 0));
//! assert_eq!(ledger.balance("5678").unwrap(), Decimal::new(73456, 3));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use self::core::{
    AccountStore, AsyncAccountStore, AsyncLedger, InMemoryAccountStore, Ledger, LedgerOperations,
};
pub use io::write_accounts_csv;
pub use types::{
    Account, AccountId, Amount, ErrorCategory, EventOutcome, EventType, LedgerError, LedgerEvent,
};
