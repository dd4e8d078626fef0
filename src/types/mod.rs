//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account record and identifier
//! - `amount`: Validated monetary amounts
//! - `event`: Ledger events and their outcomes
//! - `error`: Error types for the ledger engine

pub mod account;
pub mod amount;
pub mod error;
pub mod event;

pub use account::{Account, AccountId};
pub use amount::{Amount, AmountError, MIN_AMOUNT};
pub use error::{ErrorCategory, LedgerError};
pub use event::{EventOutcome, EventType, LedgerEvent};
