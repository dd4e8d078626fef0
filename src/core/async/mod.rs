//! Concurrent implementations of core components
//!
//! This module provides thread-safe versions of the account store and the
//! ledger, plus the batch processor that drives them from tokio tasks.
//!
//! # Architecture
//!
//! - **AsyncAccountStore**: Thread-safe account records using DashMap
//! - **AsyncLedger**: Ledger operations with per-account locking
//! - **BatchProcessor**: Runs groups of unrelated events concurrently
//!
//! # Thread Safety
//!
//! - Operations on different accounts proceed in parallel
//! - Operations on the same account are serialized
//! - Reset excludes every other operation while it runs

pub mod account_store;
pub mod batch_processor;
pub mod ledger;

pub use account_store::AsyncAccountStore;
pub use batch_processor::{BatchProcessor, ProcessingResult};
pub use ledger::AsyncLedger;
