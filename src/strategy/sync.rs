//! Synchronous processing strategy
//!
//! This module provides a single-threaded implementation of the
//! ProcessingStrategy trait. It streams rows through `SyncReader` and applies
//! each valid event to a `Ledger` in file order.
//!
//! # Memory Efficiency
//!
//! Rows are read one at a time; memory grows with the number of accounts,
//! not the number of events.

use crate::core::traits::LedgerOperations;
use crate::core::Ledger;
use crate::io::csv_format::write_accounts_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use ledger_engine::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("events.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Process events from input file and write balances to output
    ///
    /// 1. Streams rows from the CSV file with `SyncReader`
    /// 2. Applies every valid event to a fresh `Ledger`
    /// 3. Writes the sorted balances with `write_accounts_csv`
    ///
    /// Rows that fail to parse and events the ledger rejects are logged at
    /// `warn` with their line number; processing continues.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError> {
        let mut ledger: Ledger = Ledger::default();
        let mut reader = SyncReader::new(input_path)?;
        let (mut applied, mut rejected) = (0u64, 0u64);

        while let Some(result) = reader.next() {
            match result.and_then(|event| ledger.apply(&event)) {
                Ok(_) => applied += 1,
                Err(e) => {
                    rejected += 1;
                    tracing::warn!(line = reader.line(), error = %e, "event rejected");
                }
            }
        }

        tracing::info!(
            applied,
            rejected,
            accounts = ledger.size(),
            "finished processing events"
        );

        write_accounts_csv(&ledger.accounts(), output)
    }
}
