//! Asynchronous batch processing strategy
//!
//! This module provides a multi-threaded implementation of the
//! ProcessingStrategy trait. Events are read in batches and each batch is
//! split into groups of connected accounts that run in parallel.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, worker_threads)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchProcessor (account-connected partitioning + tokio tasks)
//!     └── AsyncLedger (striped per-account locking)
//!         └── AsyncAccountStore (DashMap-backed records)
//! ```
//!
//! # Ordering
//!
//! - Batches are processed one after another, so file order holds across batches
//! - Within a batch, events that share an account run sequentially in file order
//! - Groups with no account in common run concurrently

use crate::core::r#async::{AsyncLedger, BatchProcessor};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_accounts_csv;
use crate::io::open_error;
use crate::strategy::ProcessingStrategy;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Configuration for batch processing
///
/// Controls how events are batched and the number of worker threads used
/// within each batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of events per batch
    pub batch_size: usize,
    /// Number of runtime worker threads, which bounds how many groups of a
    /// batch run at once
    pub worker_threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            worker_threads: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values are replaced by the defaults and a warning is logged.
    pub fn new(batch_size: usize, worker_threads: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let worker_threads = if worker_threads == 0 {
            tracing::warn!(
                worker_threads,
                default = default.worker_threads,
                "invalid worker thread count, using default"
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self {
            batch_size,
            worker_threads,
        }
    }
}

/// Asynchronous batch processing strategy
///
/// Produces the same balances as `SyncProcessingStrategy` for the same input.
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    /// Batch processing configuration
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    ///
    /// # Arguments
    ///
    /// * `config` - BatchConfig with batch_size and worker_threads
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process events from input file and write balances to output
    ///
    /// 1. Builds a tokio multi-threaded runtime
    /// 2. Reads events in batches with `AsyncReader`
    /// 3. Runs each batch through the `BatchProcessor` and waits for it
    /// 4. Writes the sorted balances with `write_accounts_csv`
    ///
    /// Rejected rows and events are logged at `warn`; processing continues.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads)
            .build()?;

        runtime.block_on(async {
            let ledger = Arc::new(AsyncLedger::default());
            let processor = BatchProcessor::new(Arc::clone(&ledger));

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| open_error(input_path, e))?;

            // csv-async reads futures::io, tokio files need the compat layer
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);
            let (mut applied, mut rejected) = (0u64, 0u64);

            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                for result in processor.process_batch(batch).await {
                    match result.result {
                        Ok(_) => applied += 1,
                        Err(e) => {
                            rejected += 1;
                            tracing::warn!(
                                line = result.line,
                                event = %result.event.event_type(),
                                error = %e,
                                "event rejected"
                            );
                        }
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
        })
    }
}
