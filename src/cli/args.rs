use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Apply deposit, withdraw and transfer events to an in-memory ledger
#[derive(Parser, Debug)]
#[command(name = "ledger-engine")]
#[command(about = "Apply ledger events from a CSV file and print final balances", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing ledger events
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Processing strategy to use for applying events
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        env = "LEDGER_STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for sequential or 'async' for concurrent batches"
    )]
    pub strategy: StrategyType,

    /// Number of events per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        env = "LEDGER_BATCH_SIZE",
        help = "Number of events per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        env = "LEDGER_WORKER_THREADS",
        help = "Number of runtime worker threads processing a batch (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,

    /// Emit logs as JSON lines instead of plain text
    #[arg(long = "log-json", env = "LEDGER_LOG_JSON")]
    pub log_json: bool,
}

/// Available processing strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults; zero values are replaced by
    /// `BatchConfig::new`, which logs a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.worker_threads.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.worker_threads.unwrap_or(default.worker_threads),
            )
        } else {
            BatchConfig::default()
        }
    }
}
