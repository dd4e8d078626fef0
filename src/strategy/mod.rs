//! Processing strategy module for event files
//!
//! This module defines the Strategy pattern for complete processing pipelines,
//! covering CSV parsing, applying events to a ledger and writing balances.
//! Implementations (sequential, concurrent batch) are selected at runtime.

use crate::cli::StrategyType;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete event-file pipelines
///
/// Each strategy reads events from a CSV file, applies them to a fresh ledger
/// and writes the final balances to output. For the same input every strategy
/// must produce the same output.
pub trait ProcessingStrategy: Send + Sync {
    /// Process events from input file and write balances to output
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file containing ledger events
    /// * `output` - Mutable reference to a writer for the balance CSV
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (`FileNotFound`, `IoError`)
    /// - Output cannot be written (`IoError`)
    ///
    /// Rejected rows and events are logged at `warn` and do not stop
    /// processing.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch processing (ignored for sync)
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_strategies_agree_on_output() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"type,origin,destination,amount\n\
              deposit,,1234,123.456\n\
              deposit,,5678,50.0\n\
              transfer,1234,5678,23.456\n\
              withdraw,5678,,200\n\
              transfer,9999,1234,1\n",
        )
        .unwrap();

        let mut outputs = Vec::new();
        for strategy_type in [StrategyType::Sync, StrategyType::Async] {
            let strategy = create_strategy(strategy_type, Some(BatchConfig::new(2, 2)));
            let mut output = Vec::new();
            strategy.process(file.path(), &mut output).unwrap();
            outputs.push(String::from_utf8(output).unwrap());
        }

        assert_eq!(outputs[0], "account,balance\n1234,100\n5678,73.456\n");
        assert_eq!(outputs[0], outputs[1]);
    }
}
