//! Ledger Engine CLI
//!
//! Command-line interface for applying ledger events from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- events.csv > balances.csv
//! cargo run -- --strategy sync events.csv > balances.csv
//! cargo run -- --strategy async --batch-size 2000 --worker-threads 8 events.csv > balances.csv
//! RUST_LOG=warn LEDGER_LOG_JSON=true cargo run -- events.csv > balances.csv
//! ```
//!
//! The program reads events from the input CSV file, applies them with the
//! selected processing strategy and prints the final balances to stdout.
//! Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use ledger_engine::cli;
use ledger_engine::logging;
use ledger_engine::strategy;
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init(args.log_json);

    let strategy = {
        let config = if args.strategy == cli::StrategyType::Async {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    tracing::info!(
        input = %args.input_file.display(),
        strategy = ?args.strategy,
        "processing events"
    );

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        tracing::error!(error = %e, category = ?e.category(), "processing failed");
        process::exit(1);
    }
}
