//! CSV format handling for ledger events and balance output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to validated ledger events
//! - Balance output serialization
//!
//! All functions are pure (no file access) for easy testing.

use crate::types::{Account, Amount, EventType, LedgerError, LedgerEvent};
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, origin, destination, amount.
/// Identifier columns are optional because deposits have no origin and
/// withdrawals have no destination.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub event_type: String,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to a LedgerEvent
///
/// This function:
/// - Parses the type column into an EventType (case-insensitive)
/// - Parses the amount into an Amount of at least 0.01
/// - Checks that the identifiers the event kind needs are present
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Errors
///
/// Returns `InvalidEventType`, `InvalidAmount` or `MissingAccountId`
/// describing the first problem found in the row.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<LedgerEvent, LedgerError> {
    let event_type: EventType = csv_record.event_type.parse()?;

    let amount: Amount = match csv_record.amount.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.parse()?,
        _ => return Err(LedgerError::invalid_amount("")),
    };

    LedgerEvent::new(
        event_type,
        csv_record.origin.as_deref(),
        csv_record.destination.as_deref(),
        amount,
    )
}

/// Write account balances to CSV format
///
/// Writes accounts with columns: account, balance. Accounts are sorted by
/// identifier and balances are normalized (no trailing zeros).
///
/// # Arguments
///
/// * `accounts` - Slice of account records to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Errors
///
/// Returns `IoError` if writing or flushing fails.
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    use csv::Writer;

    let write_error = |e: csv::Error| LedgerError::IoError {
        message: format!("Failed to write balances: {}", e),
    };

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["account", "balance"])
        .map_err(write_error)?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by(|a, b| a.id.cmp(&b.id));

    for account in sorted_accounts {
        writer
            .write_record(&[account.id, account.balance.normalize().to_string()])
            .map_err(write_error)?;
    }

    writer.flush()?;

    Ok(())
}
