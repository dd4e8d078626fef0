//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over ledger events from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader to read and deserialize CSV records one at
//! a time, so memory use does not grow with the file size.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<LedgerEvent, LedgerError>` for each CSV row:
//!
//! ```no_run
//! use ledger_engine::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let mut reader = SyncReader::new(Path::new("events.csv")).unwrap();
//! while let Some(result) = reader.next() {
//!     match result {
//!         Ok(event) => println!("Applying {:?}", event),
//!         Err(e) => eprintln!("Line {}: {}", reader.line(), e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Row errors are yielded as Err variants and do not end the iteration

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::io::open_error;
use crate::types::{LedgerError, LedgerEvent};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Provides an iterator interface over ledger events.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    records_read: u64,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (for empty identifier columns)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if the path does not exist
    /// * `IoError` if the file could not be opened for another reason
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| open_error(path, e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            records_read: 0,
        })
    }

    /// File line of the most recently yielded row (the header is line 1)
    pub fn line(&self) -> u64 {
        self.records_read + 1
    }
}

impl Iterator for SyncReader {
    type Item = Result<LedgerEvent, LedgerError>;

    /// Read the next row and convert it to a LedgerEvent
    ///
    /// # Returns
    ///
    /// * `Some(Ok(LedgerEvent))` - Valid event
    /// * `Some(Err(LedgerError))` - Malformed or invalid row
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let row = deserializer.next()?;
        self.records_read += 1;

        Some(row.map_err(LedgerError::from).and_then(convert_csv_record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Amount, EventType};
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "type,origin,destination,amount\n";

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(rows: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(HEADER.as_bytes())
            .expect("Failed to write to temp file");
        file.write_all(rows.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_sync_reader_new_fails_on_missing_file() {
        let err = SyncReader::new(Path::new("nonexistent.csv")).unwrap_err();
        assert_eq!(
            err,
            LedgerError::FileNotFound {
                path: "nonexistent.csv".to_string()
            }
        );
    }

    #[test]
    fn test_sync_reader_iterates_valid_deposit() {
        let file = create_temp_csv("deposit,,1234,123.456\n");
        let events: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            Ok(LedgerEvent::Deposit {
                destination: "1234".to_string(),
                amount: Amount::new(Decimal::new(123456, 3)).unwrap(),
            })
        );
    }

    #[test]
    fn test_sync_reader_handles_all_event_types() {
        let file = create_temp_csv(
            "deposit,,1234,100\nwithdraw,1234,,20\ntransfer,1234,5678,3.456\n",
        );
        let types: Vec<EventType> = SyncReader::new(file.path())
            .unwrap()
            .map(|r| r.unwrap().event_type())
            .collect();

        assert_eq!(
            types,
            vec![EventType::Deposit, EventType::Withdraw, EventType::Transfer]
        );
    }

    #[test]
    fn test_sync_reader_handles_whitespace() {
        let file = create_temp_csv("  transfer  ,  1234  ,  5678  ,  3.456  \n");
        let event = SyncReader::new(file.path()).unwrap().next().unwrap().unwrap();

        assert_eq!(event.account_ids(), vec!["1234", "5678"]);
        assert_eq!(event.amount().value(), Decimal::new(3456, 3));
    }

    #[test]
    fn test_sync_reader_handles_empty_file_after_header() {
        let file = create_temp_csv("");
        assert_eq!(SyncReader::new(file.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_sync_reader_continues_after_error_and_reports_line() {
        let file = create_temp_csv("deposit,,1,10\nrefund,1,,5\nwithdraw,1,,5\n");
        let mut reader = SyncReader::new(file.path()).unwrap();

        assert!(reader.next().unwrap().is_ok());
        assert_eq!(
            reader.next().unwrap(),
            Err(LedgerError::invalid_event_type("refund"))
        );
        assert_eq!(reader.line(), 3);
        assert!(reader.next().unwrap().is_ok());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_sync_reader_empty_amount_is_rejected() {
        let file = create_temp_csv("deposit,,1,\n");
        let result = SyncReader::new(file.path()).unwrap().next().unwrap();

        assert_eq!(result, Err(LedgerError::invalid_amount("")));
    }
}
