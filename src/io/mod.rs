//! I/O module
//!
//! Handles CSV event parsing and balance output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, write_accounts_csv, CsvRecord};
pub use sync_reader::SyncReader;

use crate::types::LedgerError;
use std::path::Path;

/// Map a failure to open an input file, turning a missing path into
/// `FileNotFound`
pub(crate) fn open_error(path: &Path, error: std::io::Error) -> LedgerError {
    match error.kind() {
        std::io::ErrorKind::NotFound => LedgerError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LedgerError::from(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_maps_missing_file() {
        let error = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert_eq!(
            open_error(Path::new("events.csv"), error),
            LedgerError::FileNotFound {
                path: "events.csv".to_string()
            }
        );
    }

    #[test]
    fn test_open_error_keeps_other_kinds_as_io() {
        let error = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(
            open_error(Path::new("events.csv"), error),
            LedgerError::IoError { .. }
        ));
    }
}
