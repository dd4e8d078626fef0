//! Asynchronous CSV reader with batch interface
//!
//! Provides a streaming interface over ledger events from a CSV source.
//! Supports batch reading for the concurrent processing strategy.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of (line, LedgerEvent)
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerError, LedgerEvent};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Rows that fail to parse or validate are logged at `warn` with their line
/// number and left out of the batch.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    records_read: u64,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    ///
    /// # Arguments
    ///
    /// * `reader` - Async reader providing CSV data
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            records_read: 0,
        }
    }

    /// Read a batch of ledger events
    ///
    /// # Arguments
    ///
    /// * `batch_size` - Maximum number of valid events to return
    ///
    /// # Returns
    ///
    /// Up to `batch_size` valid events in file order, each paired with the
    /// file line it came from (the header is line 1). Returns an empty vector
    /// when the end of the input is reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<(u64, LedgerEvent)> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            let Some(row) = records.next().await else {
                break;
            };
            self.records_read += 1;
            let line = self.records_read + 1;

            let converted = row
                .map_err(|e| LedgerError::ParseError {
                    line: e.position().map(|pos| pos.line()),
                    message: e.to_string(),
                })
                .and_then(convert_csv_record);

            match converted {
                Ok(event) => batch.push((line, event)),
                Err(e) => tracing::warn!(line, error = %e, "skipping row"),
            }
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::io::Cursor;
    use rust_decimal::Decimal;

    fn reader(rows: &str) -> AsyncReader<Cursor<Vec<u8>>> {
        let content = format!("type,origin,destination,amount\n{}", rows);
        AsyncReader::new(Cursor::new(content.into_bytes()))
    }

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let mut async_reader = reader("deposit,,1,100\nwithdraw,1,,50\ndeposit,,2,200\n");

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].1.account_ids(), vec!["1"]);
        assert_eq!(batch[1].1.amount().value(), Decimal::new(50, 0));

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].0, 4);
        assert_eq!(batch[0].1.account_ids(), vec!["2"]);

        assert!(async_reader.read_batch(2).await.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let mut async_reader = reader("");
        assert!(async_reader.read_batch(10).await.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_skips_invalid_rows() {
        let mut async_reader =
            reader("refund,1,,1\ndeposit,,1,0.001\nwithdraw,,1,5\ntransfer,1,2,3\n");

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].0, 5);
        assert_eq!(batch[0].1.account_ids(), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_async_reader_whitespace_handling() {
        let mut async_reader = reader("  deposit  ,  ,  1234  ,  123.456  \n");

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].1.account_ids(), vec!["1234"]);
        assert_eq!(batch[0].1.amount().value(), Decimal::new(123456, 3));
    }
}
