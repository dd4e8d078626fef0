//! Error types for the ledger engine
//!
//! This module defines every error the ledger and its CSV boundary can raise.
//!
//! # Error Categories
//!
//! - **Domain Errors**: account not found, insufficient funds
//! - **Input Errors**: invalid amount, missing account id, unknown event type,
//!   arithmetic overflow
//! - **I/O Errors**: file not found, read/write failures, malformed CSV
//!
//! Domain and input errors are detected before any record is mutated, so a
//! failed operation never leaves a partial update behind.

use super::amount::AmountError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Coarse classification of a [`LedgerError`]
///
/// Transport layers map these onto their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The referenced account has no record
    NotFound,
    /// The operation would drive a balance negative
    InsufficientFunds,
    /// The caller violated a precondition (amount, identifiers, event kind)
    InvalidInput,
    /// Reading or writing event/balance files failed
    Io,
}

/// Main error type for the ledger engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The account has no record
    ///
    /// Raised by balance queries, withdrawals and by transfers whose origin
    /// does not exist. A missing transfer destination is not an error.
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The identifier that was looked up
        account: String,
    },

    /// The withdrawal or transfer would drive the balance negative
    ///
    /// No record is modified.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account being debited
        account: String,
        /// Balance at the time of the check
        balance: Decimal,
        /// Amount requested
        requested: Decimal,
    },

    /// Amount is zero, negative, below 0.01 or unparsable
    #[error("Invalid amount '{amount}': must be at least 0.01")]
    InvalidAmount {
        /// The offending amount as given
        amount: String,
    },

    /// A required origin or destination identifier is missing or blank
    #[error("Missing {role} account id")]
    MissingAccountId {
        /// `origin` or `destination`
        role: String,
    },

    /// Event kind is not deposit, withdraw or transfer
    #[error("Invalid event type '{event_type}'")]
    InvalidEventType {
        /// The unrecognized kind
        event_type: String,
    },

    /// Balance arithmetic left the range of the decimal type
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account being credited
        account: String,
    },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading events or writing balances
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Malformed CSV row
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<AmountError> for LedgerError {
    fn from(error: AmountError) -> Self {
        match error {
            AmountError::BelowMinimum(value) => LedgerError::invalid_amount(&value.to_string()),
            AmountError::Malformed(raw) => LedgerError::invalid_amount(&raw),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        LedgerError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create a MissingAccountId error
    pub fn missing_account_id(role: &str) -> Self {
        LedgerError::MissingAccountId {
            role: role.to_string(),
        }
    }

    /// Create an InvalidEventType error
    pub fn invalid_event_type(event_type: &str) -> Self {
        LedgerError::InvalidEventType {
            event_type: event_type.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            LedgerError::AccountNotFound { .. } => ErrorCategory::NotFound,
            LedgerError::InsufficientFunds { .. } => ErrorCategory::InsufficientFunds,
            LedgerError::InvalidAmount { .. }
            | LedgerError::MissingAccountId { .. }
            | LedgerError::InvalidEventType { .. }
            | LedgerError::ArithmeticOverflow { .. } => ErrorCategory::InvalidInput,
            LedgerError::FileNotFound { .. }
            | LedgerError::IoError { .. }
            | LedgerError::ParseError { .. } => ErrorCategory::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::account_not_found(
        LedgerError::account_not_found("1234"),
        "Account 1234 not found"
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds("1234", Decimal::new(103456, 3), Decimal::new(200, 0)),
        "Insufficient funds in account 1234: balance 103.456, requested 200"
    )]
    #[case::invalid_amount(
        LedgerError::invalid_amount("-1"),
        "Invalid amount '-1': must be at least 0.01"
    )]
    #[case::missing_account_id(
        LedgerError::missing_account_id("origin"),
        "Missing origin account id"
    )]
    #[case::invalid_event_type(
        LedgerError::invalid_event_type("dispute"),
        "Invalid event type 'dispute'"
    )]
    #[case::arithmetic_overflow(
        LedgerError::arithmetic_overflow("deposit", "1234"),
        "Arithmetic overflow in deposit for account 1234"
    )]
    #[case::file_not_found(
        LedgerError::FileNotFound { path: "events.csv".to_string() },
        "File not found: events.csv"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::not_found(LedgerError::account_not_found("1"), ErrorCategory::NotFound)]
    #[case::insufficient(
        LedgerError::insufficient_funds("1", Decimal::ZERO, Decimal::ONE),
        ErrorCategory::InsufficientFunds
    )]
    #[case::amount(LedgerError::invalid_amount("0"), ErrorCategory::InvalidInput)]
    #[case::id(LedgerError::missing_account_id("destination"), ErrorCategory::InvalidInput)]
    #[case::event_type(LedgerError::invalid_event_type("x"), ErrorCategory::InvalidInput)]
    #[case::overflow(LedgerError::arithmetic_overflow("deposit", "1"), ErrorCategory::InvalidInput)]
    #[case::io(LedgerError::IoError { message: "disk full".to_string() }, ErrorCategory::Io)]
    fn test_error_category(#[case] error: LedgerError, #[case] expected: ErrorCategory) {
        assert_eq!(error.category(), expected);
    }

    #[test]
    fn test_amount_error_conversion() {
        let below: LedgerError = AmountError::BelowMinimum(Decimal::new(5, 3)).into();
        assert_eq!(below, LedgerError::invalid_amount("0.005"));

        let malformed: LedgerError = AmountError::Malformed("abc".to_string()).into();
        assert_eq!(malformed, LedgerError::invalid_amount("abc"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
        assert_eq!(error.category(), ErrorCategory::Io);
    }
}
