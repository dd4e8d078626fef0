//! Validated monetary amounts
//!
//! Every amount that moves money must be at least [`MIN_AMOUNT`]. The check is
//! done once at the boundary when an event is parsed and again inside each
//! ledger operation before any record is touched.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest amount a deposit, withdrawal or transfer may carry (0.01)
pub const MIN_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Errors raised while constructing an [`Amount`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount must be at least {MIN_AMOUNT} (got {0})")]
    BelowMinimum(Decimal),

    #[error("invalid amount format '{0}'")]
    Malformed(String),
}

/// A monetary amount of at least 0.01
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Validate a raw decimal
    ///
    /// Zero, negative values and anything below 0.01 are rejected.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < MIN_AMOUNT {
            return Err(AmountError::BelowMinimum(value));
        }
        Ok(Self(value))
    }

    /// The underlying decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Reject input the decimal type would have to round
        let value = Decimal::from_str_exact(s.trim())
            .map_err(|_| AmountError::Malformed(s.to_string()))?;
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
