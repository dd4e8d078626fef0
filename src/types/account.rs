//! Account-related types for the ledger engine
//!
//! This module defines the Account record owned by the account stores.

use rust_decimal::Decimal;

/// Account identifier
///
/// Opaque, non-empty string. Ordering is plain string ordering, which is also
/// the order of balance output.
pub type AccountId = String;

/// Account record
///
/// The store owns every record; ledger operations work on clones and write
/// them back once all checks have passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique account identifier
    pub id: AccountId,

    /// Current balance
    ///
    /// Never negative after a committed operation.
    pub balance: Decimal,
}

impl Account {
    /// Create an account record with the given opening balance
    pub fn new(id: impl Into<AccountId>, balance: Decimal) -> Self {
        Account {
            id: id.into(),
            balance,
        }
    }
}
