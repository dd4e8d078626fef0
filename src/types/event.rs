//! Ledger event types
//!
//! This module defines the event kinds accepted by the ledger, the validated
//! event value handed to the core, and the outcome returned for each event.

use super::account::{Account, AccountId};
use super::amount::Amount;
use super::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event kinds supported by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Credit funds to a destination account, creating it if needed
    Deposit,

    /// Debit funds from an existing origin account
    Withdraw,

    /// Move funds from an existing origin to a destination account
    ///
    /// The destination is created when it does not exist yet.
    Transfer,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Deposit => "deposit",
            EventType::Withdraw => "withdraw",
            EventType::Transfer => "transfer",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(EventType::Deposit),
            "withdraw" => Ok(EventType::Withdraw),
            "transfer" => Ok(EventType::Transfer),
            _ => Err(LedgerError::invalid_event_type(s)),
        }
    }
}

/// A validated ledger event
///
/// Identifiers are non-empty and the amount is at least 0.01. Use
/// [`LedgerEvent::new`] to build one from loosely-shaped input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    Deposit {
        destination: AccountId,
        amount: Amount,
    },
    Withdraw {
        origin: AccountId,
        amount: Amount,
    },
    Transfer {
        origin: AccountId,
        destination: AccountId,
        amount: Amount,
    },
}

impl LedgerEvent {
    /// Build an event from its kind, optional identifiers and amount
    ///
    /// Deposits need a destination, withdrawals an origin and transfers both.
    /// Identifiers the kind does not use are ignored.
    ///
    /// # Errors
    ///
    /// Returns `MissingAccountId` when a required identifier is absent or blank.
    pub fn new(
        event_type: EventType,
        origin: Option<&str>,
        destination: Option<&str>,
        amount: Amount,
    ) -> Result<Self, LedgerError> {
        match event_type {
            EventType::Deposit => Ok(LedgerEvent::Deposit {
                destination: required_id(destination, "destination")?,
                amount,
            }),
            EventType::Withdraw => Ok(LedgerEvent::Withdraw {
                origin: required_id(origin, "origin")?,
                amount,
            }),
            EventType::Transfer => Ok(LedgerEvent::Transfer {
                origin: required_id(origin, "origin")?,
                destination: required_id(destination, "destination")?,
                amount,
            }),
        }
    }

    pub fn event_type(&self) -> EventType {
        match self {
            LedgerEvent::Deposit { .. } => EventType::Deposit,
            LedgerEvent::Withdraw { .. } => EventType::Withdraw,
            LedgerEvent::Transfer { .. } => EventType::Transfer,
        }
    }

    pub fn amount(&self) -> Amount {
        match self {
            LedgerEvent::Deposit { amount, .. }
            | LedgerEvent::Withdraw { amount, .. }
            | LedgerEvent::Transfer { amount, .. } => *amount,
        }
    }

    /// Every account this event reads or writes
    pub fn account_ids(&self) -> Vec<&str> {
        match self {
            LedgerEvent::Deposit { destination, .. } => vec![destination.as_str()],
            LedgerEvent::Withdraw { origin, .. } => vec![origin.as_str()],
            LedgerEvent::Transfer {
                origin,
                destination,
                ..
            } => vec![origin.as_str(), destination.as_str()],
        }
    }
}

fn required_id(id: Option<&str>, role: &str) -> Result<AccountId, LedgerError> {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(LedgerError::missing_account_id(role)),
    }
}

/// Post-event account records
///
/// Deposits fill `destination`, withdrawals fill `origin`, transfers fill both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub origin: Option<Account>,
    pub destination: Option<Account>,
}

impl EventOutcome {
    pub fn deposited(destination: Account) -> Self {
        Self {
            origin: None,
            destination: Some(destination),
        }
    }

    pub fn withdrawn(origin: Account) -> Self {
        Self {
            origin: Some(origin),
            destination: None,
        }
    }

    pub fn transferred(origin: Account, destination: Account) -> Self {
        Self {
            origin: Some(origin),
            destination: Some(destination),
        }
    }
}
