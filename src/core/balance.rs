//! Balance rules shared by every ledger implementation
//!
//! These functions are pure: they take the records read from a store and
//! return the records to write back, or the error that stops the operation.
//! Nothing here touches a store, so callers can run every check before the
//! first write.

use crate::types::{Account, Amount, LedgerError};
use rust_decimal::Decimal;

/// Reject amounts below 0.01 (including zero and negatives)
pub(crate) fn checked_amount(amount: Decimal) -> Result<Decimal, LedgerError> {
    Ok(Amount::new(amount)?.value())
}

/// Reject blank identifiers
pub(crate) fn checked_id<'a>(id: &'a str, role: &str) -> Result<&'a str, LedgerError> {
    if id.trim().is_empty() {
        return Err(LedgerError::missing_account_id(role));
    }
    Ok(id)
}

/// Add `amount` to an account, or open it with `amount` when absent
pub(crate) fn credit(
    existing: Option<Account>,
    id: &str,
    amount: Decimal,
    operation: &str,
) -> Result<Account, LedgerError> {
    match existing {
        Some(mut account) => {
            account.balance = account
                .balance
                .checked_add(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow(operation, id))?;
            Ok(account)
        }
        None => Ok(Account::new(id, amount)),
    }
}

/// Subtract `amount` from an account that holds at least that much
pub(crate) fn debit(mut account: Account, amount: Decimal) -> Result<Account, LedgerError> {
    if account.balance < amount {
        return Err(LedgerError::insufficient_funds(
            &account.id,
            account.balance,
            amount,
        ));
    }
    account.balance -= amount;
    Ok(account)
}

/// Compute both post-transfer records without writing anything
///
/// The origin must exist and cover `amount`. A missing destination is opened
/// with `amount`. When origin and destination are the same account the
/// record comes back unchanged, twice.
pub(crate) fn plan_transfer(
    origin: Option<Account>,
    destination: Option<Account>,
    origin_id: &str,
    destination_id: &str,
    amount: Decimal,
) -> Result<(Account, Account), LedgerError> {
    let origin = origin.ok_or_else(|| LedgerError::account_not_found(origin_id))?;

    if origin_id == destination_id {
        debit(origin.clone(), amount)?;
        return Ok((origin.clone(), origin));
    }

    let origin = debit(origin, amount)?;
    let destination = credit(destination, destination_id, amount, "transfer")?;
    Ok((origin, destination))
}
