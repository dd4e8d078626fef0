//! Property tests for the ledger balance rules
//!
//! Random sequences of deposits, withdrawals and transfers are applied to
//! both ledger implementations and checked against the arithmetic rules.

use ledger_engine::{AsyncLedger, Ledger, LedgerOperations};
use proptest::prelude::*;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
enum Op {
    Deposit(u8, i64),
    Withdraw(u8, i64),
    Transfer(u8, u8, i64),
}

/// Amounts from 0.01 to 1000.00 in cents
fn cents() -> impl Strategy<Value = i64> {
    1i64..100_000i64
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..5, cents()).prop_map(|(id, c)| Op::Deposit(id, c)),
        (0u8..5, cents()).prop_map(|(id, c)| Op::Withdraw(id, c)),
        (0u8..5, 0u8..5, cents()).prop_map(|(o, d, c)| Op::Transfer(o, d, c)),
    ]
}

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Apply one op and return the net change in total money it should cause
fn apply<L: LedgerOperations>(ledger: &mut L, op: &Op) -> Result<Decimal, ()> {
    match op {
        Op::Deposit(id, c) => ledger
            .deposit(&id.to_string(), money(*c))
            .map(|_| money(*c))
            .map_err(|_| ()),
        Op::Withdraw(id, c) => ledger
            .withdraw(&id.to_string(), money(*c))
            .map(|_| -money(*c))
            .map_err(|_| ()),
        Op::Transfer(o, d, c) => ledger
            .transfer(&o.to_string(), &d.to_string(), money(*c))
            .map(|_| Decimal::ZERO)
            .map_err(|_| ()),
    }
}

fn total<L: LedgerOperations>(ledger: &L) -> Decimal {
    ledger.accounts().iter().map(|a| a.balance).sum()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Total money changes only by applied deposits and withdrawals, balances
    /// never go negative and a rejected op changes nothing.
    #[test]
    fn total_is_conserved_and_failures_change_nothing(ops in prop::collection::vec(op(), 1..60)) {
        let mut ledger: Ledger = Ledger::default();
        let mut expected_total = Decimal::ZERO;

        for op in &ops {
            let before = ledger.accounts();
            match apply(&mut ledger, op) {
                Ok(delta) => expected_total += delta,
                Err(()) => prop_assert_eq!(ledger.accounts(), before),
            }
            prop_assert!(ledger.accounts().iter().all(|a| a.balance >= Decimal::ZERO));
        }

        prop_assert_eq!(total(&ledger), expected_total);
    }

    /// Both ledgers agree on every outcome and on the final balances.
    #[test]
    fn sequential_and_concurrent_ledgers_agree(ops in prop::collection::vec(op(), 1..60)) {
        let mut sequential: Ledger = Ledger::default();
        let mut concurrent = AsyncLedger::default();

        for op in &ops {
            prop_assert_eq!(apply(&mut sequential, op), apply(&mut concurrent, op));
        }

        prop_assert_eq!(sequential.accounts(), LedgerOperations::accounts(&concurrent));
    }

    /// Deposit adds exactly the amount; withdraw subtracts it only when covered.
    #[test]
    fn deposit_then_withdraw_arithmetic(start in cents(), take in cents()) {
        let mut ledger: Ledger = Ledger::default();
        ledger.deposit("1234", money(start)).unwrap();
        prop_assert_eq!(ledger.balance("1234").unwrap(), money(start));

        let result = ledger.withdraw("1234", money(take));
        if take <= start {
            prop_assert_eq!(result.unwrap().balance, money(start - take));
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(ledger.balance("1234").unwrap(), money(start));
        }
    }

    /// A successful transfer keeps the pair's combined balance.
    #[test]
    fn transfer_preserves_pair_sum(a in cents(), b in cents(), moved in cents()) {
        let mut ledger: Ledger = Ledger::default();
        ledger.deposit("a", money(a)).unwrap();
        ledger.deposit("b", money(b)).unwrap();

        let result = ledger.transfer("a", "b", money(moved));

        prop_assert_eq!(result.is_ok(), moved <= a);
        prop_assert_eq!(
            ledger.balance("a").unwrap() + ledger.balance("b").unwrap(),
            money(a + b)
        );
    }
}
