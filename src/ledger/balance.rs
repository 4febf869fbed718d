//! Running-balance derivation over an account's transaction history.

use crate::ledger::entry::LedgerEntry;
use crate::money::Money;

/// Derived balances for one pass over a transaction list. Display data
/// only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReport {
    /// Running balance after each entry, parallel to the input order.
    pub balances: Vec<Money>,
    pub total_deposit: Money,
    pub total_withdrawal: Money,
    /// Balance after the last entry, or the opening balance when the
    /// input is empty.
    pub ending_balance: Money,
}

/// Accumulates running balances over `entries` starting from `opening`.
///
/// Entries must already be in chronological-ascending order; reversing for
/// "newest first" display is strictly the caller's job and must happen
/// after this pass, never before (see [`Statement`](crate::ledger::Statement)).
/// Totals are independent reductions over the full list, not carried from
/// the running accumulator. Negative balances are returned as-is.
pub fn running_balances(entries: &[LedgerEntry], opening: Money) -> BalanceReport {
    let mut balances = Vec::with_capacity(entries.len());
    let mut accumulator = opening;
    for entry in entries {
        accumulator += entry.signed_amount();
        balances.push(accumulator);
    }
    let total_deposit = entries.iter().map(|entry| entry.deposit).sum();
    let total_withdrawal = entries.iter().map(|entry| entry.withdrawal).sum();
    let ending_balance = balances.last().copied().unwrap_or(opening);
    BalanceReport {
        balances,
        total_deposit,
        total_withdrawal,
        ending_balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::voucher::{PaymentMode, VoucherNumber};
    use chrono::NaiveDate;

    fn entry(id: u64, deposit: i64, withdrawal: i64) -> LedgerEntry {
        let voucher = VoucherNumber::new(
            PaymentMode::Cash,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            id as u32,
        );
        if withdrawal > 0 {
            LedgerEntry::withdrawal(id, voucher, Money::from_minor_units(withdrawal)).unwrap()
        } else {
            LedgerEntry::deposit(id, voucher, Money::from_minor_units(deposit)).unwrap()
        }
    }

    #[test]
    fn empty_history_falls_back_to_opening() {
        let report = running_balances(&[], Money::from_minor_units(100_000));
        assert!(report.balances.is_empty());
        assert_eq!(report.ending_balance.minor_units(), 100_000);
        assert_eq!(report.total_deposit, Money::ZERO);
        assert_eq!(report.total_withdrawal, Money::ZERO);
    }

    #[test]
    fn balances_run_parallel_to_input() {
        let entries = vec![entry(1, 50_000, 0), entry(2, 0, 20_000), entry(3, 0, 0)];
        let report = running_balances(&entries, Money::from_minor_units(100_000));
        assert_eq!(report.balances.len(), entries.len());
        let cents: Vec<i64> = report.balances.iter().map(Money::minor_units).collect();
        assert_eq!(cents, vec![150_000, 130_000, 130_000]);
        assert_eq!(report.total_deposit.minor_units(), 50_000);
        assert_eq!(report.total_withdrawal.minor_units(), 20_000);
        assert_eq!(report.ending_balance.minor_units(), 130_000);
    }

    #[test]
    fn negative_balances_are_surfaced_unclamped() {
        let entries = vec![entry(1, 0, 150_000)];
        let report = running_balances(&entries, Money::from_minor_units(100_000));
        assert_eq!(report.ending_balance.minor_units(), -50_000);
        assert!(report.ending_balance.is_negative());
    }
}
