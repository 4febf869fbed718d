//! Display-ordered statement assembly.
//!
//! This is the only place that sorts or reverses a transaction list. The
//! accumulation pass always runs chronologically ascending; `NewestFirst`
//! reverses the assembled rows afterwards. Reversing before accumulation
//! would silently produce wrong running balances.

use tracing::warn;

use crate::ledger::account::Account;
use crate::ledger::balance::{running_balances, BalanceReport};
use crate::ledger::entry::LedgerEntry;
use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

/// One rendered statement line: the entry plus its running balance.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow {
    pub entry: LedgerEntry,
    /// Locally recomputed running balance after this entry.
    pub computed_balance: Money,
}

impl StatementRow {
    /// Balance shown to the user. The server-computed value is
    /// authoritative when the row carries one; client-entry previews fall
    /// back to the recomputed value.
    pub fn display_balance(&self) -> Money {
        self.entry.outs_balance.unwrap_or(self.computed_balance)
    }
}

/// A fully assembled ledger statement for one account.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub rows: Vec<StatementRow>,
    pub total_deposit: Money,
    pub total_withdrawal: Money,
    pub ending_balance: Money,
    pub order: DisplayOrder,
}

impl Statement {
    /// Sorts `entries` chronologically ascending (row id breaks voucher-date
    /// ties), runs the balance pass, and orders the rows for display.
    pub fn build(account: &Account, mut entries: Vec<LedgerEntry>, order: DisplayOrder) -> Self {
        entries.sort_by(|a, b| {
            a.voucher_date
                .cmp(&b.voucher_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        let BalanceReport {
            balances,
            total_deposit,
            total_withdrawal,
            ending_balance,
        } = running_balances(&entries, account.opening_balance);

        let mut rows: Vec<StatementRow> = entries
            .into_iter()
            .zip(balances)
            .map(|(entry, computed_balance)| {
                if let Some(server) = entry.outs_balance {
                    if server != computed_balance {
                        warn!(
                            account = %account.name,
                            entry_id = entry.id,
                            server_balance = %server,
                            computed_balance = %computed_balance,
                            "server and recomputed running balances disagree"
                        );
                    }
                }
                StatementRow {
                    entry,
                    computed_balance,
                }
            })
            .collect();
        if order == DisplayOrder::NewestFirst {
            rows.reverse();
        }
        Self {
            rows,
            total_deposit,
            total_withdrawal,
            ending_balance,
            order,
        }
    }
}
