//! Ledger domain models and the balance/voucher derivations over them.

pub mod account;
pub mod balance;
pub mod entry;
pub mod statement;
pub mod voucher;

pub use account::Account;
pub use balance::{running_balances, BalanceReport};
pub use entry::LedgerEntry;
pub use statement::{DisplayOrder, Statement, StatementRow};
pub use voucher::{next_voucher_number, PaymentMode, VoucherNumber};
