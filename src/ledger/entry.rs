use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::voucher::VoucherNumber;
use crate::money::Money;

/// One row of an account's transaction history, as returned by the backend.
///
/// Exactly one of `deposit`/`withdrawal` is non-zero when an entry is
/// created through [`LedgerEntry::deposit`] or [`LedgerEntry::withdrawal`];
/// rows deserialized from the backend may carry zero on both sides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Backend row id; stable tiebreak when voucher dates collide.
    pub id: u64,
    pub voucher_no: VoucherNumber,
    pub voucher_date: NaiveDate,
    #[serde(default)]
    pub deposit: Money,
    #[serde(default)]
    pub withdrawal: Money,
    /// Server-computed running balance, present on persisted ledger rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outs_balance: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particulars: Option<String>,
}

impl LedgerEntry {
    /// Creates a deposit entry. The amount must be non-negative.
    pub fn deposit(
        id: u64,
        voucher_no: VoucherNumber,
        amount: Money,
    ) -> Result<Self, LedgerError> {
        Ok(Self {
            id,
            voucher_date: voucher_no.date,
            voucher_no,
            deposit: validate_amount(amount)?,
            withdrawal: Money::ZERO,
            outs_balance: None,
            particulars: None,
        })
    }

    /// Creates a withdrawal entry. The amount must be non-negative.
    pub fn withdrawal(
        id: u64,
        voucher_no: VoucherNumber,
        amount: Money,
    ) -> Result<Self, LedgerError> {
        Ok(Self {
            id,
            voucher_date: voucher_no.date,
            voucher_no,
            deposit: Money::ZERO,
            withdrawal: validate_amount(amount)?,
            outs_balance: None,
            particulars: None,
        })
    }

    pub fn with_particulars(mut self, particulars: impl Into<String>) -> Self {
        self.particulars = Some(particulars.into());
        self
    }

    /// Net effect of the entry on the account balance.
    pub fn signed_amount(&self) -> Money {
        self.deposit - self.withdrawal
    }
}

fn validate_amount(amount: Money) -> Result<Money, LedgerError> {
    if amount.is_negative() {
        return Err(LedgerError::InvalidAmount(format!(
            "negative entry amount {amount}"
        )));
    }
    Ok(amount)
}
