use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

/// An account whose transaction history the ledger viewer renders.
///
/// The opening balance is external input (per-account configuration);
/// it is never derived from the transaction list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub opening_balance: Money,
}

impl Account {
    pub fn new(name: impl Into<String>, opening_balance: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            opening_balance,
        }
    }
}
