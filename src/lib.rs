#![doc(test(attr(deny(warnings))))]

//! Ledger Core provides the voucher-numbering and running-balance
//! primitives behind a back-office ledger viewer, together with the
//! domain types and account configuration they operate on.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod money;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}
