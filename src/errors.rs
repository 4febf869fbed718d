use thiserror::Error;

/// Error type that captures the crate's failure modes.
///
/// The balance and voucher passes themselves are infallible; errors arise
/// only when constructing domain values or touching the filesystem.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid voucher number: {0}")]
    InvalidVoucher(String),
}
