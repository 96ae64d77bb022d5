//! Ledger error types

use ledger_core::Identity;
use thiserror::Error;

/// Ledger error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Privileged read attempted by a non-owner caller
    #[error("Unauthorized: caller {caller} is not the owner")]
    Unauthorized { caller: Identity },

    /// Store backend error
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
