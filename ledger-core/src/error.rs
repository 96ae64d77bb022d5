//! Error types for the core crate

use thiserror::Error;

/// Core ledger errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
