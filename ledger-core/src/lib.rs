//! Core types for the owner-gated storage ledger
//!
//! This crate provides the fundamental building blocks shared by the
//! ledger state machine and its harnesses:
//! - Basic types (`Identity`, `Value`)
//! - Core error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::*;
pub use types::*;
