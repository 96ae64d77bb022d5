//! Owner-gated ledger state machine
//!
//! This crate provides the ledger itself: a per-identity value store with a
//! two-tier read authorization policy. Every identity may read and write its
//! own value; only the owner fixed at construction may query an arbitrary
//! identity's value.

pub mod error;
pub mod ledger;
pub mod shared;
pub mod store;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use shared::SharedLedger;
pub use store::{LedgerStore, MemoryLedgerStore};
