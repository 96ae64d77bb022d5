//! Value store trait and in-memory implementation

use crate::LedgerResult;
use ledger_core::{Identity, Value};
use std::collections::HashMap;

/// Backing store for per-identity values
///
/// The store reports absent keys as `None`; the default-zero rule is applied
/// by the ledger on lookup, never materialized here. There is no delete:
/// the mapping grows monotonically with writers.
pub trait LedgerStore: Send + Sync {
    /// Get the value stored for an identity, if any
    fn get(&self, id: &Identity) -> LedgerResult<Option<Value>>;

    /// Set the value for an identity, creating or overwriting its entry
    fn set(&mut self, id: Identity, value: Value) -> LedgerResult<()>;

    /// Number of identities with a materialized entry
    fn len(&self) -> usize;

    /// Check whether no identity has written yet
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store implementation
#[derive(Debug, Clone, Default)]
pub struct MemoryLedgerStore {
    values: HashMap<Identity, Value>,
}

impl MemoryLedgerStore {
    /// Create new empty memory store
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn get(&self, id: &Identity) -> LedgerResult<Option<Value>> {
        Ok(self.values.get(id).copied())
    }

    fn set(&mut self, id: Identity, value: Value) -> LedgerResult<()> {
        self.values.insert(id, value);
        Ok(())
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}
