//! Thread-safe ledger wrapper

use crate::ledger::Ledger;
use crate::store::LedgerStore;
use crate::LedgerResult;
use ledger_core::{Identity, Value};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe ledger wrapper
///
/// Outside an environment that already serializes calls, one lock per
/// ledger instance preserves the atomicity of each operation: no torn
/// reads, no interleaved writes to the same key. Cloning shares the
/// underlying instance.
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    /// Create a new shared ledger owned by `owner`, backed by memory
    pub fn new(owner: Identity) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Ledger::new(owner))),
        }
    }

    /// Create a shared ledger over an explicit store
    pub fn with_store(owner: Identity, store: Box<dyn LedgerStore>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Ledger::with_store(owner, store))),
        }
    }

    /// The identity that constructed the ledger
    pub fn owner(&self) -> Identity {
        *self.inner.read().owner()
    }

    /// Number of identities that have ever written
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check whether no identity has written yet
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Get the caller's own stored value
    pub fn get_stored_data(&self, caller: &Identity) -> LedgerResult<Value> {
        self.inner.read().get_stored_data(caller)
    }

    /// Set the caller's own stored value
    pub fn set_stored_data(&self, caller: Identity, value: Value) -> LedgerResult<()> {
        self.inner.write().set_stored_data(caller, value)
    }

    /// Get any identity's stored value, owner only
    pub fn get_count(&self, caller: &Identity, target: &Identity) -> LedgerResult<Value> {
        self.inner.read().get_count(caller, target)
    }
}

impl Clone for SharedLedger {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(byte: u8) -> Identity {
        Identity::new([byte; 20])
    }

    #[test]
    fn test_shared_ledger_basics() {
        let owner = id(0);
        let shared = SharedLedger::new(owner);
        let alice = id(1);

        shared.set_stored_data(alice, 42).unwrap();
        assert_eq!(shared.get_stored_data(&alice).unwrap(), 42);
        assert_eq!(shared.get_count(&owner, &alice).unwrap(), 42);
        assert!(shared.get_count(&alice, &alice).is_err());
    }

    #[test]
    fn test_clones_share_state() {
        let shared = SharedLedger::new(id(0));
        let cloned = shared.clone();
        let alice = id(1);

        shared.set_stored_data(alice, 7).unwrap();
        assert_eq!(cloned.get_stored_data(&alice).unwrap(), 7);
    }

    #[test]
    fn test_concurrent_writers() {
        let shared = SharedLedger::new(id(0));

        let handles: Vec<_> = (1u8..=8)
            .map(|n| {
                let ledger = shared.clone();
                std::thread::spawn(move || {
                    let caller = id(n);
                    ledger.set_stored_data(caller, n as u128 * 10).unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 8);
        for n in 1u8..=8 {
            assert_eq!(shared.get_stored_data(&id(n)).unwrap(), n as u128 * 10);
        }
    }
}
