//! The owner-gated ledger state machine

use crate::store::{LedgerStore, MemoryLedgerStore};
use crate::{LedgerError, LedgerResult};
use ledger_core::{Identity, Value};
use tracing::{debug, info, warn};

/// Owner-gated per-identity value ledger
///
/// Holds one integer value per caller identity and enforces a two-tier read
/// policy: every identity reads and writes only its own value, while the
/// owner fixed at construction may additionally query any identity's value
/// via [`Ledger::get_count`].
///
/// Caller identity is an explicit parameter on every operation; the ledger
/// holds no ambient notion of "current caller". The ledger itself is not
/// synchronized; wrap it in [`crate::SharedLedger`] when calls are not
/// already serialized by the environment.
pub struct Ledger {
    /// Identity fixed at construction with exclusive privileged-read rights
    owner: Identity,
    /// Per-identity values, absent keys read as zero
    store: Box<dyn LedgerStore>,
}

impl Ledger {
    /// Create a new ledger owned by `owner`, backed by an in-memory store
    pub fn new(owner: Identity) -> Self {
        Self::with_store(owner, Box::new(MemoryLedgerStore::new()))
    }

    /// Create a new ledger owned by `owner` over an explicit store
    pub fn with_store(owner: Identity, store: Box<dyn LedgerStore>) -> Self {
        info!("Creating ledger with owner {}", owner);
        Self { owner, store }
    }

    /// The identity that constructed the ledger
    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    /// Number of identities that have ever written
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check whether no identity has written yet
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get the caller's own stored value
    ///
    /// Returns `0` for a caller that has never written. No authorization
    /// check; every identity may read its own value. Never mutates state.
    pub fn get_stored_data(&self, caller: &Identity) -> LedgerResult<Value> {
        let value = self.store.get(caller)?.unwrap_or(0);
        debug!("get_stored_data caller={} value={}", caller, value);
        Ok(value)
    }

    /// Set the caller's own stored value
    ///
    /// Creates the caller's entry if absent, overwrites it if present. No
    /// other entry is touched.
    pub fn set_stored_data(&mut self, caller: Identity, value: Value) -> LedgerResult<()> {
        info!("set_stored_data caller={} value={}", caller, value);
        self.store.set(caller, value)
    }

    /// Get any identity's stored value, owner only
    ///
    /// Succeeds only when `caller` equals the owner; any other caller is
    /// rejected with [`LedgerError::Unauthorized`] before the store is
    /// read, leaving state untouched. Denial is a distinct error variant
    /// so it can never be confused with a stored value of `0`.
    pub fn get_count(&self, caller: &Identity, target: &Identity) -> LedgerResult<Value> {
        if *caller != self.owner {
            warn!("get_count denied for caller={} target={}", caller, target);
            return Err(LedgerError::Unauthorized { caller: *caller });
        }

        let value = self.store.get(target)?.unwrap_or(0);
        debug!("get_count owner read target={} value={}", target, value);
        Ok(value)
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("owner", &self.owner)
            .field("entries", &self.store.len())
            .finish()
    }
}
