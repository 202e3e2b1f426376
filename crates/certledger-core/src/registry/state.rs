use std::collections::HashMap;

use crate::errors::{RegistryError, Result};
use crate::model::{AccountId, Record};

/// In-memory registry ledger state
///
/// Holds the authoritative mapping from certificate id to record plus the
/// owner identity fixed at registry creation. Not thread-safe by design:
/// the execution environment guarantees at most one mutating operation is
/// in flight against the state at a time, so no internal locking is
/// needed. All access is encapsulated here so the per-record invariants
/// have a single enforcement point.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryState {
    /// Owner identity recorded at registry creation, immutable
    owner: AccountId,
    /// Map of certificate id to record
    records: HashMap<String, Record>,
}

impl RegistryState {
    /// Create a new empty registry owned by the given identity
    pub fn new(owner: AccountId) -> Self {
        Self {
            owner,
            records: HashMap::new(),
        }
    }

    /// The registry owner identity
    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// Get a record by certificate id
    ///
    /// Revoked and expired records are returned with their actual field
    /// values so callers can distinguish "revoked" from "not found."
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for the id.
    pub fn get_record(&self, certificate_id: &str) -> Result<&Record> {
        self.records
            .get(certificate_id)
            .ok_or_else(|| RegistryError::NotFound {
                certificate_id: certificate_id.to_string(),
            })
    }

    /// Look up a record without treating absence as an error
    pub fn find_record(&self, certificate_id: &str) -> Option<&Record> {
        self.records.get(certificate_id)
    }

    /// Check whether a record exists for the id (active or revoked)
    pub fn contains_record(&self, certificate_id: &str) -> bool {
        self.records.contains_key(certificate_id)
    }

    /// Number of records ever issued
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Get a mutable reference to a record by certificate id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for the id.
    pub(crate) fn record_mut(&mut self, certificate_id: &str) -> Result<&mut Record> {
        self.records
            .get_mut(certificate_id)
            .ok_or_else(|| RegistryError::NotFound {
                certificate_id: certificate_id.to_string(),
            })
    }

    /// Insert a record into the ledger
    ///
    /// Internal: callers go through `ops::issue`, which enforces the
    /// uniqueness invariant before insertion.
    pub(crate) fn insert_record(&mut self, record: Record) {
        self.records.insert(record.certificate_id.clone(), record);
    }
}
