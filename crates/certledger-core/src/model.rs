use serde::{Deserialize, Serialize};

use crate::commitment::CommitmentHash;

/// Sentinel `expires_at` value meaning the certificate never expires.
pub const NEVER_EXPIRES: i64 = 0;

/// Identity of an account interacting with the registry
///
/// Opaque to the core: the execution environment decides what an account
/// identity looks like (a key fingerprint, an address, a service name).
/// The access control guard only ever compares identities for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account identity from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record - one per issued certificate, held by the registry ledger
///
/// Every field except `revoked` is immutable after issuance; `revoked`
/// transitions only false→true and never reverts. The record never stores
/// subject identity: only the commitment hash binds it to a
/// (subject id, subject name, salt) tuple held off-ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque unique identifier, assigned by the issuer at creation time
    pub certificate_id: String,

    /// Salted SHA-256 commitment binding the record to its subject
    pub commitment_hash: CommitmentHash,

    /// Human-readable certificate title
    pub title: String,

    /// Issuing organisation
    pub issuer: String,

    /// Epoch seconds at which the record was created (ledger time)
    pub issued_at: i64,

    /// Epoch seconds after which the certificate is expired, or
    /// [`NEVER_EXPIRES`] for no expiry
    pub expires_at: i64,

    /// Revocation flag - starts false, one-way transition to true
    pub revoked: bool,
}

impl Record {
    /// Check whether this record is expired at the given time
    ///
    /// Effective expiry is derived, never stored: a record with the
    /// [`NEVER_EXPIRES`] sentinel is never expired; otherwise the boundary
    /// is inclusive (`now >= expires_at` means expired).
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at != NEVER_EXPIRES && now >= self.expires_at
    }

    /// Check whether this record carries the never-expires sentinel
    pub fn never_expires(&self) -> bool {
        self.expires_at == NEVER_EXPIRES
    }
}

/// Parameters for issuing a new certificate
#[derive(Debug, Clone, PartialEq)]
pub struct IssueParams {
    pub certificate_id: String,
    pub commitment_hash: CommitmentHash,
    pub title: String,
    pub issuer: String,
    pub expires_at: i64,
}
