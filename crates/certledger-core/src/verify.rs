//! Verification engine
//!
//! Evaluates a presented commitment hash against the ledger's current
//! state and current time. Verification degrades gracefully: a negative
//! result is meaningful output, not an error, so a nonexistent record
//! yields `valid = false` with default fields rather than a failure.
//!
//! The comparison is hash-against-hash, never plaintext identity: only a
//! verifier who independently holds (subject id, subject name, salt) -
//! typically from the holder's local commitment store - can produce a
//! matching hash, so the public ledger never learns who the certificate
//! belongs to.

use serde::Serialize;

use crate::commitment::CommitmentHash;
use crate::registry::RegistryState;

/// Structured verification result
///
/// The descriptive fields are populated whenever the record exists,
/// regardless of `valid`, so a caller can distinguish *why* verification
/// failed (wrong hash vs. revoked vs. expired) without a second call. For
/// a nonexistent record nothing is known and every field is zero/default.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Verification {
    /// True iff the record exists, the presented hash matches, the record
    /// is not revoked, and the record is not expired
    pub valid: bool,
    pub is_revoked: bool,
    pub issued_at: i64,
    pub expires_at: i64,
    pub title: String,
    pub issuer: String,
}

/// Verify a certificate against a presented commitment hash
///
/// `now` is epoch seconds; expiry uses the inclusive boundary rule (a
/// record with `expires_at = T` is valid at `T - 1` and invalid at `T`).
pub fn verify(
    state: &RegistryState,
    certificate_id: &str,
    presented: &CommitmentHash,
    now: i64,
) -> Verification {
    let Some(record) = state.find_record(certificate_id) else {
        return Verification::default();
    };

    let hash_matches = record.commitment_hash == *presented;
    let expired = record.is_expired(now);

    Verification {
        valid: hash_matches && !record.revoked && !expired,
        is_revoked: record.revoked,
        issued_at: record.issued_at,
        expires_at: record.expires_at,
        title: record.title.clone(),
        issuer: record.issuer.clone(),
    }
}
