//! Registry ledger operations
//!
//! The two mutating operations (`issue`, `revoke`) and the read operation
//! (`get_record`). Both mutations invoke the access control guard before
//! touching any state, validate fully before mutating, and emit a
//! [`RegistryEvent`] on success.

use crate::errors::{RegistryError, Result};
use crate::events::RegistryEvent;
use crate::guard;
use crate::model::{AccountId, IssueParams, Record};
use crate::registry::state::RegistryState;

/// Issue a new certificate record
///
/// Creates the record with `issued_at = now` and `revoked = false`. The
/// creation is an externally observable event carrying the certificate id.
///
/// # Arguments
/// * `state` - Mutable reference to the registry state
/// * `caller` - Identity submitting the operation
/// * `params` - Certificate id, commitment hash, descriptive fields, expiry
/// * `now` - Ledger time in epoch seconds, supplied by the sequencer
///
/// # Errors
/// * `Unauthorized` - If the caller is not the registry owner
/// * `InvalidCertificateId` - If the certificate id is empty or whitespace
/// * `AlreadyExists` - If a record (active or revoked) already uses the id
pub fn issue(
    state: &mut RegistryState,
    caller: &AccountId,
    params: IssueParams,
    now: i64,
) -> Result<RegistryEvent> {
    guard::require_owner(state, caller)?;

    if params.certificate_id.trim().is_empty() {
        return Err(RegistryError::InvalidCertificateId {
            reason: "certificate id cannot be empty or whitespace-only".to_string(),
        });
    }

    // Uniqueness holds for all time: a revoked record still claims its id
    if state.contains_record(&params.certificate_id) {
        return Err(RegistryError::AlreadyExists {
            certificate_id: params.certificate_id,
        });
    }

    let certificate_id = params.certificate_id.clone();
    state.insert_record(Record {
        certificate_id: params.certificate_id,
        commitment_hash: params.commitment_hash,
        title: params.title,
        issuer: params.issuer,
        issued_at: now,
        expires_at: params.expires_at,
        revoked: false,
    });

    Ok(RegistryEvent::Issued { certificate_id })
}

/// Revoke an existing certificate record
///
/// Sets `revoked = true` permanently. A second revoke is a distinct
/// failure, not an idempotent success, so callers learn their action had
/// no effect.
///
/// # Errors
/// * `Unauthorized` - If the caller is not the registry owner
/// * `NotFound` - If no record exists for the id
/// * `AlreadyRevoked` - If the record is already revoked
pub fn revoke(
    state: &mut RegistryState,
    caller: &AccountId,
    certificate_id: &str,
) -> Result<RegistryEvent> {
    guard::require_owner(state, caller)?;

    let record = state.record_mut(certificate_id)?;
    if record.revoked {
        return Err(RegistryError::AlreadyRevoked {
            certificate_id: certificate_id.to_string(),
        });
    }
    record.revoked = true;

    Ok(RegistryEvent::Revoked {
        certificate_id: certificate_id.to_string(),
    })
}

/// Read a certificate record by id
///
/// Revoked and expired records are returned with their actual values;
/// only a truly absent id is an error.
///
/// # Errors
/// * `NotFound` - If no record exists for the id
pub fn get_record<'a>(state: &'a RegistryState, certificate_id: &str) -> Result<&'a Record> {
    state.get_record(certificate_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commitment::{commit, Salt};
    use crate::model::NEVER_EXPIRES;

    fn owner() -> AccountId {
        AccountId::new("registry:owner")
    }

    fn new_state() -> RegistryState {
        RegistryState::new(owner())
    }

    fn issue_params(certificate_id: &str) -> IssueParams {
        IssueParams {
            certificate_id: certificate_id.to_string(),
            commitment_hash: commit(b"2101001", b"Jane Doe", &Salt::generate()),
            title: "Distributed Systems".to_string(),
            issuer: "Example University".to_string(),
            expires_at: NEVER_EXPIRES,
        }
    }

    #[test]
    fn test_issue_creates_record() {
        let mut state = new_state();
        let event = issue(&mut state, &owner(), issue_params("cert-1"), 1_000).unwrap();

        assert_eq!(
            event,
            RegistryEvent::Issued {
                certificate_id: "cert-1".to_string()
            }
        );
        let record = get_record(&state, "cert-1").unwrap();
        assert_eq!(record.issued_at, 1_000);
        assert!(!record.revoked);
    }

    #[test]
    fn test_issue_rejects_duplicate_id() {
        let mut state = new_state();
        issue(&mut state, &owner(), issue_params("cert-1"), 1_000).unwrap();

        let first = get_record(&state, "cert-1").unwrap().clone();
        let result = issue(&mut state, &owner(), issue_params("cert-1"), 2_000);
        assert!(matches!(result, Err(RegistryError::AlreadyExists { .. })));

        // The stored record still equals the first issuance's data
        assert_eq!(get_record(&state, "cert-1").unwrap(), &first);
    }

    #[test]
    fn test_issue_rejects_empty_id() {
        let mut state = new_state();
        let result = issue(&mut state, &owner(), issue_params("   "), 1_000);
        assert!(matches!(
            result,
            Err(RegistryError::InvalidCertificateId { .. })
        ));
        assert_eq!(state.record_count(), 0);
    }

    #[test]
    fn test_revoke_flips_flag_once() {
        let mut state = new_state();
        issue(&mut state, &owner(), issue_params("cert-1"), 1_000).unwrap();

        let event = revoke(&mut state, &owner(), "cert-1").unwrap();
        assert_eq!(event.name(), "revoked");
        assert!(get_record(&state, "cert-1").unwrap().revoked);

        let result = revoke(&mut state, &owner(), "cert-1");
        assert!(matches!(result, Err(RegistryError::AlreadyRevoked { .. })));
        // Still revoked
        assert!(get_record(&state, "cert-1").unwrap().revoked);
    }

    #[test]
    fn test_revoke_nonexistent_fails() {
        let mut state = new_state();
        let result = revoke(&mut state, &owner(), "ghost");
        assert!(matches!(result, Err(RegistryError::NotFound { .. })));
    }

    #[test]
    fn test_non_owner_cannot_mutate() {
        let mut state = new_state();
        let mallory = AccountId::new("mallory");

        let result = issue(&mut state, &mallory, issue_params("cert-1"), 1_000);
        assert!(matches!(result, Err(RegistryError::Unauthorized { .. })));
        assert_eq!(state.record_count(), 0);

        issue(&mut state, &owner(), issue_params("cert-1"), 1_000).unwrap();
        let result = revoke(&mut state, &mallory, "cert-1");
        assert!(matches!(result, Err(RegistryError::Unauthorized { .. })));
        assert!(!get_record(&state, "cert-1").unwrap().revoked);
    }

    #[test]
    fn test_get_record_returns_revoked_record() {
        let mut state = new_state();
        issue(&mut state, &owner(), issue_params("cert-1"), 1_000).unwrap();
        revoke(&mut state, &owner(), "cert-1").unwrap();

        // Revoked is distinguishable from not found
        let record = get_record(&state, "cert-1").unwrap();
        assert!(record.revoked);
        assert_eq!(record.title, "Distributed Systems");
    }
}
