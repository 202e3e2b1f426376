mod common;

use certledger_core::{apply, RegistryError, NEVER_EXPIRES};
use common::{issue_cmd, new_registry, owner, subject_commitment};

// ===== ISSUANCE TESTS =====

#[test]
fn test_issue_creates_active_record() {
    let (_, hash) = subject_commitment();
    let state = new_registry();

    let (state, event) = apply(state, issue_cmd("cert-1", hash, NEVER_EXPIRES), &owner(), 1_000).unwrap();

    assert_eq!(event.certificate_id(), "cert-1");
    assert_eq!(event.name(), "issued");

    let record = state.get_record("cert-1").unwrap();
    assert_eq!(record.certificate_id, "cert-1");
    assert_eq!(record.commitment_hash, hash);
    assert_eq!(record.issued_at, 1_000);
    assert_eq!(record.expires_at, NEVER_EXPIRES);
    assert!(!record.revoked);
}

#[test]
fn test_issue_twice_with_same_id_fails() {
    let (_, hash) = subject_commitment();
    let state = new_registry();

    let (state, _) = apply(state, issue_cmd("cert-1", hash, NEVER_EXPIRES), &owner(), 1_000).unwrap();
    let first = state.get_record("cert-1").unwrap().clone();

    let result = apply(
        state.clone(),
        issue_cmd("cert-1", hash, NEVER_EXPIRES),
        &owner(),
        2_000,
    );
    match result {
        Err(RegistryError::AlreadyExists { certificate_id }) => {
            assert_eq!(certificate_id, "cert-1");
        }
        other => panic!("Expected AlreadyExists, got {:?}", other),
    }

    // The stored record after both attempts equals the first issuance's data
    assert_eq!(state.get_record("cert-1").unwrap(), &first);
}

#[test]
fn test_issue_after_revoke_still_fails() {
    // Uniqueness holds for all time: a revoked id is never reusable
    let (_, hash) = subject_commitment();
    let state = new_registry();

    let (state, _) = apply(state, issue_cmd("cert-1", hash, NEVER_EXPIRES), &owner(), 1_000).unwrap();
    let (state, _) = apply(state, common::revoke_cmd("cert-1"), &owner(), 2_000).unwrap();

    let result = apply(state, issue_cmd("cert-1", hash, NEVER_EXPIRES), &owner(), 3_000);
    assert!(matches!(result, Err(RegistryError::AlreadyExists { .. })));
}

#[test]
fn test_issue_distinct_ids_coexist() {
    let (_, hash) = subject_commitment();
    let state = new_registry();

    let (state, _) = apply(state, issue_cmd("cert-1", hash, NEVER_EXPIRES), &owner(), 1_000).unwrap();
    let (state, _) = apply(state, issue_cmd("cert-2", hash, NEVER_EXPIRES), &owner(), 1_001).unwrap();

    // Commitment hashes carry no uniqueness constraint
    assert_eq!(state.record_count(), 2);
    assert_eq!(
        state.get_record("cert-1").unwrap().commitment_hash,
        state.get_record("cert-2").unwrap().commitment_hash
    );
}

#[test]
fn test_issue_rejects_blank_certificate_id() {
    let (_, hash) = subject_commitment();
    let state = new_registry();

    let result = apply(state, issue_cmd("  \t ", hash, NEVER_EXPIRES), &owner(), 1_000);
    assert!(matches!(
        result,
        Err(RegistryError::InvalidCertificateId { .. })
    ));
}
