use certledger_core::commitment::{commit, CommitmentHash, Salt};
use certledger_core::{AccountId, Command, RegistryState};

/// The owner identity used across tests
#[allow(dead_code)]
pub fn owner() -> AccountId {
    AccountId::new("registry:owner")
}

/// Create a new empty registry owned by the test owner
#[allow(dead_code)]
pub fn new_registry() -> RegistryState {
    RegistryState::new(owner())
}

/// A deterministic subject commitment for test certificates
#[allow(dead_code)]
pub fn subject_commitment() -> (Salt, CommitmentHash) {
    let salt = Salt::from_bytes([42u8; 32]);
    let hash = commit(b"2101001", b"Jane Doe", &salt);
    (salt, hash)
}

/// Build an issue command with the given id and expiry
#[allow(dead_code)]
pub fn issue_cmd(certificate_id: &str, commitment_hash: CommitmentHash, expires_at: i64) -> Command {
    Command::Issue {
        certificate_id: certificate_id.to_string(),
        commitment_hash,
        title: "Distributed Systems".to_string(),
        issuer: "Example University".to_string(),
        expires_at,
    }
}

/// Build a revoke command for the given id
#[allow(dead_code)]
pub fn revoke_cmd(certificate_id: &str) -> Command {
    Command::Revoke {
        certificate_id: certificate_id.to_string(),
    }
}
