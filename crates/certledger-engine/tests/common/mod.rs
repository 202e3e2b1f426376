use certledger_core::commitment::{commit, CommitmentHash, Salt};
use certledger_core::{AccountId, Command};
use certledger_engine::{FixedClock, Sequencer};

/// The owner identity used across tests
#[allow(dead_code)]
pub fn owner() -> AccountId {
    AccountId::new("registry:owner")
}

/// In-memory sequencer plus a shared handle to its clock
#[allow(dead_code)]
pub fn new_sequencer(start: i64) -> (Sequencer, FixedClock) {
    let clock = FixedClock::new(start);
    let sequencer = Sequencer::in_memory(owner(), Box::new(clock.clone())).unwrap();
    (sequencer, clock)
}

/// A deterministic subject commitment for test certificates
#[allow(dead_code)]
pub fn subject_commitment() -> CommitmentHash {
    commit(b"2101001", b"Jane Doe", &Salt::from_bytes([42u8; 32]))
}

/// Build an issue command with the given id and expiry
#[allow(dead_code)]
pub fn issue_cmd(certificate_id: &str, expires_at: i64) -> Command {
    Command::Issue {
        certificate_id: certificate_id.to_string(),
        commitment_hash: subject_commitment(),
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
