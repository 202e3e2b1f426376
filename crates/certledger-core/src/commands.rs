//! Command types for the registry's mutating operations
//!
//! Commands are the only mutation entry point: the execution environment
//! serializes them into a single agreed order and feeds them to the
//! `apply()` function one at a time. They are serialized verbatim into
//! sealed blocks, so the journal can replay them deterministically.

use serde::{Deserialize, Serialize};

use crate::commitment::CommitmentHash;

/// Command enum representing all mutating registry operations
///
/// Read operations (`get_record`, `verify`) are not commands: they are
/// evaluated synchronously against the latest committed state and never
/// enter the ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Create a new certificate record
    Issue {
        certificate_id: String,
        commitment_hash: CommitmentHash,
        title: String,
        issuer: String,
        expires_at: i64,
    },

    /// Permanently revoke an existing certificate record
    Revoke { certificate_id: String },
}

impl Command {
    /// The certificate id this command targets
    pub fn certificate_id(&self) -> &str {
        match self {
            Command::Issue { certificate_id, .. } => certificate_id,
            Command::Revoke { certificate_id } => certificate_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commitment::{commit, Salt};

    #[test]
    fn test_command_certificate_id() {
        let cmd = Command::Revoke {
            certificate_id: "cert-7".to_string(),
        };
        assert_eq!(cmd.certificate_id(), "cert-7");
    }

    #[test]
    fn test_command_serde_round_trip() {
        let cmd = Command::Issue {
            certificate_id: "cert-1".to_string(),
            commitment_hash: commit(b"id", b"name", &Salt::generate()),
            title: "Title".to_string(),
            issuer: "Issuer".to_string(),
            expires_at: 0,
        };

        let json = serde_json::to_string(&cmd).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
