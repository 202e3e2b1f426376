//! Commitment scheme binding subject identity to the ledger
//!
//! Derives a fixed-size commitment hash from (subject identifier, subject
//! name, random salt). The hash is the only bridge between the holder's
//! plaintext identity (kept in the local commitment store) and the public
//! registry ledger: given only the hash, recovering the inputs is
//! computationally infeasible, and the salt defeats dictionary guessing of
//! low-entropy subject identifiers.
//!
//! Each input is length-prefixed before hashing so field boundaries are
//! unambiguous: `("123", "4")` and `("12", "34")` can never collide.

use std::fmt;
use std::str::FromStr;

use certledger_core_types::Sensitive;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::{RegistryError, Result};

/// Byte length of a salt
pub const SALT_LEN: usize = 32;

/// Byte length of a commitment hash (SHA-256 output)
pub const COMMITMENT_LEN: usize = 32;

/// Random secret mixed into a commitment
///
/// Generated from the OS CSPRNG and sized so that guessing a
/// (subject id, subject name) pair by brute force is infeasible even when
/// the subject id is low-entropy (e.g., a sequential student number).
/// Debug output is redacted; the raw bytes are only exposed deliberately.
#[derive(Debug, Clone)]
pub struct Salt(Sensitive<[u8; SALT_LEN]>);

impl Salt {
    /// Generate a fresh random salt from the OS CSPRNG
    pub fn generate() -> Self {
        let mut bytes = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(Sensitive::new(bytes))
    }

    /// Construct a salt from raw bytes (e.g., loaded from the local store)
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(Sensitive::new(bytes))
    }

    /// Expose the raw salt bytes
    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        self.0.expose()
    }

    /// Hex-encode the salt for persistence
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Parse a salt from its hex form
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommitment` if the input is not valid hex or does
    /// not decode to exactly [`SALT_LEN`] bytes.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| RegistryError::InvalidCommitment {
            reason: format!("salt is not valid hex: {}", e),
        })?;
        let bytes: [u8; SALT_LEN] =
            bytes
                .try_into()
                .map_err(|v: Vec<u8>| RegistryError::InvalidCommitment {
                    reason: format!("salt must be {} bytes, got {}", SALT_LEN, v.len()),
                })?;
        Ok(Self::from_bytes(bytes))
    }
}

impl PartialEq for Salt {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Salt {}

/// Fixed-width commitment hash stored on the registry ledger
///
/// Serialized as a lowercase hex string. Carries no uniqueness constraint:
/// collisions across unrelated records are harmless because verification
/// also checks the certificate id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitmentHash([u8; COMMITMENT_LEN]);

impl CommitmentHash {
    /// Construct from raw digest bytes
    pub fn from_bytes(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw digest bytes
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    /// Hex-encode the hash
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for CommitmentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for CommitmentHash {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| RegistryError::InvalidCommitment {
            reason: format!("commitment hash is not valid hex: {}", e),
        })?;
        let bytes: [u8; COMMITMENT_LEN] =
            bytes
                .try_into()
                .map_err(|v: Vec<u8>| RegistryError::InvalidCommitment {
                    reason: format!(
                        "commitment hash must be {} bytes, got {}",
                        COMMITMENT_LEN,
                        v.len()
                    ),
                })?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for CommitmentHash {
    type Error = RegistryError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CommitmentHash> for String {
    fn from(hash: CommitmentHash) -> Self {
        hash.to_hex()
    }
}

/// Derive a commitment hash from subject identity and salt
///
/// Deterministic and total: identical inputs always produce the identical
/// output, and every well-formed byte input hashes successfully. Each
/// field is prefixed with its length as a big-endian u64 so adjacent
/// fields cannot be reinterpreted across their boundary.
pub fn commit(subject_id: &[u8], subject_name: &[u8], salt: &Salt) -> CommitmentHash {
    let mut hasher = Sha256::new();
    for field in [subject_id, subject_name, salt.as_bytes().as_slice()] {
        hasher.update((field.len() as u64).to_be_bytes());
        hasher.update(field);
    }
    CommitmentHash(hasher.finalize().into())
}
