//! Migration checksum computation

use sha2::{Digest, Sha256};

/// Compute the SHA-256 checksum of a migration's SQL text
pub fn compute_checksum(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    hex::encode(hasher.finalize())
}
