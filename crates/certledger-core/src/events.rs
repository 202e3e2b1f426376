//! Registry events emitted by mutating operations
//!
//! Every successful mutation produces exactly one event. Events are
//! externally observable, durably ordered by the execution environment
//! (they ride inside sealed blocks), and carry the certificate id for
//! downstream indexing.

use serde::{Deserialize, Serialize};

/// An externally observable registry mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A certificate record was created
    Issued { certificate_id: String },
    /// A certificate record was permanently revoked
    Revoked { certificate_id: String },
}

impl RegistryEvent {
    /// The certificate id this event concerns
    pub fn certificate_id(&self) -> &str {
        match self {
            RegistryEvent::Issued { certificate_id } => certificate_id,
            RegistryEvent::Revoked { certificate_id } => certificate_id,
        }
    }

    /// Canonical event name for logging and indexing
    pub fn name(&self) -> &'static str {
        match self {
            RegistryEvent::Issued { .. } => "issued",
            RegistryEvent::Revoked { .. } => "revoked",
        }
    }
}
