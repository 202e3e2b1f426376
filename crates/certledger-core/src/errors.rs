use thiserror::Error;

/// Result type alias using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Comprehensive error taxonomy for CertLedger operations
///
/// Every variant maps to a stable error code via [`RegistryError::code`],
/// usable for programmatic handling, structured logging, and external API
/// responses. All errors are surfaced synchronously to the immediate
/// caller; there is no internal recovery or silent suppression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    // ===== Access Control Errors =====
    /// Caller is not the registry owner
    #[error("Unauthorized: {caller} is not the registry owner")]
    Unauthorized { caller: String },

    // ===== Registry State Errors =====
    /// Issuance attempted for a certificate id already present
    #[error("Certificate already exists: {certificate_id}")]
    AlreadyExists { certificate_id: String },

    /// Operation referenced a certificate id with no record
    #[error("Certificate not found: {certificate_id}")]
    NotFound { certificate_id: String },

    /// Revoke attempted on an already-revoked certificate
    ///
    /// Deliberately a distinct failure rather than an idempotent success,
    /// so callers learn their action had no effect.
    #[error("Certificate already revoked: {certificate_id}")]
    AlreadyRevoked { certificate_id: String },

    // ===== Validation Errors =====
    /// Certificate id is empty or whitespace-only
    #[error("Invalid certificate id: {reason}")]
    InvalidCertificateId { reason: String },

    /// Commitment hash could not be parsed (bad hex or wrong length)
    #[error("Invalid commitment hash: {reason}")]
    InvalidCommitment { reason: String },

    // ===== Submission Boundary Errors =====
    /// A submitted transaction did not finalize within the caller's budget
    #[error("Transaction {tx_id} did not finalize within the caller's deadline")]
    PendingTimeout { tx_id: String },

    /// A transaction id was never submitted to this sequencer
    #[error("Unknown transaction: {tx_id}")]
    UnknownTransaction { tx_id: String },

    // ===== Persistence Errors =====
    /// The block journal failed integrity verification during replay
    #[error("Journal corrupt: {reason}")]
    JournalCorrupt { reason: String },

    /// Underlying storage failure
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl RegistryError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::Unauthorized { .. } => "ERR_UNAUTHORIZED",
            RegistryError::AlreadyExists { .. } => "ERR_ALREADY_EXISTS",
            RegistryError::NotFound { .. } => "ERR_NOT_FOUND",
            RegistryError::AlreadyRevoked { .. } => "ERR_ALREADY_REVOKED",
            RegistryError::InvalidCertificateId { .. } => "ERR_INVALID_CERTIFICATE_ID",
            RegistryError::InvalidCommitment { .. } => "ERR_INVALID_COMMITMENT",
            RegistryError::PendingTimeout { .. } => "ERR_PENDING_TIMEOUT",
            RegistryError::UnknownTransaction { .. } => "ERR_UNKNOWN_TRANSACTION",
            RegistryError::JournalCorrupt { .. } => "ERR_JOURNAL_CORRUPT",
            RegistryError::Persistence { .. } => "ERR_PERSISTENCE",
            RegistryError::Serialization { .. } => "ERR_SERIALIZATION",
        }
    }
}

/// Conversion from serde_json::Error to RegistryError
impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Serialization {
            message: err.to_string(),
        }
    }
}
