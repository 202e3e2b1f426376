//! Access control guard for mutating operations
//!
//! Mutation rights over the registry belong exclusively to the owner
//! identity fixed at registry creation. The guard is an explicit
//! capability check invoked as the first step of every mutating
//! operation, before any state is inspected or changed; read operations
//! (`get_record`, `verify`) are public and never guarded.

use crate::errors::{RegistryError, Result};
use crate::model::AccountId;
use crate::registry::RegistryState;

/// Require that the caller is the registry owner
///
/// # Errors
///
/// Returns `Unauthorized` unless `caller` equals the owner identity
/// recorded at registry creation.
pub fn require_owner(state: &RegistryState, caller: &AccountId) -> Result<()> {
    if state.owner() != caller {
        return Err(RegistryError::Unauthorized {
            caller: caller.to_string(),
        });
    }
    Ok(())
}
