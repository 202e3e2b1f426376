//! Functional-boundary apply function
//!
//! This module provides the `apply()` function, the canonical entry point
//! for atomic registry mutations.
//!
//! ## Atomicity Contract
//!
//! The `apply()` function guarantees:
//! - **All-or-nothing**: Either the entire command succeeds and returns a
//!   valid new state plus its event, or it fails and no observable state
//!   changed (operations validate fully before mutating)
//! - **No panics**: Invalid input returns typed errors
//! - **Determinism**: The same (state, command, caller, now) always yields
//!   the same outcome, which is what lets the journal replay blocks
//!
//! ## Example
//!
//! ```
//! use certledger_core::{apply, AccountId, Command, RegistryState};
//! use certledger_core::commitment::{commit, Salt};
//!
//! let owner = AccountId::new("registry:owner");
//! let state = RegistryState::new(owner.clone());
//! let cmd = Command::Issue {
//!     certificate_id: "cert-1".to_string(),
//!     commitment_hash: commit(b"2101001", b"Jane Doe", &Salt::generate()),
//!     title: "Distributed Systems".to_string(),
//!     issuer: "Example University".to_string(),
//!     expires_at: 0,
//! };
//!
//! let (new_state, event) = apply(state, cmd, &owner, 1_700_000_000).unwrap();
//! assert_eq!(event.certificate_id(), "cert-1");
//! assert_eq!(new_state.record_count(), 1);
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::events::RegistryEvent;
use crate::model::{AccountId, IssueParams};
use crate::registry::{ops, RegistryState};

/// Apply a command to the registry state, returning the new state and the
/// event the mutation emitted
///
/// Takes ownership of the current state, executes the command atomically,
/// and returns either a new valid state or a typed error. The caller (the
/// sequencer) supplies the serialization context: the identity that
/// submitted the command and the agreed ledger time for the containing
/// block.
///
/// # Errors
///
/// Returns the error of the underlying operation (`Unauthorized`,
/// `AlreadyExists`, `NotFound`, `AlreadyRevoked`,
/// `InvalidCertificateId`); on error the state the caller cloned from
/// remains valid and unchanged.
pub fn apply(
    mut state: RegistryState,
    cmd: Command,
    caller: &AccountId,
    now: i64,
) -> Result<(RegistryState, RegistryEvent)> {
    match cmd {
        Command::Issue {
            certificate_id,
            commitment_hash,
            title,
            issuer,
            expires_at,
        } => {
            let event = ops::issue(
                &mut state,
                caller,
                IssueParams {
                    certificate_id,
                    commitment_hash,
                    title,
                    issuer,
                    expires_at,
                },
                now,
            )?;
            Ok((state, event))
        }

        Command::Revoke { certificate_id } => {
            let event = ops::revoke(&mut state, caller, &certificate_id)?;
            Ok((state, event))
        }
    }
}
