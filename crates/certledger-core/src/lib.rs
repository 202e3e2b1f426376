//! CertLedger Core - Certificate registry state machine
//!
//! This crate provides the foundational data structures and operations for
//! CertLedger, including:
//! - The commitment scheme binding subject identity to a salted SHA-256 hash
//! - The registry ledger state machine (issue, revoke, read) with its
//!   uniqueness and monotonicity invariants
//! - The access control guard restricting mutations to the registry owner
//! - The verification engine evaluating a presented commitment against the
//!   ledger's current state and current time
//! - A command/apply functional boundary for atomic state mutations
//!
//! The core is pure: it never performs I/O, never reads the wall clock, and
//! delegates ordering of concurrent writers to the execution environment
//! (see the `certledger-engine` crate).

pub mod apply;
pub mod commands;
pub mod commitment;
pub mod errors;
pub mod events;
pub mod guard;
pub mod logging;
pub mod model;
pub mod registry;
pub mod verify;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use commitment::{commit, CommitmentHash, Salt};
pub use errors::{RegistryError, Result};
pub use events::RegistryEvent;
pub use model::{AccountId, IssueParams, Record, NEVER_EXPIRES};
pub use registry::RegistryState;
pub use verify::{verify, Verification};
