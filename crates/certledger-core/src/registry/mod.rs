//! Registry ledger - authoritative certificate state machine
//!
//! States per certificate id: `NonExistent → Active → Revoked` (terminal).
//! `Active` has a derived read-time sub-state `Expired`, computed from
//! `expires_at` and the current time, never stored.

pub mod ops;
pub mod state;

pub use state::RegistryState;
