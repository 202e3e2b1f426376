//! CertLedger Engine - ordered execution environment for the registry
//!
//! Stands in for the external total-order execution environment the core
//! assumes. Provides:
//! - A single-writer [`Sequencer`] that serializes every mutating command
//!   into one agreed sequence and applies it atomically
//! - Pending transaction handles with explicit finalization: a submission
//!   is not visible to reads until its block is sealed
//! - A durable, digest-chained block journal in SQLite, replayed and
//!   integrity-checked on open
//! - Synchronous reads (`get_record`, `verify`, `owner`) against the
//!   latest committed state

pub mod clock;
pub mod journal;
pub mod sequencer;

pub use clock::{BlockClock, FixedClock, SystemClock};
pub use journal::{Block, BlockPayload};
pub use sequencer::{PendingTx, Sequencer, TxReceipt, TxStatus};
