//! Structured logging facility for CertLedger
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Canonical field keys and event names from `certledger-core-types`
//!
//! Subject identity fields and salts must never reach a log line in
//! plaintext; pass them through `Sensitive` if they must appear at all.
//!
//! # Usage
//!
//! ```rust
//! use certledger_core::logging::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;

pub use init::{init, Profile};
