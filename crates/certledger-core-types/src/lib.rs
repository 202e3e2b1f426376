//! Core types shared across CertLedger facilities
//!
//! This crate provides foundational types used by the registry core,
//! the engine, and the commitment store:
//!
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction of
//!   subject identity fields and salts
//! - **Schema constants**: Canonical field keys and event names for
//!   structured logging

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
