//! CLI subcommands

pub mod issue;
pub mod list;
pub mod revoke;
pub mod show;
pub mod status;
pub mod verify;

use certledger_core::{AccountId, NEVER_EXPIRES};
use certledger_engine::{Sequencer, SystemClock};
use std::error::Error;
use std::path::Path;

/// Finalization budget for a single CLI submission
pub const WAIT_BUDGET: usize = 64;

/// Open an existing ledger for reading; fails with a friendly message if
/// none exists yet
pub fn open_ledger(path: &str) -> Result<Sequencer, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("no ledger found at {} (issue a certificate first)", path).into());
    }
    let conn = rusqlite::Connection::open(path)?;
    Ok(Sequencer::open(conn, Box::new(SystemClock))?)
}

/// Open the ledger for mutation, creating it (owned by `caller`) on first
/// use
pub fn open_or_create_ledger(path: &str, caller: &str) -> Result<Sequencer, Box<dyn Error>> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = rusqlite::Connection::open(path)?;
    Ok(Sequencer::open_or_create(
        conn,
        AccountId::new(caller),
        Box::new(SystemClock),
    )?)
}

/// Open the wallet database, applying migrations
pub fn open_wallet(path: &str) -> Result<rusqlite::Connection, Box<dyn Error>> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut conn = certledger_store::db::open(path)?;
    certledger_store::db::configure(&conn)?;
    certledger_store::migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}

/// Render an expiry timestamp, honouring the never-expires sentinel
pub fn format_expiry(expires_at: i64) -> String {
    if expires_at == NEVER_EXPIRES {
        return "never".to_string();
    }
    format_timestamp(expires_at)
}

/// Render an epoch-seconds timestamp as UTC
pub fn format_timestamp(ts: i64) -> String {
    match chrono::DateTime::from_timestamp(ts, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => ts.to_string(),
    }
}
