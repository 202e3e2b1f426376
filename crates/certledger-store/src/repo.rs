//! Commitment repository
//!
//! Persists and loads [`CommitmentEntry`] rows. An entry holds everything
//! a verifier needs to recompute a certificate's commitment hash - the
//! salt and the plaintext identity fields - plus the finalization
//! coordinates (tx id, block seq) of the issuance for reference.
//!
//! Identity fields and salts are plaintext in this database by design
//! (it is the holder's private wallet); they must still never reach log
//! output, so logging here names only the certificate id.

use crate::errors::from_rusqlite;
use certledger_core::commitment::{CommitmentHash, Salt};
use certledger_core::errors::Result;
use certledger_core::{log_op_end, log_op_start};
use rusqlite::{Connection, OptionalExtension};

/// One saved certificate on the holder's side
#[derive(Debug, Clone, PartialEq)]
pub struct CommitmentEntry {
    pub certificate_id: String,
    pub subject_id: String,
    pub subject_name: String,
    /// Redacted in Debug output; hex-encoded at rest
    pub salt: Salt,
    pub commitment_hash: CommitmentHash,
    pub expires_at: i64,
    /// Transaction that carried the issuance
    pub tx_id: String,
    /// Block the issuance finalized in
    pub block_seq: u64,
    /// Epoch seconds this entry was saved locally
    pub saved_at: i64,
}

/// SQLite repository for commitment entries
pub struct CommitmentRepo;

impl CommitmentRepo {
    /// Save an entry, replacing any previous entry for the same
    /// certificate id
    pub fn save(conn: &Connection, entry: &CommitmentEntry) -> Result<()> {
        log_op_start!("save_commitment", certificate_id = %entry.certificate_id);
        conn.execute(
            "INSERT INTO commitments (certificate_id, subject_id, subject_name, salt,
                                      commitment_hash, expires_at, tx_id, block_seq, saved_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(certificate_id) DO UPDATE SET
                subject_id = excluded.subject_id,
                subject_name = excluded.subject_name,
                salt = excluded.salt,
                commitment_hash = excluded.commitment_hash,
                expires_at = excluded.expires_at,
                tx_id = excluded.tx_id,
                block_seq = excluded.block_seq,
                saved_at = excluded.saved_at",
            rusqlite::params![
                entry.certificate_id,
                entry.subject_id,
                entry.subject_name,
                entry.salt.to_hex(),
                entry.commitment_hash.to_hex(),
                entry.expires_at,
                entry.tx_id,
                entry.block_seq as i64,
                entry.saved_at,
            ],
        )
        .map_err(from_rusqlite)?;
        log_op_end!("save_commitment", certificate_id = %entry.certificate_id);

        Ok(())
    }

    /// Load every saved entry in insertion order
    pub fn load_all(conn: &Connection) -> Result<Vec<CommitmentEntry>> {
        let mut stmt = conn
            .prepare(
                "SELECT certificate_id, subject_id, subject_name, salt, commitment_hash,
                        expires_at, tx_id, block_seq, saved_at
                 FROM commitments ORDER BY rowid ASC",
            )
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], row_to_raw)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        rows.into_iter().map(raw_to_entry).collect()
    }

    /// Find the saved entry for a certificate id, if any
    pub fn find_by_id(conn: &Connection, certificate_id: &str) -> Result<Option<CommitmentEntry>> {
        let mut stmt = conn
            .prepare(
                "SELECT certificate_id, subject_id, subject_name, salt, commitment_hash,
                        expires_at, tx_id, block_seq, saved_at
                 FROM commitments WHERE certificate_id = ?",
            )
            .map_err(from_rusqlite)?;

        let raw = stmt
            .query_row([certificate_id], row_to_raw)
            .optional()
            .map_err(from_rusqlite)?;

        raw.map(raw_to_entry).transpose()
    }
}

type RawEntry = (
    String,
    String,
    String,
    String,
    String,
    i64,
    String,
    i64,
    i64,
);

fn row_to_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawEntry> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
    ))
}

fn raw_to_entry(raw: RawEntry) -> Result<CommitmentEntry> {
    let (
        certificate_id,
        subject_id,
        subject_name,
        salt_hex,
        hash_hex,
        expires_at,
        tx_id,
        block_seq,
        saved_at,
    ) = raw;

    Ok(CommitmentEntry {
        certificate_id,
        subject_id,
        subject_name,
        salt: Salt::from_hex(&salt_hex)?,
        commitment_hash: hash_hex.parse()?,
        expires_at,
        tx_id,
        block_seq: block_seq as u64,
        saved_at,
    })
}
