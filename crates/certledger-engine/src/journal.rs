//! Durable block journal
//!
//! The journal is the append-only record of everything the sequencer has
//! finalized. Each block's digest is SHA-256 over the canonical JSON of
//! the block with its own digest field blanked, and each block names its
//! parent's digest, chaining back to the genesis block that recorded the
//! registry owner. Any edit to a stored block, or any gap in the
//! sequence, is detected at replay time.

use certledger_core::errors::{RegistryError, Result};
use certledger_core::{AccountId, Command, RegistryEvent};
use rusqlite::{Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Parent digest of the genesis block
pub const GENESIS_PARENT_DIGEST: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// What a sealed block carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockPayload {
    /// Ledger creation: records the owner identity, fixed for the
    /// registry's lifetime
    Genesis { owner: AccountId },
    /// One finalized mutating command and the identity that submitted it
    Apply {
        caller: AccountId,
        command: Command,
    },
}

/// One sealed block in the ordered journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the agreed sequence, genesis is 0
    pub seq: u64,
    /// Digest of the previous block ([`GENESIS_PARENT_DIGEST`] for seq 0)
    pub parent_digest: String,
    /// SHA-256 over the canonical JSON of this block with `digest` blank
    pub digest: String,
    /// Ledger time stamped at seal, epoch seconds
    pub sealed_at: i64,
    /// Transaction identifier assigned at submission
    pub tx_id: String,
    pub payload: BlockPayload,
    /// Event emitted by the payload's command, absent for genesis
    pub event: Option<RegistryEvent>,
}

/// Compute a block's digest
///
/// The digest field itself is blanked before hashing so the digest covers
/// everything else, including the parent digest that chains the journal.
pub fn compute_block_digest(block: &Block) -> Result<String> {
    let mut copy = block.clone();
    copy.digest = String::new();
    let canonical = serde_json::to_string(&copy)?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Seal a block: fill in its digest over the given contents
pub fn seal_block(
    seq: u64,
    parent_digest: String,
    sealed_at: i64,
    tx_id: String,
    payload: BlockPayload,
    event: Option<RegistryEvent>,
) -> Result<Block> {
    let mut block = Block {
        seq,
        parent_digest,
        digest: String::new(),
        sealed_at,
        tx_id,
        payload,
        event,
    };
    block.digest = compute_block_digest(&block)?;
    Ok(block)
}

/// Verify the digest chain of a loaded journal
///
/// # Errors
///
/// Returns `JournalCorrupt` on a missing genesis, a sequence gap, a
/// broken parent link, or a digest that does not recompute.
pub fn verify_chain(blocks: &[Block]) -> Result<()> {
    let Some(genesis) = blocks.first() else {
        return Err(RegistryError::JournalCorrupt {
            reason: "journal has no genesis block".to_string(),
        });
    };
    if genesis.seq != 0 || genesis.parent_digest != GENESIS_PARENT_DIGEST {
        return Err(RegistryError::JournalCorrupt {
            reason: "genesis block is malformed".to_string(),
        });
    }

    let mut parent_digest = GENESIS_PARENT_DIGEST;
    for (i, block) in blocks.iter().enumerate() {
        if block.seq != i as u64 {
            return Err(RegistryError::JournalCorrupt {
                reason: format!("sequence gap: expected seq {}, found {}", i, block.seq),
            });
        }
        if block.parent_digest != parent_digest {
            return Err(RegistryError::JournalCorrupt {
                reason: format!("parent link broken at seq {}", block.seq),
            });
        }
        let expected = compute_block_digest(block)?;
        if block.digest != expected {
            return Err(RegistryError::JournalCorrupt {
                reason: format!("digest mismatch at seq {}", block.seq),
            });
        }
        parent_digest = &block.digest;
    }
    Ok(())
}

/// SQLite-backed journal storage
pub struct Journal {
    conn: Connection,
}

impl Journal {
    /// Open a journal over the given connection, creating the schema if
    /// needed
    pub fn open(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(from_rusqlite)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS blocks (
                seq INTEGER PRIMARY KEY,
                parent_digest TEXT NOT NULL,
                digest TEXT NOT NULL,
                sealed_at INTEGER NOT NULL,
                tx_id TEXT NOT NULL,
                payload TEXT NOT NULL,
                event TEXT
            )",
            [],
        )
        .map_err(from_rusqlite)?;
        Ok(Self { conn })
    }

    /// Append a sealed block
    pub fn append(&self, block: &Block) -> Result<()> {
        let payload_json = serde_json::to_string(&block.payload)?;
        let event_json = block
            .event
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        self.conn
            .execute(
                "INSERT INTO blocks (seq, parent_digest, digest, sealed_at, tx_id, payload, event)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    block.seq as i64,
                    block.parent_digest,
                    block.digest,
                    block.sealed_at,
                    block.tx_id,
                    payload_json,
                    event_json,
                ],
            )
            .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Load every block in sequence order
    pub fn load_blocks(&self) -> Result<Vec<Block>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT seq, parent_digest, digest, sealed_at, tx_id, payload, event
                 FROM blocks ORDER BY seq ASC",
            )
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], |row| {
                let seq: i64 = row.get(0)?;
                let parent_digest: String = row.get(1)?;
                let digest: String = row.get(2)?;
                let sealed_at: i64 = row.get(3)?;
                let tx_id: String = row.get(4)?;
                let payload_json: String = row.get(5)?;
                let event_json: Option<String> = row.get(6)?;
                Ok((
                    seq as u64,
                    parent_digest,
                    digest,
                    sealed_at,
                    tx_id,
                    payload_json,
                    event_json,
                ))
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        let mut blocks = Vec::with_capacity(rows.len());
        for (seq, parent_digest, digest, sealed_at, tx_id, payload_json, event_json) in rows {
            let payload: BlockPayload = serde_json::from_str(&payload_json)?;
            let event: Option<RegistryEvent> =
                event_json.as_deref().map(serde_json::from_str).transpose()?;
            blocks.push(Block {
                seq,
                parent_digest,
                digest,
                sealed_at,
                tx_id,
                payload,
                event,
            });
        }
        Ok(blocks)
    }

    /// Number of sealed blocks
    pub fn block_count(&self) -> Result<u64> {
        let count: Option<i64> = self
            .conn
            .query_row("SELECT COUNT(*) FROM blocks", [], |row| row.get(0))
            .optional()
            .map_err(from_rusqlite)?;
        Ok(count.unwrap_or(0) as u64)
    }

    /// Edit a stored block's seal time in place, bypassing the digest
    ///
    /// This is useful for testing tamper detection; nothing reachable
    /// through the sequencer ever rewrites a sealed block.
    pub fn overwrite_sealed_at(&self, seq: u64, sealed_at: i64) -> Result<()> {
        self.conn
            .execute(
                "UPDATE blocks SET sealed_at = ?1 WHERE seq = ?2",
                rusqlite::params![sealed_at, seq as i64],
            )
            .map_err(from_rusqlite)?;
        Ok(())
    }
}

/// Create a persistence error from rusqlite::Error
pub(crate) fn from_rusqlite(err: rusqlite::Error) -> RegistryError {
    RegistryError::Persistence {
        message: err.to_string(),
    }
}
