//! Single-writer sequencer over the registry state
//!
//! The sequencer is the in-process stand-in for the external ordered
//! execution environment. Mutating submissions return a pending handle
//! immediately and become visible to reads only once finalized into a
//! sealed block; reads always see the latest committed state and never
//! observe queued submissions. Races on the same certificate id resolve
//! by queue order: the first finalized wins, the loser gets the matching
//! typed error.

use std::collections::{HashMap, VecDeque};

use certledger_core::errors::{RegistryError, Result};
use certledger_core::{
    apply, log_op_end, log_op_error, log_op_start, verify, AccountId, Command, Record,
    RegistryEvent, RegistryState, Verification,
};
use rusqlite::Connection;
use uuid::Uuid;

use crate::clock::BlockClock;
use crate::journal::{seal_block, verify_chain, BlockPayload, Journal, GENESIS_PARENT_DIGEST};

/// Handle returned immediately by a mutating submission
///
/// The submission is pending until an explicit finalization signal: the
/// caller must poll (`status`) or drive (`wait`) to learn the definitive
/// outcome, and must not assume the mutation is visible to reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTx {
    pub tx_id: String,
}

/// Definitive success outcome of a finalized submission
#[derive(Debug, Clone, PartialEq)]
pub struct TxReceipt {
    pub tx_id: String,
    /// Sequence number of the containing block
    pub block_seq: u64,
    /// The event the mutation emitted
    pub event: RegistryEvent,
}

/// Lifecycle state of a submitted transaction
#[derive(Debug, Clone, PartialEq)]
pub enum TxStatus {
    /// Queued, not yet part of the agreed sequence
    Pending,
    /// Finalized into a sealed block
    Finalized(TxReceipt),
    /// Ordered, but the command failed against the state it met
    Rejected(RegistryError),
}

struct QueuedTx {
    tx_id: String,
    caller: AccountId,
    command: Command,
}

/// Ordered execution environment for the certificate registry
pub struct Sequencer {
    journal: Journal,
    clock: Box<dyn BlockClock>,
    state: RegistryState,
    head_digest: String,
    height: u64,
    queue: VecDeque<QueuedTx>,
    statuses: HashMap<String, TxStatus>,
}

impl Sequencer {
    /// Create a fresh ledger: seals the genesis block recording the owner
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the journal already contains blocks.
    pub fn create(conn: Connection, owner: AccountId, clock: Box<dyn BlockClock>) -> Result<Self> {
        let journal = Journal::open(conn)?;
        if journal.block_count()? != 0 {
            return Err(RegistryError::Persistence {
                message: "journal already initialized; use open()".to_string(),
            });
        }
        Self::bootstrap(journal, owner, clock)
    }

    /// Open an existing ledger, replaying and integrity-checking the
    /// journal
    ///
    /// # Errors
    ///
    /// Returns `JournalCorrupt` if the journal is empty, the digest chain
    /// does not verify, or a block does not reapply cleanly.
    pub fn open(conn: Connection, clock: Box<dyn BlockClock>) -> Result<Self> {
        let journal = Journal::open(conn)?;
        Self::replay(journal, clock)
    }

    /// Open the ledger if it exists, otherwise create it with the given
    /// owner
    pub fn open_or_create(
        conn: Connection,
        owner: AccountId,
        clock: Box<dyn BlockClock>,
    ) -> Result<Self> {
        let journal = Journal::open(conn)?;
        if journal.block_count()? == 0 {
            Self::bootstrap(journal, owner, clock)
        } else {
            Self::replay(journal, clock)
        }
    }

    /// Create an in-memory ledger (tests, demos)
    pub fn in_memory(owner: AccountId, clock: Box<dyn BlockClock>) -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(crate::journal::from_rusqlite)?;
        Self::create(conn, owner, clock)
    }

    fn bootstrap(journal: Journal, owner: AccountId, clock: Box<dyn BlockClock>) -> Result<Self> {
        let now = clock.now();
        let genesis = seal_block(
            0,
            GENESIS_PARENT_DIGEST.to_string(),
            now,
            Uuid::now_v7().to_string(),
            BlockPayload::Genesis {
                owner: owner.clone(),
            },
            None,
        )?;
        journal.append(&genesis)?;
        log_op_end!("ledger_create", caller = %owner);

        Ok(Self {
            journal,
            clock,
            state: RegistryState::new(owner),
            head_digest: genesis.digest,
            height: 1,
            queue: VecDeque::new(),
            statuses: HashMap::new(),
        })
    }

    fn replay(journal: Journal, clock: Box<dyn BlockClock>) -> Result<Self> {
        let blocks = journal.load_blocks()?;
        verify_chain(&blocks)?;

        let mut state = match &blocks[0].payload {
            BlockPayload::Genesis { owner } => RegistryState::new(owner.clone()),
            BlockPayload::Apply { .. } => {
                return Err(RegistryError::JournalCorrupt {
                    reason: "first block is not a genesis block".to_string(),
                })
            }
        };

        for block in &blocks[1..] {
            let BlockPayload::Apply { caller, command } = &block.payload else {
                return Err(RegistryError::JournalCorrupt {
                    reason: format!("unexpected genesis block at seq {}", block.seq),
                });
            };
            let (next, event) = apply(state, command.clone(), caller, block.sealed_at).map_err(
                |e| RegistryError::JournalCorrupt {
                    reason: format!("block {} does not reapply: {}", block.seq, e),
                },
            )?;
            if block.event.as_ref() != Some(&event) {
                return Err(RegistryError::JournalCorrupt {
                    reason: format!("block {} event does not match its command", block.seq),
                });
            }
            state = next;
        }

        let head = blocks
            .last()
            .map(|b| b.digest.clone())
            .unwrap_or_else(|| GENESIS_PARENT_DIGEST.to_string());
        let height = blocks.len() as u64;
        log_op_end!("ledger_open", block_seq = height - 1);

        Ok(Self {
            journal,
            clock,
            state,
            head_digest: head,
            height,
            queue: VecDeque::new(),
            statuses: HashMap::new(),
        })
    }

    // ===== Mutating submission boundary =====

    /// Submit a mutating command for ordering
    ///
    /// Returns immediately with a pending handle; the command executes
    /// when finalization reaches it. Nothing is validated here - even an
    /// unauthorized caller receives a handle whose finalization will then
    /// be rejected, mirroring an execution environment that orders first
    /// and executes second.
    pub fn submit(&mut self, caller: AccountId, command: Command) -> PendingTx {
        let tx_id = Uuid::now_v7().to_string();
        log_op_start!(
            "submit",
            tx_id = %tx_id,
            certificate_id = %command.certificate_id(),
            caller = %caller,
        );
        self.queue.push_back(QueuedTx {
            tx_id: tx_id.clone(),
            caller,
            command,
        });
        self.statuses.insert(tx_id.clone(), TxStatus::Pending);
        PendingTx { tx_id }
    }

    /// Finalize the next queued submission, if any
    ///
    /// Applies the command against the committed state, seals a block on
    /// success, and records the transaction's definitive status. Returns
    /// `None` when the queue is empty.
    ///
    /// # Errors
    ///
    /// Only journal/serialization failures propagate; a command that
    /// fails against the state it met is a `Rejected` status, not an
    /// error from this method.
    pub fn finalize_next(&mut self) -> Result<Option<TxStatus>> {
        let Some(tx) = self.queue.pop_front() else {
            return Ok(None);
        };
        let now = self.clock.now();

        match apply(self.state.clone(), tx.command.clone(), &tx.caller, now) {
            Ok((next_state, event)) => {
                let block = seal_block(
                    self.height,
                    self.head_digest.clone(),
                    now,
                    tx.tx_id.clone(),
                    BlockPayload::Apply {
                        caller: tx.caller,
                        command: tx.command,
                    },
                    Some(event.clone()),
                )?;
                self.journal.append(&block)?;
                self.state = next_state;
                self.head_digest = block.digest.clone();
                self.height += 1;

                log_op_end!(
                    "finalize",
                    tx_id = %tx.tx_id,
                    block_seq = block.seq,
                    certificate_id = %event.certificate_id(),
                );
                let status = TxStatus::Finalized(TxReceipt {
                    tx_id: tx.tx_id.clone(),
                    block_seq: block.seq,
                    event,
                });
                self.statuses.insert(tx.tx_id, status.clone());
                Ok(Some(status))
            }
            Err(err) => {
                log_op_error!("finalize", err, tx_id = %tx.tx_id);
                let status = TxStatus::Rejected(err);
                self.statuses.insert(tx.tx_id, status.clone());
                Ok(Some(status))
            }
        }
    }

    /// Finalize every queued submission in order
    ///
    /// Returns the number of submissions processed.
    pub fn finalize_all(&mut self) -> Result<usize> {
        let mut processed = 0;
        while self.finalize_next()?.is_some() {
            processed += 1;
        }
        Ok(processed)
    }

    /// Look up a submitted transaction's current status
    ///
    /// # Errors
    ///
    /// Returns `UnknownTransaction` for a tx id never submitted here.
    pub fn status(&self, tx_id: &str) -> Result<&TxStatus> {
        self.statuses
            .get(tx_id)
            .ok_or_else(|| RegistryError::UnknownTransaction {
                tx_id: tx_id.to_string(),
            })
    }

    /// Await finalization of a transaction, driving at most `max_blocks`
    /// finalization steps
    ///
    /// # Errors
    ///
    /// * `UnknownTransaction` - tx id never submitted
    /// * `PendingTimeout` - budget exhausted with the tx still pending
    /// * The transaction's own rejection error, if it was ordered but
    ///   failed
    pub fn wait(&mut self, tx_id: &str, max_blocks: usize) -> Result<TxReceipt> {
        let mut budget = max_blocks;
        loop {
            match self.status(tx_id)? {
                TxStatus::Finalized(receipt) => return Ok(receipt.clone()),
                TxStatus::Rejected(err) => return Err(err.clone()),
                TxStatus::Pending => {}
            }
            if budget == 0 || self.finalize_next()?.is_none() {
                return Err(RegistryError::PendingTimeout {
                    tx_id: tx_id.to_string(),
                });
            }
            budget -= 1;
        }
    }

    // ===== Read boundary (latest committed state) =====

    /// Read a certificate record
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for the id.
    pub fn get_record(&self, certificate_id: &str) -> Result<&Record> {
        self.state.get_record(certificate_id)
    }

    /// Verify a presented commitment hash at the current clock time
    pub fn verify(
        &self,
        certificate_id: &str,
        presented: &certledger_core::CommitmentHash,
    ) -> Verification {
        verify(&self.state, certificate_id, presented, self.clock.now())
    }

    /// The registry owner identity recorded at genesis
    pub fn owner(&self) -> &AccountId {
        self.state.owner()
    }

    /// Number of sealed blocks, genesis included
    pub fn block_height(&self) -> u64 {
        self.height
    }

    /// Digest of the newest sealed block
    pub fn head_digest(&self) -> &str {
        &self.head_digest
    }

    /// Number of records ever issued
    pub fn record_count(&self) -> usize {
        self.state.record_count()
    }

    /// Number of submissions not yet finalized
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }
}
