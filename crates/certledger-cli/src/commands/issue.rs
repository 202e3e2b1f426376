//! Issue command
//!
//! Computes a fresh salted commitment for the subject, submits the
//! issuance to the ledger, awaits finalization, and saves the salt and
//! identity fields to the local wallet so the certificate can be
//! verified later.

use clap::Args;

use certledger_core::commitment::{commit, Salt};
use certledger_core::{AccountId, Command, NEVER_EXPIRES};
use certledger_store::{CommitmentEntry, CommitmentRepo};
use uuid::Uuid;

use super::{format_expiry, open_or_create_ledger, open_wallet, WAIT_BUDGET};

#[derive(Debug, Args)]
pub struct IssueArgs {
    /// Subject identifier (e.g., a student number); never leaves this machine
    #[arg(long)]
    pub subject_id: String,

    /// Subject full name; never leaves this machine
    #[arg(long)]
    pub subject_name: String,

    /// Certificate title
    #[arg(long)]
    pub title: String,

    /// Issuing organisation
    #[arg(long)]
    pub issuer: String,

    /// Validity in days (0 = never expires)
    #[arg(long, default_value = "0")]
    pub days: u32,

    /// Identity submitting the issuance
    #[arg(long, default_value = "registry:owner")]
    pub caller: String,

    #[arg(long, default_value = ".certledger/ledger.db")]
    pub ledger: String,

    #[arg(long, default_value = ".certledger/wallet.db")]
    pub wallet: String,
}

pub fn execute(args: IssueArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut sequencer = open_or_create_ledger(&args.ledger, &args.caller)?;

    let certificate_id = Uuid::now_v7().to_string();
    let salt = Salt::generate();
    let commitment_hash = commit(
        args.subject_id.as_bytes(),
        args.subject_name.as_bytes(),
        &salt,
    );

    let now = chrono::Utc::now().timestamp();
    let expires_at = if args.days > 0 {
        now + i64::from(args.days) * 24 * 60 * 60
    } else {
        NEVER_EXPIRES
    };

    let pending = sequencer.submit(
        AccountId::new(&args.caller),
        Command::Issue {
            certificate_id: certificate_id.clone(),
            commitment_hash,
            title: args.title.clone(),
            issuer: args.issuer.clone(),
            expires_at,
        },
    );
    let receipt = sequencer.wait(&pending.tx_id, WAIT_BUDGET)?;

    let wallet = open_wallet(&args.wallet)?;
    CommitmentRepo::save(
        &wallet,
        &CommitmentEntry {
            certificate_id: certificate_id.clone(),
            subject_id: args.subject_id,
            subject_name: args.subject_name,
            salt,
            commitment_hash,
            expires_at,
            tx_id: receipt.tx_id.clone(),
            block_seq: receipt.block_seq,
            saved_at: now,
        },
    )?;

    println!("Certificate issued:");
    println!("  certificate_id: {}", certificate_id);
    println!("  title: {}", args.title);
    println!("  issuer: {}", args.issuer);
    println!("  expires_at: {}", format_expiry(expires_at));
    println!("  commitment: {}", commitment_hash);
    println!("  tx_id: {}", receipt.tx_id);
    println!("  block_seq: {}", receipt.block_seq);
    println!();
    println!("The subject identity and salt were saved to {} only.", args.wallet);
    println!("Keep that file: it is required to verify this certificate.");

    Ok(())
}
