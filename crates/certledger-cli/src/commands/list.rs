//! List command
//!
//! Lists certificates saved in the local wallet. Subject identity is
//! printed here deliberately: the wallet is the holder's own private
//! store, and this output is how they recover what they need to verify.

use clap::Args;

use certledger_store::CommitmentRepo;

use super::{format_expiry, open_wallet};

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, default_value = ".certledger/wallet.db")]
    pub wallet: String,
}

pub fn execute(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_wallet(&args.wallet)?;
    let entries = CommitmentRepo::load_all(&conn)?;

    if entries.is_empty() {
        println!("No certificates saved in {}", args.wallet);
        return Ok(());
    }

    println!("Saved certificates ({}):", entries.len());
    for entry in entries {
        println!("  certificate_id: {}", entry.certificate_id);
        println!("    subject_id: {}", entry.subject_id);
        println!("    subject_name: {}", entry.subject_name);
        println!("    expires_at: {}", format_expiry(entry.expires_at));
        println!("    block_seq: {}", entry.block_seq);
    }

    Ok(())
}
