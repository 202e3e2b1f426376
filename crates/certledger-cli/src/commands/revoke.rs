//! Revoke command

use clap::Args;

use certledger_core::{AccountId, Command};

use super::{open_or_create_ledger, WAIT_BUDGET};

#[derive(Debug, Args)]
pub struct RevokeArgs {
    /// Certificate id to revoke
    #[arg(long)]
    pub certificate_id: String,

    /// Identity submitting the revocation
    #[arg(long, default_value = "registry:owner")]
    pub caller: String,

    #[arg(long, default_value = ".certledger/ledger.db")]
    pub ledger: String,
}

pub fn execute(args: RevokeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut sequencer = open_or_create_ledger(&args.ledger, &args.caller)?;

    let pending = sequencer.submit(
        AccountId::new(&args.caller),
        Command::Revoke {
            certificate_id: args.certificate_id.clone(),
        },
    );
    let receipt = sequencer.wait(&pending.tx_id, WAIT_BUDGET)?;

    println!("Certificate revoked:");
    println!("  certificate_id: {}", args.certificate_id);
    println!("  tx_id: {}", receipt.tx_id);
    println!("  block_seq: {}", receipt.block_seq);

    Ok(())
}
