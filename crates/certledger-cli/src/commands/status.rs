//! Status command

use clap::Args;

use super::open_ledger;

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[arg(long, default_value = ".certledger/ledger.db")]
    pub ledger: String,
}

pub fn execute(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let sequencer = open_ledger(&args.ledger)?;

    println!("Ledger status:");
    println!("  owner: {}", sequencer.owner());
    println!("  block_height: {}", sequencer.block_height());
    println!("  head_digest: {}", sequencer.head_digest());
    println!("  records: {}", sequencer.record_count());

    Ok(())
}
