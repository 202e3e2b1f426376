//! Show command
//!
//! Prints a certificate record as the registry stores it. Revoked and
//! expired records are shown with their actual values; only a truly
//! unknown id is an error.

use clap::Args;

use super::{format_expiry, format_timestamp, open_ledger};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Certificate id to look up
    #[arg(long)]
    pub certificate_id: String,

    #[arg(long, default_value = ".certledger/ledger.db")]
    pub ledger: String,
}

pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let sequencer = open_ledger(&args.ledger)?;
    let record = sequencer.get_record(&args.certificate_id)?;

    println!("Certificate record:");
    println!("  certificate_id: {}", record.certificate_id);
    println!("  title: {}", record.title);
    println!("  issuer: {}", record.issuer);
    println!("  issued_at: {}", format_timestamp(record.issued_at));
    println!("  expires_at: {}", format_expiry(record.expires_at));
    println!("  revoked: {}", record.revoked);
    println!("  commitment: {}", record.commitment_hash);

    Ok(())
}
