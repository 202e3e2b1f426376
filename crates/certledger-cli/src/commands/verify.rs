//! Verify command
//!
//! Recomputes the commitment hash from the subject identity and salt
//! (taken from the local wallet, or supplied explicitly) and checks it
//! against the registry. The plaintext identity is never sent anywhere:
//! only the recomputed hash is compared with the ledger's stored value.

use clap::Args;

use certledger_core::commitment::{commit, Salt};
use certledger_store::CommitmentRepo;

use super::{format_expiry, format_timestamp, open_ledger, open_wallet};

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Certificate id to verify
    #[arg(long)]
    pub certificate_id: String,

    /// Subject identifier; defaults to the wallet entry's value
    #[arg(long)]
    pub subject_id: Option<String>,

    /// Subject full name; defaults to the wallet entry's value
    #[arg(long)]
    pub subject_name: Option<String>,

    /// Salt as hex; required if the wallet has no entry for this id
    #[arg(long)]
    pub salt: Option<String>,

    #[arg(long, default_value = ".certledger/ledger.db")]
    pub ledger: String,

    #[arg(long, default_value = ".certledger/wallet.db")]
    pub wallet: String,
}

pub fn execute(args: VerifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let entry = open_wallet(&args.wallet)
        .ok()
        .and_then(|conn| CommitmentRepo::find_by_id(&conn, &args.certificate_id).ok())
        .flatten();

    let salt = match (&args.salt, &entry) {
        (Some(hex), _) => Salt::from_hex(hex)?,
        (None, Some(entry)) => entry.salt.clone(),
        (None, None) => {
            return Err(format!(
                "no wallet entry for {}; pass --salt (and --subject-id/--subject-name) explicitly",
                args.certificate_id
            )
            .into())
        }
    };
    let subject_id = match (&args.subject_id, &entry) {
        (Some(id), _) => id.clone(),
        (None, Some(entry)) => entry.subject_id.clone(),
        (None, None) => return Err("missing --subject-id".into()),
    };
    let subject_name = match (&args.subject_name, &entry) {
        (Some(name), _) => name.clone(),
        (None, Some(entry)) => entry.subject_name.clone(),
        (None, None) => return Err("missing --subject-name".into()),
    };

    let presented = commit(subject_id.as_bytes(), subject_name.as_bytes(), &salt);

    let sequencer = open_ledger(&args.ledger)?;
    let result = sequencer.verify(&args.certificate_id, &presented);

    println!("Verification result:");
    println!("  valid: {}", result.valid);
    println!("  revoked: {}", result.is_revoked);
    if result.issued_at != 0 || !result.title.is_empty() {
        println!("  issued_at: {}", format_timestamp(result.issued_at));
        println!("  expires_at: {}", format_expiry(result.expires_at));
        println!("  title: {}", result.title);
        println!("  issuer: {}", result.issuer);
    } else {
        println!("  (certificate id is not known to the registry)");
    }

    Ok(())
}
