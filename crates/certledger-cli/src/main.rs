//! CertLedger CLI
//!
//! Command-line interface for the certificate registry

use certledger_core::logging::{init, Profile};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "certledger")]
#[command(about = "CertLedger - privacy-preserving certificate registry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Issue a new certificate and save its commitment locally
    Issue(commands::issue::IssueArgs),
    /// Verify a certificate against the registry
    Verify(commands::verify::VerifyArgs),
    /// Revoke an issued certificate
    Revoke(commands::revoke::RevokeArgs),
    /// Show a certificate record from the registry
    Show(commands::show::ShowArgs),
    /// List certificates saved in the local wallet
    List(commands::list::ListArgs),
    /// Show ledger status and owner
    Status(commands::status::StatusArgs),
}

fn main() {
    init(Profile::Development);
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Issue(args) => commands::issue::execute(args),
        Commands::Verify(args) => commands::verify::execute(args),
        Commands::Revoke(args) => commands::revoke::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::List(args) => commands::list::execute(args),
        Commands::Status(args) => commands::status::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
