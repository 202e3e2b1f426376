//! CLI integration tests
//!
//! Walk the full issue → verify → revoke → verify flow through the real
//! binary, with the ledger and wallet in a temporary directory.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestEnv {
    _temp_dir: TempDir,
    ledger: PathBuf,
    wallet: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let ledger = temp_dir.path().join("ledger.db");
        let wallet = temp_dir.path().join("wallet.db");
        Self {
            _temp_dir: temp_dir,
            ledger,
            wallet,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        let cli_bin = env!("CARGO_BIN_EXE_certledger-cli");
        Command::new(cli_bin)
            .args(args)
            .args(["--ledger", self.ledger.to_str().unwrap()])
            .output()
            .expect("Failed to execute CLI")
    }

    fn run_with_wallet(&self, args: &[&str]) -> Output {
        let cli_bin = env!("CARGO_BIN_EXE_certledger-cli");
        Command::new(cli_bin)
            .args(args)
            .args(["--ledger", self.ledger.to_str().unwrap()])
            .args(["--wallet", self.wallet.to_str().unwrap()])
            .output()
            .expect("Failed to execute CLI")
    }

    fn issue(&self) -> String {
        let output = self.run_with_wallet(&[
            "issue",
            "--subject-id",
            "2101001",
            "--subject-name",
            "Jane Doe",
            "--title",
            "Distributed Systems",
            "--issuer",
            "Example University",
        ]);
        assert!(
            output.status.success(),
            "issue should succeed. Stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        extract_field(&stdout, "certificate_id")
    }
}

fn extract_field(stdout: &str, field: &str) -> String {
    let needle = format!("{}: ", field);
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix(&needle))
        .unwrap_or_else(|| panic!("field {} not found in output:\n{}", field, stdout))
        .to_string()
}

#[test]
fn test_issue_then_verify_from_wallet_only() {
    let env = TestEnv::new();
    let cert_id = env.issue();

    // Verify supplies nothing but the id: identity and salt come from
    // the wallet
    let output = env.run_with_wallet(&["verify", "--certificate-id", &cert_id]);
    assert!(
        output.status.success(),
        "verify should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("valid: true"), "output:\n{}", stdout);
    assert!(stdout.contains("revoked: false"), "output:\n{}", stdout);
    assert!(stdout.contains("Distributed Systems"), "output:\n{}", stdout);
}

#[test]
fn test_verify_with_wrong_identity_fails() {
    let env = TestEnv::new();
    let cert_id = env.issue();

    let output = env.run_with_wallet(&[
        "verify",
        "--certificate-id",
        &cert_id,
        "--subject-name",
        "Someone Else",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("valid: false"), "output:\n{}", stdout);
}

#[test]
fn test_revoke_flow() {
    let env = TestEnv::new();
    let cert_id = env.issue();

    let output = env.run(&["revoke", "--certificate-id", &cert_id]);
    assert!(
        output.status.success(),
        "revoke should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Verification now reports the revocation truthfully
    let output = env.run_with_wallet(&["verify", "--certificate-id", &cert_id]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("valid: false"), "output:\n{}", stdout);
    assert!(stdout.contains("revoked: true"), "output:\n{}", stdout);

    // A second revoke fails loudly
    let output = env.run(&["revoke", "--certificate-id", &cert_id]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already revoked"), "stderr:\n{}", stderr);
}

#[test]
fn test_show_and_status_and_list() {
    let env = TestEnv::new();
    let cert_id = env.issue();

    let output = env.run(&["show", "--certificate-id", &cert_id]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Example University"), "output:\n{}", stdout);
    assert!(stdout.contains("revoked: false"), "output:\n{}", stdout);

    let output = env.run(&["status"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("owner: registry:owner"), "output:\n{}", stdout);
    assert!(stdout.contains("records: 1"), "output:\n{}", stdout);

    let output = Command::new(env!("CARGO_BIN_EXE_certledger-cli"))
        .args(["list", "--wallet", env.wallet.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&cert_id), "output:\n{}", stdout);
    assert!(stdout.contains("Jane Doe"), "output:\n{}", stdout);
}

#[test]
fn test_non_owner_cannot_revoke() {
    let env = TestEnv::new();
    let cert_id = env.issue();

    let output = env.run(&[
        "revoke",
        "--certificate-id",
        &cert_id,
        "--caller",
        "mallory",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not the registry owner"), "stderr:\n{}", stderr);
}
