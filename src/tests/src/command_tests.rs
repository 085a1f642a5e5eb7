//! Tests for the CLI commands, each run against a wallet file on disk.

use crate::mock::MockLedger;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use std::path::Path;
use structopt::StructOpt;
use tempfile::tempdir;
use wallet_cli::commands::{airdrop, balance, demo, new, transfer};
use wallet_cli::{dispatch, Opt, Wallet, WalletConfig, WalletError};
use wallet_core::{WalletRecord, LAMPORTS_PER_SOL};

/// Parses a command line against `wallet_path` and runs it on the ledger.
async fn run_cli(ledger: &MockLedger, wallet_path: &Path, args: &[&str]) -> Result<(), WalletError> {
    let wallet_path = wallet_path.to_str().unwrap();
    let argv = ["wallet", "--wallet", wallet_path].into_iter().chain(args.iter().copied());
    let opt = Opt::from_iter_safe(argv).unwrap();

    let config = opt.apply_overrides(WalletConfig::default());
    assert_eq!(config.wallet_path, Path::new(wallet_path));
    dispatch(opt.cmd, &config, ledger).await
}

/// Tests that `new` twice leaves only the second key on disk.
#[tokio::test]
async fn test_new_overwrites_wallet_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wallet.json");

    let first = new::run(&path).await.unwrap();
    let second = new::run(&path).await.unwrap();
    assert_ne!(first, second);

    let record: WalletRecord = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(record.pubkey().unwrap(), second);
    assert_eq!(record.to_keypair().unwrap().pubkey(), second);
}

/// Tests the new → airdrop → balance → transfer command sequence.
#[tokio::test]
async fn test_command_sequence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wallet.json");
    let ledger = MockLedger::new();
    let recipient = Keypair::new().pubkey();

    let pubkey = new::run(&path).await.unwrap();

    airdrop::run(&ledger, &path, 1.0).await.unwrap();
    assert_eq!(balance::run(&ledger, &path).await.unwrap(), LAMPORTS_PER_SOL);

    let signature = transfer::run(&ledger, &path, &recipient.to_string(), 0.25).await.unwrap();
    assert_ne!(signature.to_string(), "");

    assert_eq!(ledger.balance_of(&recipient), LAMPORTS_PER_SOL / 4);
    assert_eq!(
        ledger.balance_of(&pubkey),
        LAMPORTS_PER_SOL - LAMPORTS_PER_SOL / 4 - ledger.fee_per_signature()
    );
}

/// Tests that commands needing a wallet explain a missing file.
#[tokio::test]
async fn test_commands_without_wallet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let ledger = MockLedger::new();

    assert!(matches!(balance::run(&ledger, &path).await, Err(WalletError::WalletError(_))));
    assert!(matches!(airdrop::run(&ledger, &path, 1.0).await, Err(WalletError::WalletError(_))));
    assert!(matches!(
        transfer::run(&ledger, &path, &Keypair::new().pubkey().to_string(), 1.0).await,
        Err(WalletError::WalletError(_))
    ));
}

/// Tests the default run.
#[tokio::test]
async fn test_default_run() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wallet.json");
    let ledger = MockLedger::new();

    let lamports = demo::run(&ledger, &path).await.unwrap();
    assert_eq!(lamports, 5 * LAMPORTS_PER_SOL);

    let wallet = Wallet::load(&path).unwrap();
    assert_eq!(ledger.balance_of(&wallet.pubkey()), 5 * LAMPORTS_PER_SOL);
}

/// Tests that a refused airdrop in the default run keeps the wallet file.
#[tokio::test]
async fn test_default_run_keeps_wallet_on_airdrop_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wallet.json");
    let ledger = MockLedger::new().with_faucet_budget(LAMPORTS_PER_SOL);

    let result = demo::run(&ledger, &path).await;
    assert!(matches!(result, Err(WalletError::FaucetExhausted(_))));

    let wallet = Wallet::load(&path).unwrap();
    assert_eq!(ledger.balance_of(&wallet.pubkey()), 0);
}

/// Tests that `airdrop` without an amount requests 1 SOL.
#[tokio::test]
async fn test_cli_airdrop_defaults_to_one_sol() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wallet.json");
    let ledger = MockLedger::new();

    run_cli(&ledger, &path, &["new"]).await.unwrap();
    let wallet = Wallet::load(&path).unwrap();

    run_cli(&ledger, &path, &["airdrop"]).await.unwrap();
    assert_eq!(ledger.balance_of(&wallet.pubkey()), LAMPORTS_PER_SOL);

    run_cli(&ledger, &path, &["airdrop", "0.5"]).await.unwrap();
    assert_eq!(ledger.balance_of(&wallet.pubkey()), LAMPORTS_PER_SOL + LAMPORTS_PER_SOL / 2);
}

/// Tests the `balance` and `transfer` subcommands end to end.
#[tokio::test]
async fn test_cli_balance_and_transfer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wallet.json");
    let ledger = MockLedger::new();
    let recipient = Keypair::new().pubkey().to_string();

    run_cli(&ledger, &path, &["new"]).await.unwrap();
    run_cli(&ledger, &path, &["airdrop", "3"]).await.unwrap();
    run_cli(&ledger, &path, &["balance"]).await.unwrap();
    run_cli(&ledger, &path, &["transfer", &recipient, "1.5"]).await.unwrap();

    let wallet = Wallet::load(&path).unwrap();
    assert_eq!(ledger.balance_of(&recipient.parse().unwrap()), 3 * LAMPORTS_PER_SOL / 2);
    assert_eq!(
        ledger.balance_of(&wallet.pubkey()),
        3 * LAMPORTS_PER_SOL / 2 - ledger.fee_per_signature()
    );

    let result = run_cli(&ledger, &path, &["transfer", &recipient, "5"]).await;
    assert!(matches!(result, Err(WalletError::InsufficientFunds(_))));
}

/// Tests that no subcommand runs the default sequence.
#[tokio::test]
async fn test_cli_without_subcommand() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wallet.json");
    let ledger = MockLedger::new();

    run_cli(&ledger, &path, &[]).await.unwrap();

    let wallet = Wallet::load(&path).unwrap();
    assert_eq!(ledger.balance_of(&wallet.pubkey()), 5 * LAMPORTS_PER_SOL);
}

/// Tests that subcommands needing a wallet fail before touching the ledger.
#[tokio::test]
async fn test_cli_balance_without_wallet() {
    let dir = tempdir().unwrap();
    let ledger = MockLedger::new();

    let result = run_cli(&ledger, &dir.path().join("missing.json"), &["balance"]).await;
    assert!(matches!(result, Err(WalletError::WalletError(_))));
}
