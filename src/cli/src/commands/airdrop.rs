//! Airdrop command for the CLI wallet.

use crate::commands::load_wallet;
use crate::errors::WalletError;
use crate::rpc::Connection;
use solana_sdk::signature::Signature;
use std::path::Path;
use tracing::info;

/// Runs the airdrop command.
pub async fn run<C: Connection + ?Sized, P: AsRef<Path>>(
    connection: &C,
    wallet_path: P,
    amount: f64,
) -> Result<Signature, WalletError> {
    let wallet = load_wallet(wallet_path)?;
    info!("Requesting {} SOL for {}", amount, wallet.pubkey());

    wallet.request_airdrop(connection, amount).await
}
