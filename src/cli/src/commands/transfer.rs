//! Transfer command for the CLI wallet.

use crate::commands::load_wallet;
use crate::errors::WalletError;
use crate::rpc::Connection;
use solana_sdk::signature::Signature;
use std::path::Path;

/// Runs the transfer command.
pub async fn run<C: Connection + ?Sized, P: AsRef<Path>>(
    connection: &C,
    wallet_path: P,
    to: &str,
    amount: f64,
) -> Result<Signature, WalletError> {
    let wallet = load_wallet(wallet_path)?;
    wallet.transfer(connection, to, amount).await
}
