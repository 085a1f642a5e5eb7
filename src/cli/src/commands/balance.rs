//! Balance command for the CLI wallet.

use crate::commands::load_wallet;
use crate::errors::WalletError;
use crate::rpc::Connection;
use std::path::Path;
use tracing::info;

/// Runs the balance command, returning lamports.
pub async fn run<C: Connection + ?Sized, P: AsRef<Path>>(
    connection: &C,
    wallet_path: P,
) -> Result<u64, WalletError> {
    let wallet = load_wallet(wallet_path)?;
    info!("Getting balance for address: {}", wallet.pubkey());

    wallet.get_balance(connection).await
}
