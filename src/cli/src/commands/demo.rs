//! The default run: create a wallet, fund it, show the balance.

use crate::errors::WalletError;
use crate::rpc::Connection;
use crate::wallet::Wallet;
use std::path::Path;
use tracing::info;

/// SOL requested by the default run.
pub const DEMO_AIRDROP: f64 = 5.0;

/// Runs the fixed create → airdrop → balance sequence, returning the final balance in lamports.
///
/// A failed airdrop leaves the freshly written wallet file in place.
pub async fn run<C: Connection + ?Sized, P: AsRef<Path>>(
    connection: &C,
    wallet_path: P,
) -> Result<u64, WalletError> {
    let mut wallet = Wallet::new();
    wallet.generate_and_persist(&wallet_path)?;

    wallet.request_airdrop(connection, DEMO_AIRDROP).await?;

    let balance = wallet.get_balance(connection).await?;
    info!("Default run finished with {} lamports", balance);
    Ok(balance)
}
