//! New wallet command for the CLI wallet.

use crate::errors::WalletError;
use crate::wallet::Wallet;
use solana_sdk::pubkey::Pubkey;
use std::path::Path;
use tracing::{info, warn};

/// Runs the new command, overwriting any wallet already at `wallet_path`.
pub async fn run<P: AsRef<Path>>(wallet_path: P) -> Result<Pubkey, WalletError> {
    if wallet_path.as_ref().exists() {
        warn!("Overwriting existing wallet at {}", wallet_path.as_ref().display());
    }

    let mut wallet = Wallet::new();
    let pubkey = wallet.generate_and_persist(&wallet_path)?;
    info!("Wallet address: {}", pubkey);

    Ok(pubkey)
}
