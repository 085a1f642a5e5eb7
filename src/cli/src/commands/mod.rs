//! Commands for the CLI wallet.

pub mod airdrop;
pub mod balance;
pub mod demo;
pub mod new;
pub mod transfer;

use crate::args::Command;
use crate::config::WalletConfig;
use crate::errors::WalletError;
use crate::rpc::Connection;
use crate::wallet::Wallet;
use colored::Colorize;
use std::path::Path;
use tracing::info;
use wallet_core::lamports_to_sol;

/// Runs `cmd` against the configured wallet file, or the default run when there is none.
pub async fn dispatch<C: Connection + ?Sized>(
    cmd: Option<Command>,
    config: &WalletConfig,
    connection: &C,
) -> Result<(), WalletError> {
    match cmd {
        None => {
            demo::run(connection, &config.wallet_path).await?;
        }
        Some(Command::New) => {
            new::run(&config.wallet_path).await?;
            println!("{} {}", "Wallet saved:".green(), config.wallet_path.display());
        }
        Some(Command::Airdrop { amount }) => {
            if !config.cluster.has_faucet() {
                println!("{}", format!("WARNING: {} has no faucet", config.cluster).red());
            }
            let amount = amount.unwrap_or(config.default_airdrop);
            let signature = airdrop::run(connection, &config.wallet_path, amount).await?;
            println!("{} {}", "Airdrop signature:".green(), signature);
        }
        Some(Command::Balance) => {
            let lamports = balance::run(connection, &config.wallet_path).await?;
            info!("Balance: {} lamports ({} SOL)", lamports, lamports_to_sol(lamports));
        }
        Some(Command::Transfer { address, amount }) => {
            transfer::run(connection, &config.wallet_path, &address, amount).await?;
        }
    }

    Ok(())
}

/// Loads the wallet a previous `new` wrote, with a hint when it is missing.
pub(crate) fn load_wallet<P: AsRef<Path>>(wallet_path: P) -> Result<Wallet, WalletError> {
    if !wallet_path.as_ref().exists() {
        return Err(WalletError::WalletError(format!(
            "Wallet file {} does not exist. Use `new` to create a wallet.",
            wallet_path.as_ref().display()
        )));
    }

    Wallet::load(&wallet_path).map_err(|e| {
        WalletError::WalletError(format!(
            "Failed to load wallet {}: {}",
            wallet_path.as_ref().display(),
            e
        ))
    })
}
