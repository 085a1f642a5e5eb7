//! Command line arguments for the CLI wallet.

use crate::config::WalletConfig;
use anyhow::Result;
use std::path::PathBuf;
use structopt::StructOpt;
use wallet_core::Cluster;

/// Command line arguments for the CLI wallet.
#[derive(Debug, StructOpt)]
#[structopt(name = "wallet", about = "Single-keypair wallet for the Solana test networks")]
pub struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Path to the wallet file
    #[structopt(short, long, parse(from_os_str))]
    pub wallet: Option<PathBuf>,

    /// Cluster to connect to (devnet, testnet, mainnet-beta, localnet or an RPC URL)
    #[structopt(short = "u", long)]
    pub cluster: Option<Cluster>,

    /// Subcommand to run; without one, creates a wallet, airdrops 5 SOL and prints the balance
    #[structopt(subcommand)]
    pub cmd: Option<Command>,
}

/// Subcommands for the CLI wallet.
#[derive(Debug, PartialEq, StructOpt)]
pub enum Command {
    /// Create a new wallet, overwriting the wallet file
    #[structopt(name = "new")]
    New,

    /// Request SOL from the cluster faucet
    #[structopt(name = "airdrop")]
    Airdrop {
        /// Amount of SOL to request (defaults to the configured amount, 1 SOL)
        amount: Option<f64>,
    },

    /// Get the balance of the wallet
    #[structopt(name = "balance")]
    Balance,

    /// Send SOL to another account
    #[structopt(name = "transfer")]
    Transfer {
        /// Recipient address (base58)
        address: String,

        /// Amount of SOL to send
        amount: f64,
    },
}

impl Opt {
    /// Loads the configuration file and applies the command line overrides.
    ///
    /// An explicit `--config` must exist; otherwise the default location is
    /// read when present.
    pub fn load_config(&self) -> Result<WalletConfig> {
        let config = match &self.config {
            Some(path) => WalletConfig::from_file(path)?,
            None => match WalletConfig::default_path() {
                Some(path) if path.exists() => WalletConfig::from_file(&path)?,
                _ => WalletConfig::default(),
            },
        };
        Ok(self.apply_overrides(config))
    }

    /// Overrides the cluster and wallet file with those given on the command line.
    pub fn apply_overrides(&self, mut config: WalletConfig) -> WalletConfig {
        if let Some(cluster) = &self.cluster {
            config.cluster = cluster.clone();
        }
        if let Some(wallet) = &self.wallet {
            config.wallet_path = wallet.clone();
        }
        config
    }
}
