//! Configuration for the CLI wallet.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use wallet_core::Cluster;

/// Configuration for the CLI wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// The cluster to connect to
    pub cluster: Cluster,
    /// The commitment level to query and confirm at
    pub commitment: CommitmentConfig,
    /// The wallet file
    pub wallet_path: PathBuf,
    /// SOL requested by `airdrop` when no amount is given
    pub default_airdrop: f64,
    /// Delay between signature status polls
    pub confirm_poll_interval_ms: u64,
    /// Give up waiting for confirmation after this many seconds; wait forever if unset
    pub confirm_timeout_secs: Option<u64>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::Testnet,
            commitment: CommitmentConfig::confirmed(),
            wallet_path: PathBuf::from("wallet.json"),
            default_airdrop: 1.0,
            confirm_poll_interval_ms: 500,
            confirm_timeout_secs: None,
        }
    }
}

impl WalletConfig {
    /// Loads configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Default location of the configuration file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut dir| {
            dir.push("solana-wallet");
            dir.push("config.json");
            dir
        })
    }
}
