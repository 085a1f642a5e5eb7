//! Named Solana clusters and their public RPC endpoints.

use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Solana cluster the wallet can connect to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Cluster {
    /// The public development network
    Devnet,
    /// The public test network
    Testnet,
    /// The production network (no faucet)
    MainnetBeta,
    /// A `solana-test-validator` on this machine
    Localnet,
    /// Any other JSON-RPC endpoint
    Custom(String),
}

impl Cluster {
    /// Returns the JSON-RPC URL of the cluster.
    pub fn url(&self) -> &str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
            Cluster::Custom(url) => url,
        }
    }

    /// Whether the cluster runs a faucet that honours airdrop requests.
    pub fn has_faucet(&self) -> bool {
        !matches!(self, Cluster::MainnetBeta)
    }
}

impl Default for Cluster {
    fn default() -> Self {
        Cluster::Testnet
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::Devnet => write!(f, "devnet"),
            Cluster::Testnet => write!(f, "testnet"),
            Cluster::MainnetBeta => write!(f, "mainnet-beta"),
            Cluster::Localnet => write!(f, "localnet"),
            Cluster::Custom(url) => write!(f, "{}", url),
        }
    }
}

impl FromStr for Cluster {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_ascii_lowercase();
        match lowered.as_str() {
            "devnet" | "d" => Ok(Cluster::Devnet),
            "testnet" | "t" => Ok(Cluster::Testnet),
            "mainnet-beta" | "mainnet" | "m" => Ok(Cluster::MainnetBeta),
            "localnet" | "localhost" | "l" => Ok(Cluster::Localnet),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(Cluster::Custom(trimmed.to_string()))
            }
            _ => Err(CoreError::UnknownCluster(s.to_string())),
        }
    }
}

impl From<Cluster> for String {
    fn from(cluster: Cluster) -> Self {
        cluster.to_string()
    }
}

impl TryFrom<String> for Cluster {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
