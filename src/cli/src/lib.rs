//! CLI wallet for the Solana test networks.

pub mod args;
pub mod commands;
pub mod config;
pub mod errors;
pub mod rpc;
pub mod wallet;

// Re-export commonly used types and functions
pub use args::{Command, Opt};
pub use commands::{airdrop, balance, demo, dispatch, new, transfer};
pub use config::WalletConfig;
pub use errors::WalletError;
pub use rpc::{Connection, RpcConnection};
pub use wallet::Wallet;
