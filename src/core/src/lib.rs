//! Core data model for the Solana test network wallet.
//!
//! This crate holds the persisted wallet record, the conversion between whole
//! SOL amounts and lamports, and the set of clusters the wallet can talk to.
//! It performs no network I/O.

pub mod cluster;
pub mod errors;
pub mod types;

// Re-export commonly used types
pub use cluster::Cluster;
pub use errors::CoreError;
pub use types::{lamports_to_sol, sol_to_lamports, TransferRequest, WalletRecord, LAMPORTS_PER_SOL};
