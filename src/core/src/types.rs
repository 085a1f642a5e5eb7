//! Core types for the Solana test network wallet.

use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::keypair::keypair_from_seed;
use solana_sdk::signer::Signer;
use std::str::FromStr;

pub use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Length of the Solana keypair encoding: 32-byte seed followed by the 32-byte public key.
const KEYPAIR_LENGTH: usize = 64;

/// The wallet as it is written to disk.
///
/// `secret_key` holds the 64-byte keypair encoding produced by
/// [`Keypair::to_bytes`], serialised as a JSON array of integers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    /// The base58-encoded public key
    pub public_key: String,
    /// The raw keypair bytes
    pub secret_key: Vec<u8>,
}

impl WalletRecord {
    /// Creates a record describing the given keypair.
    pub fn from_keypair(keypair: &Keypair) -> Self {
        Self {
            public_key: keypair.pubkey().to_string(),
            secret_key: keypair.to_bytes().to_vec(),
        }
    }

    /// Rebuilds the keypair from the secret key bytes.
    ///
    /// The public key is re-derived from the 32-byte seed and must match both
    /// the trailing half of `secret_key` and `public_key`.
    pub fn to_keypair(&self) -> Result<Keypair, CoreError> {
        if self.secret_key.len() != KEYPAIR_LENGTH {
            return Err(CoreError::InvalidSecretKey(format!(
                "expected {} bytes, got {}",
                KEYPAIR_LENGTH,
                self.secret_key.len()
            )));
        }

        let keypair = keypair_from_seed(&self.secret_key[..32])
            .map_err(|e| CoreError::InvalidSecretKey(e.to_string()))?;
        let derived = keypair.pubkey();

        if derived.to_bytes()[..] != self.secret_key[32..] {
            return Err(CoreError::InvalidSecretKey(
                "embedded public key does not match the secret seed".to_string(),
            ));
        }

        if derived.to_string() != self.public_key {
            return Err(CoreError::KeyMismatch {
                recorded: self.public_key.clone(),
                derived: derived.to_string(),
            });
        }

        Ok(keypair)
    }

    /// Parses the recorded public key.
    pub fn pubkey(&self) -> Result<Pubkey, CoreError> {
        parse_pubkey(&self.public_key)
    }
}

/// A native SOL transfer, already converted to lamports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    /// The sender
    pub from: Pubkey,
    /// The recipient
    pub to: Pubkey,
    /// The amount in lamports
    pub lamports: u64,
}

impl TransferRequest {
    /// Builds a transfer from a sender keypair, a base58 recipient and a whole SOL amount.
    pub fn new(from: &Keypair, to: &str, amount_whole: f64) -> Result<Self, CoreError> {
        Ok(Self {
            from: from.pubkey(),
            to: parse_pubkey(to)?,
            lamports: sol_to_lamports(amount_whole)?,
        })
    }
}

/// Parses a base58 public key.
pub fn parse_pubkey(address: &str) -> Result<Pubkey, CoreError> {
    Pubkey::from_str(address.trim()).map_err(|e| CoreError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Converts a whole SOL amount to lamports.
///
/// Fractions below one lamport are truncated. Zero is allowed and left for the
/// network to accept or reject.
pub fn sol_to_lamports(amount: f64) -> Result<u64, CoreError> {
    if !amount.is_finite() {
        return Err(CoreError::InvalidAmount(format!("{} is not a finite number", amount)));
    }
    if amount < 0.0 {
        return Err(CoreError::InvalidAmount(format!("{} is negative", amount)));
    }

    let lamports = amount * LAMPORTS_PER_SOL as f64;
    if lamports >= u64::MAX as f64 {
        return Err(CoreError::InvalidAmount(format!("{} SOL overflows the lamport range", amount)));
    }

    // Snap values within float noise of a whole lamport before truncating.
    let rounded = lamports.round();
    let lamports = if (lamports - rounded).abs() < 1e-6 {
        rounded
    } else {
        lamports.trunc()
    };

    Ok(lamports as u64)
}

/// Converts lamports to whole SOL for display.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
