//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Error when a whole-unit amount cannot be converted to lamports.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Error when a string is not a valid base58 public key.
    #[error("Invalid address {address}: {reason}")]
    InvalidAddress {
        /// The address as supplied
        address: String,
        /// Why parsing failed
        reason: String,
    },

    /// Error when the persisted secret key bytes are malformed.
    #[error("Invalid secret key: {0}")]
    InvalidSecretKey(String),

    /// Error when the secret key does not reproduce the recorded public key.
    #[error("Key mismatch: record says {recorded}, secret key derives {derived}")]
    KeyMismatch {
        /// The public key stored in the record
        recorded: String,
        /// The public key derived from the secret key
        derived: String,
    },

    /// Error when a cluster name or URL is not recognised.
    #[error("Unknown cluster: {0}")]
    UnknownCluster(String),
}
