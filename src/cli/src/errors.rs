//! Error types for the CLI wallet.

use reqwest::StatusCode;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::rpc_request::RpcError;
use solana_sdk::instruction::InstructionError;
use solana_sdk::system_instruction::SystemError;
use solana_sdk::transaction::TransactionError;
use std::fmt;
use std::error::Error as StdError;
use wallet_core::CoreError;

/// Errors that can occur in the CLI wallet.
#[derive(Debug)]
pub enum WalletError {
    /// Error when a file operation fails.
    FileError(std::io::Error),

    /// Error when JSON serialization or deserialization fails.
    JsonError(serde_json::Error),

    /// Error raised by the core data model (amounts, addresses, keys).
    Core(CoreError),

    /// Error when the endpoint is unreachable or its response is malformed.
    NetworkError(String),

    /// Error when the node answers a request with an unclassified JSON-RPC error.
    NodeRequestFailed(String),

    /// Error when the faucet has no funds left to hand out.
    FaucetExhausted(String),

    /// Error when the faucet or endpoint refuses the request because of a rate limit.
    RateLimited(String),

    /// Error when the wallet cannot cover a transfer and its fee.
    InsufficientFunds(String),

    /// Error when a transaction landed but failed on chain.
    TransactionError(String),

    /// Error when a transaction did not reach the requested commitment in time.
    ConfirmationTimeout(String),

    /// Error when a wallet operation fails.
    WalletError(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::FileError(e) => write!(f, "File error: {}", e),
            WalletError::JsonError(e) => write!(f, "JSON error: {}", e),
            WalletError::Core(e) => write!(f, "{}", e),
            WalletError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            WalletError::NodeRequestFailed(msg) => write!(f, "Node request failed: {}", msg),
            WalletError::FaucetExhausted(msg) => write!(f, "Faucet exhausted: {}", msg),
            WalletError::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            WalletError::InsufficientFunds(msg) => write!(f, "Insufficient funds: {}", msg),
            WalletError::TransactionError(msg) => write!(f, "Transaction error: {}", msg),
            WalletError::ConfirmationTimeout(msg) => write!(f, "Confirmation timed out: {}", msg),
            WalletError::WalletError(msg) => write!(f, "Wallet error: {}", msg),
        }
    }
}

impl StdError for WalletError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            WalletError::FileError(e) => Some(e),
            WalletError::JsonError(e) => Some(e),
            WalletError::Core(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WalletError {
    fn from(error: std::io::Error) -> Self {
        WalletError::FileError(error)
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(error: serde_json::Error) -> Self {
        WalletError::JsonError(error)
    }
}

impl From<CoreError> for WalletError {
    fn from(error: CoreError) -> Self {
        WalletError::Core(error)
    }
}

impl From<ClientError> for WalletError {
    fn from(error: ClientError) -> Self {
        // Preflight failures carry the simulated transaction error.
        if let Some(err) = error.get_transaction_error() {
            return if is_insufficient_funds(&err) {
                WalletError::InsufficientFunds(error.to_string())
            } else {
                WalletError::TransactionError(error.to_string())
            };
        }

        match error.kind() {
            ClientErrorKind::Reqwest(e) if e.status() == Some(StatusCode::TOO_MANY_REQUESTS) => {
                WalletError::RateLimited(error.to_string())
            }
            ClientErrorKind::RpcError(RpcError::RpcResponseError { code: 429, .. }) => {
                WalletError::RateLimited(error.to_string())
            }
            ClientErrorKind::RpcError(RpcError::RpcResponseError { .. })
            | ClientErrorKind::RpcError(RpcError::ForUser(_)) => WalletError::NodeRequestFailed(error.to_string()),
            ClientErrorKind::Reqwest(_)
            | ClientErrorKind::Io(_)
            | ClientErrorKind::SerdeJson(_)
            | ClientErrorKind::RpcError(_) => WalletError::NetworkError(error.to_string()),
            _ => WalletError::NodeRequestFailed(error.to_string()),
        }
    }
}

/// Whether the runtime rejected a transaction because the payer cannot cover it.
fn is_insufficient_funds(err: &TransactionError) -> bool {
    match err {
        TransactionError::InsufficientFundsForFee | TransactionError::AccountNotFound => true,
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            *code == SystemError::ResultWithNegativeLamports as u32
        }
        _ => false,
    }
}
