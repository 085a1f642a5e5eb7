//! Connection to a Solana JSON-RPC endpoint.
//!
//! [`Connection`] is the set of remote operations the wallet relies on. The
//! entry point builds an [`RpcConnection`] and hands it to every wallet call;
//! tests substitute an in-memory ledger.

use crate::config::WalletConfig;
use crate::errors::WalletError;
use async_trait::async_trait;
use solana_client::client_error::ClientError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcRequestAirdropConfig;
use solana_client::rpc_request::RpcRequest;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{Transaction, TransactionError};
use std::str::FromStr;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Remote operations consumed by the wallet.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Asks the cluster faucet to credit `lamports` to `pubkey`, building the
    /// faucet transaction on `recent_blockhash`.
    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
        recent_blockhash: &Hash,
    ) -> Result<Signature, WalletError>;

    /// Blocks until the transaction reaches the connection's commitment level.
    ///
    /// Fails with [`WalletError::TransactionError`] when the transaction lands
    /// with an error, or when the block height passes `last_valid_block_height`
    /// without it landing.
    async fn confirm_transaction(
        &self,
        signature: &Signature,
        last_valid_block_height: u64,
    ) -> Result<(), WalletError>;

    /// Returns the balance of `pubkey` in lamports.
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, WalletError>;

    /// Returns a recent blockhash and the last block height it is valid for.
    async fn get_latest_blockhash(&self) -> Result<(Hash, u64), WalletError>;

    /// Submits a signed transaction without waiting for confirmation.
    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, WalletError>;
}

/// A [`Connection`] backed by the Solana RPC client.
pub struct RpcConnection {
    client: RpcClient,
    poll_interval: Duration,
    confirm_timeout: Option<Duration>,
}

impl RpcConnection {
    /// Creates a connection to `url` at the given commitment level.
    pub fn new(url: impl Into<String>, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.into(), commitment),
            poll_interval: Duration::from_millis(500),
            confirm_timeout: None,
        }
    }

    /// Creates a connection from the wallet configuration.
    pub fn from_config(config: &WalletConfig) -> Self {
        Self::new(config.cluster.url(), config.commitment)
            .with_poll_interval(Duration::from_millis(config.confirm_poll_interval_ms))
            .with_confirm_timeout(config.confirm_timeout_secs.map(Duration::from_secs))
    }

    /// Sets the delay between signature status polls.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Bounds how long `confirm_transaction` waits, on top of blockhash expiry.
    pub fn with_confirm_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.confirm_timeout = timeout;
        self
    }

    /// The endpoint URL.
    pub fn url(&self) -> String {
        self.client.url()
    }

    /// The commitment level requests are made at.
    pub fn commitment(&self) -> CommitmentConfig {
        self.client.commitment()
    }

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<Result<(), TransactionError>>, WalletError> {
        Ok(self
            .client
            .get_signature_status_with_commitment(signature, self.client.commitment())
            .await?)
    }
}

#[async_trait]
impl Connection for RpcConnection {
    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
        recent_blockhash: &Hash,
    ) -> Result<Signature, WalletError> {
        info!("Requesting airdrop of {} lamports to {}", lamports, pubkey);

        // RpcClient::request_airdrop replaces every failure with the same
        // message, so the request is sent directly to keep the error kind.
        let config = RpcRequestAirdropConfig {
            recent_blockhash: Some(recent_blockhash.to_string()),
            commitment: Some(self.client.commitment()),
        };
        let signature: String = self
            .client
            .send(
                RpcRequest::RequestAirdrop,
                serde_json::json!([pubkey.to_string(), lamports, config]),
            )
            .await
            .map_err(classify_airdrop_error)?;

        Signature::from_str(&signature)
            .map_err(|e| WalletError::NetworkError(format!("Invalid signature {}: {}", signature, e)))
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        last_valid_block_height: u64,
    ) -> Result<(), WalletError> {
        let started = Instant::now();
        loop {
            if let Some(result) = self.signature_status(signature).await? {
                debug!("{} settled after {:?}", signature, started.elapsed());
                return landed(signature, result);
            }

            let block_height = self.client.get_block_height().await?;
            if block_height > last_valid_block_height {
                // The status may have landed between the two requests.
                return match self.signature_status(signature).await? {
                    Some(result) => landed(signature, result),
                    None => Err(WalletError::TransactionError(format!(
                        "{} expired: block height {} passed its last valid block height {}",
                        signature, block_height, last_valid_block_height
                    ))),
                };
            }

            if let Some(timeout) = self.confirm_timeout {
                if started.elapsed() >= timeout {
                    return Err(WalletError::ConfirmationTimeout(format!(
                        "{} not {:?} after {:?}",
                        signature,
                        self.client.commitment().commitment,
                        timeout
                    )));
                }
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, WalletError> {
        Ok(self.client.get_balance(pubkey).await?)
    }

    async fn get_latest_blockhash(&self) -> Result<(Hash, u64), WalletError> {
        Ok(self
            .client
            .get_latest_blockhash_with_commitment(self.client.commitment())
            .await?)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, WalletError> {
        Ok(self.client.send_transaction(transaction).await?)
    }
}

fn landed(signature: &Signature, result: Result<(), TransactionError>) -> Result<(), WalletError> {
    result.map_err(|err| WalletError::TransactionError(format!("{} failed: {}", signature, err)))
}

/// Maps a failed `requestAirdrop` onto the wallet error taxonomy.
///
/// The node answers a faucet refusal with a JSON-RPC error, so any error
/// response that is not a rate limit means the faucet did not pay out.
pub fn classify_airdrop_error(error: ClientError) -> WalletError {
    match WalletError::from(error) {
        WalletError::NodeRequestFailed(message) => WalletError::FaucetExhausted(message),
        other => other,
    }
}
