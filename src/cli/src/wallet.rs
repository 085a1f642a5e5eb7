//! Wallet implementation for the CLI.

use crate::errors::WalletError;
use crate::rpc::Connection;
use colored::Colorize;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};
use wallet_core::{lamports_to_sol, sol_to_lamports, TransferRequest, WalletRecord};

/// A wallet holding exactly one keypair.
///
/// Every network operation takes the [`Connection`] to use; the wallet never
/// builds one itself.
pub struct Wallet {
    keypair: Keypair,
}

impl Wallet {
    /// Creates a wallet around a freshly generated keypair. Nothing is written to disk.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::new(),
        }
    }

    /// Generates a wallet and writes it to `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        let wallet = Self::new();
        wallet.save(path)?;
        Ok(wallet)
    }

    /// Loads a wallet from a file, checking that the secret key reproduces the public key.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let record: WalletRecord = serde_json::from_str(&contents)?;
        let keypair = record.to_keypair()?;
        Ok(Self { keypair })
    }

    /// Saves the wallet to a file, replacing whatever it held.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), WalletError> {
        let record = WalletRecord::from_keypair(&self.keypair);
        let contents = serde_json::to_string_pretty(&record)?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(path)?;
        file.write_all(contents.as_bytes())?;

        Ok(())
    }

    /// Replaces the held keypair with a new one and persists it.
    pub fn generate_and_persist<P: AsRef<Path>>(&mut self, path: P) -> Result<Pubkey, WalletError> {
        self.keypair = Keypair::new();
        self.save(&path)?;

        let pubkey = self.pubkey();
        info!("Wallet saved to {}", path.as_ref().display());
        println!("{} {}", "Wallet created:".green(), pubkey);
        Ok(pubkey)
    }

    /// Gets the public key of the wallet.
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Gets the keypair of the wallet.
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    /// Requests `amount` SOL from the cluster faucet and waits for confirmation.
    ///
    /// The faucet signs against a blockhash fetched here, so the wait ends in
    /// an error once that blockhash expires.
    pub async fn request_airdrop<C: Connection + ?Sized>(
        &self,
        connection: &C,
        amount: f64,
    ) -> Result<Signature, WalletError> {
        let lamports = sol_to_lamports(amount)?;
        let (blockhash, last_valid_block_height) = connection.get_latest_blockhash().await?;
        let signature = connection.request_airdrop(&self.pubkey(), lamports, &blockhash).await?;
        debug!("Airdrop signature: {}", signature);

        connection.confirm_transaction(&signature, last_valid_block_height).await?;
        info!("Airdrop of {} lamports to {} confirmed", lamports, self.pubkey());

        println!("{} {} SOL to the wallet", "Airdropped".green(), amount);
        Ok(signature)
    }

    /// Returns the wallet balance in lamports and prints it in SOL.
    pub async fn get_balance<C: Connection + ?Sized>(&self, connection: &C) -> Result<u64, WalletError> {
        let lamports = connection.get_balance(&self.pubkey()).await?;
        debug!("Balance of {}: {} lamports", self.pubkey(), lamports);

        println!("{} {} SOL", "Balance:".green(), lamports_to_sol(lamports));
        Ok(lamports)
    }

    /// Sends `amount` SOL to `to` and waits for confirmation.
    ///
    /// Fails with [`WalletError::InsufficientFunds`] without submitting anything
    /// when the balance is below the amount, and with
    /// [`WalletError::TransactionError`] when the transfer never lands before
    /// its blockhash expires. Each call creates a new transfer.
    pub async fn transfer<C: Connection + ?Sized>(
        &self,
        connection: &C,
        to: &str,
        amount: f64,
    ) -> Result<Signature, WalletError> {
        let request = TransferRequest::new(&self.keypair, to, amount)?;
        info!("Sending {} lamports from {} to {}", request.lamports, request.from, request.to);

        let balance = connection.get_balance(&request.from).await?;
        if balance < request.lamports {
            return Err(WalletError::InsufficientFunds(format!(
                "balance {} lamports < {} lamports requested",
                balance, request.lamports
            )));
        }
        debug!("Sender balance: {}", balance);

        let (blockhash, last_valid_block_height) = connection.get_latest_blockhash().await?;
        let transaction = Transaction::new_signed_with_payer(
            &[system_instruction::transfer(&request.from, &request.to, request.lamports)],
            Some(&request.from),
            &[&self.keypair],
            blockhash,
        );

        let signature = connection.send_transaction(&transaction).await?;
        connection.confirm_transaction(&signature, last_valid_block_height).await?;

        println!(
            "{} {} SOL to {}, Transaction Signature: {}",
            "Transferred".green(),
            amount,
            request.to,
            signature
        );
        Ok(signature)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}
