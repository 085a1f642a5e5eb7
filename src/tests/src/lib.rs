//! Integration tests for the Solana test network wallet.


#[cfg(test)]
mod command_tests;
