//! CLI wallet for the Solana test networks.

use anyhow::Result;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use wallet_cli::{dispatch, Opt, RpcConnection};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let opt = Opt::from_args();
    let config = opt.load_config()?;

    let connection = RpcConnection::from_config(&config);
    info!(
        "Using {} ({}) at {:?}",
        config.cluster,
        connection.url(),
        connection.commitment().commitment
    );

    // Run the appropriate command
    dispatch(opt.cmd, &config, &connection).await?;

    Ok(())
}
