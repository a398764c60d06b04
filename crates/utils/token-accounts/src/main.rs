//! # Token Accounts Utility
//!
//! Lists the SPL token accounts owned by a wallet, using the same
//! `getProgramAccounts` query as the marketplace frontend.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package token-accounts -- <PUBKEY> [--endpoint URL | --network NAME]
//! ```
//!
//! The endpoint is picked in this order:
//! 1. `--endpoint`
//! 2. `--network`
//! 3. `SOLANA_RPC_URL`
//! 4. the endpoint remembered from the previous run (`connectionEndpoint`)
//! 5. `SOLANA_NETWORK` (default `mainnet-beta`)
//!
//! The raw RPC result is printed as pretty JSON on stdout.

use anyhow::Context;
use clap::Parser;
use lib_core::config::{core_config, init_config};
use lib_core::store::{FileStore, KeyValueStore, CONNECTION_ENDPOINT_KEY};
use lib_core::Config;
use lib_solana::spl_token::get_program_accounts;
use lib_solana::{HttpRpcClient, Network, Pubkey, TokenAccountInfo};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "token-accounts",
    version,
    about = "List the SPL token accounts owned by a Solana wallet",
    long_about = None
)]
struct Cli {
    /// Base58 public key of the wallet
    pubkey: String,

    /// JSON-RPC endpoint to query
    #[arg(long, conflicts_with = "network")]
    endpoint: Option<String>,

    /// Named cluster: mainnet-beta, devnet, localnet
    #[arg(short, long)]
    network: Option<Network>,

    /// Print a one-line summary per account instead of the raw result
    #[arg(long)]
    summary: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("token_accounts=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    init_config()?;
    let config = core_config();

    let owner: Pubkey = cli.pubkey.parse().context("invalid wallet public key")?;
    let store = FileStore::open(&config.store_path)?;
    let remembered = store.get(CONNECTION_ENDPOINT_KEY)?;
    let endpoint = select_endpoint(&cli, config, remembered)?;

    info!(%owner, %endpoint, "Querying token accounts");
    let client = HttpRpcClient::new(&endpoint)?;
    let result = get_program_accounts(&client, &owner).await?;

    store.set(CONNECTION_ENDPOINT_KEY, &endpoint)?;
    debug!(path = %store.path().display(), "Remembered endpoint");

    if cli.summary {
        let accounts = TokenAccountInfo::parse_all(&result);
        info!(
            accounts = accounts.len(),
            nfts = accounts.iter().filter(|a| a.is_nft()).count(),
            "Token accounts found"
        );
        for account in &accounts {
            println!(
                "{}  mint {}  amount {}{}",
                account.address,
                account.mint,
                account.ui_amount,
                if account.is_nft() { "  (nft)" } else { "" }
            );
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

fn select_endpoint(cli: &Cli, config: &Config, remembered: Option<String>) -> anyhow::Result<String> {
    if let Some(endpoint) = &cli.endpoint {
        return Ok(endpoint.clone());
    }
    if let Some(network) = cli.network {
        return Ok(network.endpoint().to_string());
    }
    if let Some(url) = &config.rpc_url {
        return Ok(url.clone());
    }
    if let Some(endpoint) = remembered.filter(|e| !e.is_empty()) {
        return Ok(endpoint);
    }
    Ok(lib_solana::client::resolve_endpoint(config)?)
}
